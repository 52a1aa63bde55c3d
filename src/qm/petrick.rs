//! Petrick's method for the cyclic part of the prime chart

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use super::implicant::Implicant;
use super::Minterm;

type Product = BTreeSet<Implicant>;

/// Drop every product that strictly contains another product
fn absorb(products: BTreeSet<Product>) -> BTreeSet<Product> {
    products
        .iter()
        .filter(|p| {
            !products
                .iter()
                .any(|q| q.len() < p.len() && q.is_subset(p))
        })
        .cloned()
        .collect()
}

fn total_literals(product: &Product) -> usize {
    product.iter().map(Implicant::literal_count).sum()
}

/// Choose a minimum set of primes covering every remaining minterm
///
/// The product of sums is expanded one minterm at a time with absorption
/// after each step. Among the smallest products the one with the fewest
/// literals wins, then the lexicographically smallest.
pub fn solve_cover(remaining: &BTreeMap<Minterm, BTreeSet<Implicant>>) -> BTreeSet<Implicant> {
    let mut products: BTreeSet<Product> = BTreeSet::from([Product::new()]);

    for (minterm, covering) in remaining {
        let expanded = products
            .iter()
            .flat_map(|product| {
                covering.iter().map(move |implicant| {
                    let mut next = product.clone();
                    next.insert(implicant.clone());
                    next
                })
            })
            .collect();
        products = absorb(expanded);
        trace!(minterm, candidates = products.len(), "petrick step");
    }

    products
        .into_iter()
        .min_by(|a, b| {
            a.len()
                .cmp(&b.len())
                .then_with(|| total_literals(a).cmp(&total_literals(b)))
                .then_with(|| a.cmp(b))
        })
        .unwrap_or_default()
}
