//! Essential prime implicant selection

use std::collections::{BTreeMap, BTreeSet};

use super::implicant::Implicant;
use super::primes::CoverMap;
use super::Minterm;

/// Result of essential prime selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EssentialSelection {
    /// Primes that are the only cover of some required minterm
    pub essentials: BTreeSet<Implicant>,
    /// Required minterms not covered by an essential prime, with their primes
    pub remaining: BTreeMap<Minterm, BTreeSet<Implicant>>,
}

/// Build the prime chart over the required minterms and pick the essentials
///
/// Don't-care minterms never enter the chart.
pub fn select_essentials(primes: &CoverMap, required: &BTreeSet<Minterm>) -> EssentialSelection {
    let chart: BTreeMap<Minterm, BTreeSet<Implicant>> = required
        .iter()
        .map(|&m| {
            let covering = primes
                .iter()
                .filter(|(_, covered)| covered.contains(&m))
                .map(|(implicant, _)| implicant.clone())
                .collect();
            (m, covering)
        })
        .collect();

    let essentials: BTreeSet<Implicant> = chart
        .values()
        .filter(|covering| covering.len() == 1)
        .flat_map(|covering| covering.iter().cloned())
        .collect();

    let remaining = chart
        .into_iter()
        .filter(|(m, _)| {
            !essentials
                .iter()
                .any(|implicant| primes.get(implicant).is_some_and(|c| c.contains(m)))
        })
        .collect();

    EssentialSelection {
        essentials,
        remaining,
    }
}
