//! Prime implicant generation by repeated pairwise merging

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use super::implicant::Implicant;
use super::Minterm;

/// Implicants and the minterms each covers
pub type CoverMap = BTreeMap<Implicant, BTreeSet<Minterm>>;

/// Working set of implicants during prime generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    implicants: CoverMap,
}

impl PrimeTable {
    /// Start from one single-minterm implicant per minterm
    pub fn new(minterms: &BTreeSet<Minterm>, num_inputs: usize) -> Self {
        let implicants = minterms
            .iter()
            .map(|&m| (Implicant::from_minterm(m, num_inputs), BTreeSet::from([m])))
            .collect();
        PrimeTable { implicants }
    }

    pub fn implicants(&self) -> &CoverMap {
        &self.implicants
    }

    /// Implicants grouped by their number of positive literals
    fn groups(&self) -> BTreeMap<usize, Vec<&Implicant>> {
        let mut groups: BTreeMap<usize, Vec<&Implicant>> = BTreeMap::new();
        for implicant in self.implicants.keys() {
            groups.entry(implicant.weight()).or_default().push(implicant);
        }
        groups
    }

    /// Merge every combinable pair from adjacent weight groups once
    ///
    /// Returns the number of successful merges. Merged operands are removed
    /// and the results are added with the union of the covered minterms.
    pub fn merge_pass(&mut self) -> usize {
        let groups = self.groups();
        let mut merged: BTreeSet<Implicant> = BTreeSet::new();
        let mut results: CoverMap = BTreeMap::new();
        let mut count = 0;

        for (weight, lower) in &groups {
            let Some(upper) = groups.get(&(weight + 1)) else {
                continue;
            };
            for a in lower {
                for b in upper {
                    if let Some(combined) = a.merge(b) {
                        trace!("merge {} + {} -> {}", a, b, combined);
                        let covered = results.entry(combined).or_default();
                        covered.extend(&self.implicants[*a]);
                        covered.extend(&self.implicants[*b]);
                        merged.insert((*a).clone());
                        merged.insert((*b).clone());
                        count += 1;
                    }
                }
            }
        }

        if count > 0 {
            self.implicants.retain(|implicant, _| !merged.contains(implicant));
            for (implicant, covered) in results {
                self.implicants.entry(implicant).or_default().extend(covered);
            }
        }
        count
    }

    /// Run merge passes until none succeeds, returning the prime implicants
    pub fn reduce(mut self) -> CoverMap {
        let mut pass = 0;
        loop {
            pass += 1;
            let merges = self.merge_pass();
            trace!(pass, merges, implicants = self.implicants.len(), "merge pass");
            if merges == 0 {
                return self.implicants;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(map: &CoverMap) -> Vec<String> {
        map.keys().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_initial_table() {
        let table = PrimeTable::new(&BTreeSet::from([0, 3]), 2);
        assert_eq!(keys(table.implicants()), vec!["00", "11"]);
    }

    #[test]
    fn test_single_pass() {
        let mut table = PrimeTable::new(&BTreeSet::from([0, 1, 3]), 2);
        assert_eq!(table.merge_pass(), 2);
        assert_eq!(keys(table.implicants()), vec!["-1", "0-"]);
        let bits = &table.implicants()[&"-1".parse::<Implicant>().unwrap()];
        assert_eq!(bits, &BTreeSet::from([1, 3]));
    }

    #[test]
    fn test_reduce_collapses_duplicates() {
        let all: BTreeSet<Minterm> = (0..8).collect();
        let primes = PrimeTable::new(&all, 3).reduce();
        assert_eq!(keys(&primes), vec!["---"]);
        assert_eq!(primes.values().next().unwrap().len(), 8);
    }

    #[test]
    fn test_reduce_keeps_unmergeable_terms() {
        let primes = PrimeTable::new(&BTreeSet::from([0, 3, 7]), 3).reduce();
        assert_eq!(keys(&primes), vec!["-11", "000"]);
    }

    #[test]
    fn test_empty() {
        let primes = PrimeTable::new(&BTreeSet::new(), 3).reduce();
        assert!(primes.is_empty());
    }
}
