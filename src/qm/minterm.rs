//! Expansion of truth table rows into minterms

use std::collections::BTreeSet;

use crate::pla::{RowKind, TruthTable};

use super::Minterm;

/// Required and don't-care minterms of a truth table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintermSets {
    pub required: BTreeSet<Minterm>,
    pub dont_care: BTreeSet<Minterm>,
}

impl MintermSets {
    /// Expand every ON and don't-care row of the table
    ///
    /// OFF rows are dropped. A minterm listed by both an ON and a don't-care
    /// row is required. Expansion doubles for every `-` in a row.
    pub fn from_table(table: &TruthTable) -> Self {
        let mut sets = MintermSets::default();

        for row in table.rows() {
            let target = match row.kind() {
                RowKind::On => &mut sets.required,
                RowKind::DontCare => &mut sets.dont_care,
                RowKind::Off => continue,
            };
            target.extend(expand(row.inputs()));
        }

        let required = &sets.required;
        sets.dont_care.retain(|m| !required.contains(m));
        sets
    }

    /// Every minterm the cover may use
    pub fn all(&self) -> BTreeSet<Minterm> {
        self.required.union(&self.dont_care).copied().collect()
    }
}

/// All minterms matched by a row of literals
pub(crate) fn expand(literals: &[Option<bool>]) -> Vec<Minterm> {
    let mut minterms: Vec<Minterm> = vec![0];
    for lit in literals {
        minterms = match lit {
            Some(false) => minterms.into_iter().map(|m| m << 1).collect(),
            Some(true) => minterms.into_iter().map(|m| m << 1 | 1).collect(),
            None => minterms
                .into_iter()
                .flat_map(|m| [m << 1, m << 1 | 1])
                .collect(),
        };
    }
    minterms
}
