//! Implication table for state equivalence
//!
//! The table has one entry per unordered pair of distinct states. An entry is
//! either [`Implication::Incompatible`], or the list of successor pairs that
//! must themselves be equivalent for the pair to be equivalent.
//!
//! Incompatibility only ever spreads: [`ImplicationTable::propagate`] marks a
//! pair incompatible once any of its implied pairs is, and repeats full passes
//! until one pass marks nothing. The pair space is finite, so this terminates.

use std::fmt;

use super::{StateId, StateTable};

/// Entry of the implication table for one pair of states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Implication {
    /// The pair is proven distinguishable
    Incompatible,
    /// Successor pairs, one per input symbol, that the pair depends on
    Implies(Vec<(StateId, StateId)>),
}

impl Implication {
    /// Whether the pair is still an equivalence candidate
    pub fn is_compatible(&self) -> bool {
        matches!(self, Implication::Implies(_))
    }
}

/// Triangular implication table over the states of a [`StateTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicationTable {
    names: Vec<String>,
    entries: Vec<Implication>,
}

impl ImplicationTable {
    /// Build the initial table
    ///
    /// Pairs whose output sequences differ start out incompatible; every other
    /// pair records its successor pairs.
    pub fn new(table: &StateTable) -> Self {
        let n = table.num_states();
        let mut entries = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for x in 0..n {
            for y in (x + 1)..n {
                let same_outputs = table.outputs(x).eq(table.outputs(y));
                let entry = if same_outputs {
                    Implication::Implies(
                        table
                            .transitions(x)
                            .iter()
                            .zip(table.transitions(y))
                            .map(|(tx, ty)| (tx.next, ty.next))
                            .collect(),
                    )
                } else {
                    Implication::Incompatible
                };
                entries.push(entry);
            }
        }

        ImplicationTable {
            names: table.state_names().iter().map(|s| s.to_string()).collect(),
            entries,
        }
    }

    /// Number of states the table ranges over
    pub fn num_states(&self) -> usize {
        self.names.len()
    }

    /// Position of the pair `(x, y)` with `x < y` in the triangular layout
    fn index(&self, x: StateId, y: StateId) -> usize {
        let (x, y) = if x < y { (x, y) } else { (y, x) };
        let n = self.num_states();
        x * n - x * (x + 1) / 2 + (y - x - 1)
    }

    /// Entry for a pair of distinct states, in either order
    ///
    /// # Panics
    ///
    /// Panics if `x == y` or either id is out of range.
    pub fn get(&self, x: StateId, y: StateId) -> &Implication {
        assert_ne!(x, y, "implication table has no entry for a state paired with itself");
        &self.entries[self.index(x, y)]
    }

    /// Whether two states are still equivalence candidates
    ///
    /// A state is always compatible with itself.
    pub fn is_compatible(&self, x: StateId, y: StateId) -> bool {
        x == y || self.get(x, y).is_compatible()
    }

    /// All pairs `(x, y)` with `x < y` and their entries, in rank order
    pub fn pairs(&self) -> impl Iterator<Item = (StateId, StateId, &Implication)> + '_ {
        let n = self.num_states();
        (0..n)
            .flat_map(move |x| ((x + 1)..n).map(move |y| (x, y)))
            .zip(self.entries.iter())
            .map(|((x, y), entry)| (x, y, entry))
    }

    /// Number of pairs still compatible
    pub fn num_compatible(&self) -> usize {
        self.entries.iter().filter(|e| e.is_compatible()).count()
    }

    /// One scan over every entry; returns whether anything was newly marked
    fn propagate_pass(&mut self) -> bool {
        let mut changed = false;

        for idx in 0..self.entries.len() {
            let doomed = match &self.entries[idx] {
                Implication::Implies(pairs) => pairs
                    .iter()
                    .any(|&(a, b)| a != b && !self.is_compatible(a, b)),
                Implication::Incompatible => false,
            };
            if doomed {
                self.entries[idx] = Implication::Incompatible;
                changed = true;
            }
        }

        changed
    }

    /// Propagate incompatibility to a fixed point
    ///
    /// Returns the number of passes, counting the final pass that marked nothing.
    pub fn propagate(&mut self) -> usize {
        let mut passes = 1;
        while self.propagate_pass() {
            passes += 1;
        }
        passes
    }

    /// Merge plan derived from the current compatibility relation
    ///
    /// `result[s]` is the lowest-ranked state compatible with `s` (possibly
    /// `s` itself). After [`propagate`](Self::propagate) the relation is an
    /// equivalence, so every class maps onto its first member.
    pub fn representatives(&self) -> Vec<StateId> {
        let n = self.num_states();
        let mut reps: Vec<StateId> = Vec::with_capacity(n);
        for y in 0..n {
            let rep = (0..y)
                .find(|&x| self.is_compatible(x, y))
                .map_or(y, |x| reps[x]);
            reps.push(rep);
        }
        reps
    }
}

impl fmt::Display for ImplicationTable {
    /// Staircase layout: one line per state, one cell per lower-ranked state
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..self.num_states() {
            write!(f, "{}:", self.names[y])?;
            for x in 0..y {
                match self.get(x, y) {
                    Implication::Incompatible => write!(f, " [x]")?,
                    Implication::Implies(pairs) => {
                        write!(f, " [")?;
                        let mut first = true;
                        for &(a, b) in pairs.iter().filter(|(a, b)| a != b) {
                            if !first {
                                write!(f, " ")?;
                            }
                            write!(f, "{}-{}", self.names[a], self.names[b])?;
                            first = false;
                        }
                        write!(f, "]")?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
