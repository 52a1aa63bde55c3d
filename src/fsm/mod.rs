//! Finite state machine state minimization
//!
//! This module holds the [`StateTable`] model of a completely specified Mealy
//! machine and the implication-table reduction that merges equivalent states.
//!
//! States are ranked by the order in which they first appear as a current
//! state. That rank is the only ordering used by the reduction: when a class
//! of equivalent states is merged, its lowest-ranked member survives and every
//! transition into the class is redirected to it.
//!
//! ```
//! use logic_cad::StateTable;
//!
//! let kiss = "0 a c 0\n1 a b 1\n0 b c 0\n1 b a 1\n0 c a 1\n1 c c 0\n";
//! let table = StateTable::from_kiss_str(kiss).unwrap();
//! let reduction = table.minimize().unwrap();
//! assert_eq!(reduction.table.num_states(), 2);
//! ```

mod dot;
pub mod implication;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::kiss::KissError;
pub use implication::{Implication, ImplicationTable};

/// Index of a state by rank of first appearance
pub type StateId = usize;

/// One outgoing edge of a state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub(crate) next: StateId,
    pub(crate) output: Arc<str>,
}

impl Transition {
    /// Target state
    pub fn next(&self) -> StateId {
        self.next
    }

    /// Output symbol emitted on this edge
    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Configuration for state minimization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FsmConfig {
    /// Reset state to use instead of the one declared by `.r` (or the first state)
    pub reset_state: Option<Arc<str>>,
}

impl FsmConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// A completely specified state transition table
///
/// Every state has exactly one transition per input symbol; the reader
/// rejects tables where this does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTable {
    names: Vec<Arc<str>>,
    lookup: HashMap<Arc<str>, StateId>,
    transitions: Vec<Vec<Transition>>,
    input_width: usize,
    reset: StateId,
}

impl StateTable {
    pub(crate) fn from_parts(
        names: Vec<Arc<str>>,
        transitions: Vec<Vec<Transition>>,
        input_width: usize,
        reset: StateId,
    ) -> Self {
        let lookup = names
            .iter()
            .enumerate()
            .map(|(id, name)| (Arc::clone(name), id))
            .collect();
        StateTable {
            names,
            lookup,
            transitions,
            input_width,
            reset,
        }
    }

    /// Number of states
    pub fn num_states(&self) -> usize {
        self.names.len()
    }

    /// Size of the input alphabet (transitions per state)
    pub fn num_inputs(&self) -> usize {
        self.transitions.first().map_or(0, Vec::len)
    }

    /// Total number of transitions (rows of the KISS table)
    pub fn num_transitions(&self) -> usize {
        self.transitions.iter().map(Vec::len).sum()
    }

    /// Width in bits of the binary input symbols
    pub fn input_width(&self) -> usize {
        self.input_width
    }

    /// Width of the widest output symbol (at least 1)
    pub fn output_width(&self) -> usize {
        self.transitions
            .iter()
            .flatten()
            .map(|t| t.output.chars().count())
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// State names in rank order
    pub fn state_names(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Name of a state
    ///
    /// # Panics
    ///
    /// Panics if `state` is not a valid id of this table.
    pub fn name(&self, state: StateId) -> &str {
        &self.names[state]
    }

    /// Look up a state by name
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.lookup.get(name).copied()
    }

    /// The reset (initial) state
    pub fn reset_state(&self) -> StateId {
        self.reset
    }

    /// Transitions of a state, indexed by input symbol value
    pub fn transitions(&self, state: StateId) -> &[Transition] {
        &self.transitions[state]
    }

    /// Output sequence of a state over all input symbols
    pub fn outputs(&self, state: StateId) -> impl Iterator<Item = &str> + '_ {
        self.transitions[state].iter().map(Transition::output)
    }

    /// Binary rendering of an input symbol at this table's input width
    pub fn format_input(&self, input: usize) -> String {
        format!("{:0width$b}", input, width = self.input_width.max(1))
    }

    /// Return a copy of this table with a different reset state
    pub fn with_reset(&self, name: &str) -> Result<Self, KissError> {
        let reset = self
            .state_id(name)
            .ok_or_else(|| KissError::UnknownResetState {
                state: Arc::from(name),
            })?;
        Ok(StateTable {
            reset,
            ..self.clone()
        })
    }

    /// Merge all equivalent states using the default configuration
    pub fn minimize(&self) -> Result<Reduction, KissError> {
        self.minimize_with_config(&FsmConfig::default())
    }

    /// Merge all equivalent states
    ///
    /// Builds the implication table, propagates incompatibility to a fixed
    /// point, then rewrites the table so that each equivalence class is
    /// represented by its lowest-ranked state.
    pub fn minimize_with_config(&self, config: &FsmConfig) -> Result<Reduction, KissError> {
        let source = match &config.reset_state {
            Some(name) => self.with_reset(name)?,
            None => self.clone(),
        };

        let mut implications = ImplicationTable::new(&source);
        let passes = implications.propagate();
        trace!("implication table after {} passes:\n{}", passes, implications);

        let representatives = implications.representatives();
        let merged: Vec<(Arc<str>, Arc<str>)> = representatives
            .iter()
            .enumerate()
            .filter(|&(state, &rep)| state != rep)
            .map(|(state, &rep)| (Arc::clone(&source.names[state]), Arc::clone(&source.names[rep])))
            .collect();
        for (removed, kept) in &merged {
            trace!("merging state {} into {}", removed, kept);
        }

        let table = source.merge(&representatives);
        debug!(
            states = source.num_states(),
            remaining = table.num_states(),
            passes,
            "state minimization finished"
        );

        Ok(Reduction {
            table,
            merged,
            passes,
        })
    }

    /// Apply a merge plan: `representatives[s]` is the state `s` is folded into
    fn merge(&self, representatives: &[StateId]) -> StateTable {
        let kept: Vec<StateId> = (0..self.num_states())
            .filter(|&s| representatives[s] == s)
            .collect();

        let mut renumber = vec![0; self.num_states()];
        for (new_id, &old_id) in kept.iter().enumerate() {
            renumber[old_id] = new_id;
        }
        let remap = |s: StateId| renumber[representatives[s]];

        let names = kept.iter().map(|&s| Arc::clone(&self.names[s])).collect();
        let transitions = kept
            .iter()
            .map(|&s| {
                self.transitions[s]
                    .iter()
                    .map(|t| Transition {
                        next: remap(t.next),
                        output: Arc::clone(&t.output),
                    })
                    .collect()
            })
            .collect();

        StateTable::from_parts(names, transitions, self.input_width, remap(self.reset))
    }
}

/// Result of a state minimization
#[derive(Debug, Clone)]
pub struct Reduction {
    /// The reduced table, one state per equivalence class
    pub table: StateTable,
    /// Removed states paired with the state they were merged into
    pub merged: Vec<(Arc<str>, Arc<str>)>,
    /// Number of propagation passes, including the final pass with no change
    pub passes: usize,
}
