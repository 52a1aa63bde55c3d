//! Reduced ordered binary decision diagrams built from truth tables
//!
//! The diagram is obtained the textbook way: the complete decision tree over
//! all inputs (in table order) is evaluated against the ON-set, then reduced
//! bottom-up one level at a time by
//!
//! - removing **redundant** nodes, whose two edges lead to the same child, and
//! - merging **isomorphic** nodes, which have the same `(low, high)` children
//!   as an earlier node on the same level.
//!
//! Nodes keep their heap position in the complete tree as identifier: the
//! root is `1`, the children of node `i` are `2i` and `2i + 1`. The FALSE
//! terminal is `0` and the TRUE terminal is `2^n`.
//!
//! Building the complete tree is exponential in the number of inputs, which is
//! bounded by [`BddConfig::max_inputs`].
//!
//! # Examples
//!
//! ```
//! use logic_cad::{PLAReader, Robdd, TruthTable};
//!
//! let table = TruthTable::from_pla_string(".i 2\n.o 1\n.ilb a b\n.p 1\n11 1\n.e\n").unwrap();
//! let bdd = Robdd::from_table(&table).unwrap();
//!
//! assert_eq!(bdd.node_count(), 2);
//! assert!(bdd.evaluate(0b11));
//! assert!(!bdd.evaluate(0b10));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::dot::ToDot;
use crate::error::CadError;
use crate::pla::{RowKind, TruthTable};
use crate::qm::{Implicant, Minterm};

/// Node identifier: position in the complete decision tree
pub type NodeId = usize;

/// Terminal node for FALSE
pub const FALSE_NODE: NodeId = 0;

/// Configuration for ROBDD construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BddConfig {
    /// Largest number of inputs accepted
    pub max_inputs: usize,
}

impl Default for BddConfig {
    fn default() -> Self {
        BddConfig { max_inputs: 20 }
    }
}

impl BddConfig {
    /// Configuration with the default input limit
    pub fn new() -> Self {
        Self::default()
    }
}

/// Decision node testing the input at `level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BddNode {
    level: usize,
    low: NodeId,
    high: NodeId,
}

impl BddNode {
    /// Index of the tested input
    pub fn level(&self) -> usize {
        self.level
    }

    /// Child taken when the input is 0
    pub fn low(&self) -> NodeId {
        self.low
    }

    /// Child taken when the input is 1
    pub fn high(&self) -> NodeId {
        self.high
    }
}

/// A reduced ordered binary decision diagram of a single-output function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robdd {
    labels: Vec<Arc<str>>,
    nodes: BTreeMap<NodeId, BddNode>,
    root: NodeId,
}

impl Robdd {
    /// Build the diagram of a truth table's ON-set with the default configuration
    pub fn from_table(table: &TruthTable) -> Result<Self, CadError> {
        Self::from_table_with_config(table, &BddConfig::default())
    }

    /// Build the diagram of a truth table's ON-set
    ///
    /// Don't-care and OFF rows do not contribute.
    pub fn from_table_with_config(table: &TruthTable, config: &BddConfig) -> Result<Self, CadError> {
        let n = table.num_inputs();
        if n > config.max_inputs || n >= Minterm::BITS as usize {
            return Err(CadError::TooManyInputs {
                inputs: n,
                max: config.max_inputs,
            });
        }

        let mut on_set = vec![false; 1 << n];
        for row in table.rows().iter().filter(|r| r.kind() == RowKind::On) {
            for m in Implicant::new(row.inputs().to_vec()).minterms() {
                on_set[m as usize] = true;
            }
        }

        let true_node: NodeId = 1 << n;
        let labels = table.preamble().input_names();

        if n == 0 {
            let root = if on_set[0] { true_node } else { FALSE_NODE };
            return Ok(Robdd {
                labels,
                nodes: BTreeMap::new(),
                root,
            });
        }

        let terminal = |minterm: usize| if on_set[minterm] { true_node } else { FALSE_NODE };

        let mut redirect: HashMap<NodeId, NodeId> = HashMap::new();
        let mut nodes: BTreeMap<NodeId, BddNode> = BTreeMap::new();

        for level in (0..n).rev() {
            let first = 1usize << level;
            let mut seen: HashMap<(NodeId, NodeId), NodeId> = HashMap::new();

            for id in first..first << 1 {
                let (low, high) = if level == n - 1 {
                    let path = (id - first) << 1;
                    (terminal(path), terminal(path | 1))
                } else {
                    let resolve = |child: NodeId| redirect.get(&child).copied().unwrap_or(child);
                    (resolve(id << 1), resolve(id << 1 | 1))
                };

                if low == high {
                    trace!(node = id, child = low, "redundant");
                    redirect.insert(id, low);
                } else if let Some(&existing) = seen.get(&(low, high)) {
                    trace!(node = id, kept = existing, "isomorphic");
                    redirect.insert(id, existing);
                } else {
                    seen.insert((low, high), id);
                    nodes.insert(id, BddNode { level, low, high });
                }
            }

            trace!(
                level,
                kept = seen.len(),
                "level {} reduced: {}",
                labels[level],
                seen.values().sorted().join(" ")
            );
        }

        let root = redirect.get(&1).copied().unwrap_or(1);
        debug!(nodes = nodes.len(), root, "ROBDD built");

        Ok(Robdd {
            labels,
            nodes,
            root,
        })
    }

    /// Number of inputs
    pub fn num_vars(&self) -> usize {
        self.labels.len()
    }

    /// Input names in variable order
    pub fn labels(&self) -> &[Arc<str>] {
        &self.labels
    }

    /// Identifier of the TRUE terminal
    pub fn true_node(&self) -> NodeId {
        1 << self.labels.len()
    }

    /// Id of the root node, a terminal id for constant functions
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Decision nodes by identifier
    pub fn nodes(&self) -> &BTreeMap<NodeId, BddNode> {
        &self.nodes
    }

    /// Number of decision nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow the diagram for a complete assignment, first input as the most significant bit
    pub fn evaluate(&self, minterm: Minterm) -> bool {
        let n = self.labels.len();
        let mut current = self.root;
        while let Some(node) = self.nodes.get(&current) {
            let bit = minterm >> (n - 1 - node.level) & 1 == 1;
            current = if bit { node.high } else { node.low };
        }
        current == self.true_node()
    }
}

impl ToDot for Robdd {
    fn to_dot(&self) -> String {
        let mut lines = vec!["digraph G {".to_string()];

        let by_level = self.nodes.iter().into_group_map_by(|(_, node)| node.level);
        for level in 0..self.num_vars() {
            if let Some(ids) = by_level.get(&level) {
                lines.push(format!(
                    "{{rank=same {}}}",
                    ids.iter().map(|(id, _)| id).join(" ")
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!("{} [label=0, shape=box]", FALSE_NODE));
        for (id, node) in &self.nodes {
            lines.push(format!("{} [label=\"{}\"]", id, self.labels[node.level]));
        }
        lines.push(format!("{} [label=1, shape=box]", self.true_node()));
        lines.push(String::new());

        for (id, node) in &self.nodes {
            lines.push(format!("{} -> {} [label=\"0\", style=dotted]", id, node.low));
            lines.push(format!("{} -> {} [label=\"1\", style=solid]", id, node.high));
        }

        lines.push("}".into());
        let mut dot = lines.join("\n");
        dot.push('\n');
        dot
    }
}

#[cfg(test)]
mod tests;
