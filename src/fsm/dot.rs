//! State transition graph rendering

use itertools::Itertools;

use super::{StateId, StateTable};
use crate::dot::ToDot;

impl StateTable {
    /// Edges between distinct `(current, next)` pairs with their `in/out` labels
    ///
    /// Edges are listed in order of discovery (state rank, then input value),
    /// and the labels of parallel transitions are kept in input order.
    pub fn edges(&self) -> Vec<(StateId, StateId, Vec<String>)> {
        let mut edges: Vec<(StateId, StateId, Vec<String>)> = Vec::new();

        for state in 0..self.num_states() {
            for (input, transition) in self.transitions(state).iter().enumerate() {
                let label = format!("{}/{}", self.format_input(input), transition.output());
                match edges
                    .iter_mut()
                    .find(|(from, to, _)| *from == state && *to == transition.next())
                {
                    Some((_, _, labels)) => labels.push(label),
                    None => edges.push((state, transition.next(), vec![label])),
                }
            }
        }

        edges
    }
}

impl ToDot for StateTable {
    fn to_dot(&self) -> String {
        let mut lines = vec![
            "digraph STG {".to_string(),
            "   rankdir=LR;".into(),
            String::new(),
            "   INIT [shape=point];".into(),
        ];

        for name in self.state_names() {
            lines.push(format!("   \"{}\" [label=\"{}\"];", name, name));
        }

        lines.push(String::new());
        lines.push(format!("   INIT -> \"{}\";", self.name(self.reset_state())));

        for (from, to, labels) in self.edges() {
            lines.push(format!(
                "   \"{}\" -> \"{}\" [label=\"{}\"];",
                self.name(from),
                self.name(to),
                labels.iter().join(",")
            ));
        }

        lines.push("}".into());
        let mut dot = lines.join("\n");
        dot.push('\n');
        dot
    }
}
