//! # logic-cad
//!
//! Small logic synthesis tools for coursework-sized designs:
//!
//! - **FSM state minimization**: read a KISS state table, merge equivalent
//!   states with the implication table method, write the reduced table in
//!   KISS format and its state transition graph as Graphviz DOT
//!   ([`fsm`], [`kiss`])
//! - **Two-level minimization**: read a single-output PLA truth table and
//!   compute a minimum sum-of-products cover with the Quine-McCluskey method
//!   and Petrick's method ([`pla`], [`qm`])
//! - **ROBDD construction**: build the reduced ordered binary decision diagram
//!   of a PLA truth table and render it as Graphviz DOT ([`bdd`])
//!
//! Each pipeline is also available as a binary (`fsm-minimize`,
//! `qm-minimize` and `robdd`) with the default `cli` feature.
//!
//! ## FSM Minimization
//!
//! ```
//! use logic_cad::{StateTable, ToDot};
//!
//! let kiss = "\
//! 0 a b 0
//! 1 a a 1
//! 0 b b 0
//! 1 b a 1
//! ";
//! let table = StateTable::from_kiss_str(kiss).unwrap();
//! let reduction = table.minimize().unwrap();
//!
//! assert_eq!(reduction.table.num_states(), 1);
//! assert!(reduction.table.to_dot().starts_with("digraph STG {"));
//! ```
//!
//! ## Truth Table Minimization
//!
//! ```
//! use logic_cad::{qm, PLAReader, PLAWriter, TruthTable};
//!
//! let table = TruthTable::from_pla_string(".i 3\n.o 1\n.p 2\n0-1 1\n1-1 1\n.e\n").unwrap();
//! let result = qm::minimize(&table).unwrap();
//!
//! assert_eq!(result.to_pla_string().unwrap(), ".i 3\n.o 1\n.p 1\n--1 1\n.e\n");
//! ```
//!
//! ## Logging
//!
//! The library emits [`tracing`] events: `debug` for the result of each
//! phase and `trace` for per-pass detail. No subscriber is installed by the
//! library itself.

pub mod bdd;
#[cfg(feature = "cli")]
pub mod cli;
pub mod dot;
pub mod error;
pub mod fsm;
pub mod kiss;
pub mod pla;
pub mod qm;

pub use bdd::{BddConfig, Robdd};
pub use dot::ToDot;
pub use error::CadError;
pub use fsm::{FsmConfig, Reduction, StateTable};
pub use pla::{PLAReader, PLAWriter, TruthTable};
pub use qm::{Minimization, QmConfig};
