//! Property tests for the minimization pipelines

use logic_cad::pla::RowKind;
use logic_cad::qm::{Implicant, Minterm};
use logic_cad::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// A completely specified Mealy machine as KISS text
fn arb_kiss() -> impl Strategy<Value = String> {
    (1usize..6, 1usize..3).prop_flat_map(|(states, width)| {
        let inputs = 1usize << width;
        prop::collection::vec((0..states, 0u8..2), states * inputs).prop_map(move |cells| {
            let mut kiss = String::new();
            for (i, (next, output)) in cells.iter().enumerate() {
                let state = i / inputs;
                let input = i % inputs;
                kiss.push_str(&format!(
                    "{:0width$b} s{} s{} {}\n",
                    input,
                    state,
                    next,
                    output,
                    width = width
                ));
            }
            kiss
        })
    })
}

/// ON and don't-care minterm sets over `n` inputs
fn arb_function() -> impl Strategy<Value = (usize, Vec<u8>)> {
    (1usize..6).prop_flat_map(|n| (Just(n), prop::collection::vec(0u8..3, 1 << n)))
}

fn table_for(n: usize, values: &[u8]) -> TruthTable {
    let mut table = TruthTable::new(n);
    for (m, &value) in values.iter().enumerate() {
        let kind = match value {
            0 => RowKind::Off,
            1 => RowKind::On,
            _ => RowKind::DontCare,
        };
        let implicant = Implicant::from_minterm(m as Minterm, n);
        table.add_row(implicant.literals(), kind);
    }
    table
}

proptest! {
    #[test]
    fn prop_reduction_is_idempotent(kiss in arb_kiss()) {
        let table = StateTable::from_kiss_str(&kiss).unwrap();
        let once = table.minimize().unwrap().table;
        let twice = once.minimize().unwrap();
        prop_assert!(twice.merged.is_empty());
        prop_assert_eq!(twice.table, once);
    }

    #[test]
    fn prop_reduction_is_closed(kiss in arb_kiss()) {
        let table = StateTable::from_kiss_str(&kiss).unwrap();
        let reduction = table.minimize().unwrap();
        let reduced = &reduction.table;

        prop_assert_eq!(
            reduced.num_states() + reduction.merged.len(),
            table.num_states()
        );
        for state in 0..reduced.num_states() {
            prop_assert_eq!(reduced.transitions(state).len(), table.num_inputs());
            for transition in reduced.transitions(state) {
                prop_assert!(transition.next() < reduced.num_states());
            }
        }
    }

    #[test]
    fn prop_merged_states_share_outputs(kiss in arb_kiss()) {
        let table = StateTable::from_kiss_str(&kiss).unwrap();
        let reduction = table.minimize().unwrap();

        for (removed, kept) in &reduction.merged {
            let removed = table.state_id(removed).unwrap();
            let kept = table.state_id(kept).unwrap();
            prop_assert!(table.outputs(removed).eq(table.outputs(kept)));
        }
    }

    #[test]
    fn prop_cover_is_exact(function in arb_function()) {
        let (n, values) = function;
        let result = qm::minimize(&table_for(n, &values)).unwrap();

        for (m, &value) in values.iter().enumerate() {
            let covered = result.evaluate(m as Minterm);
            match value {
                0 => prop_assert!(!covered, "OFF minterm {} covered", m),
                1 => prop_assert!(covered, "ON minterm {} not covered", m),
                _ => {}
            }
        }
    }

    #[test]
    fn prop_cover_terms_are_necessary(function in arb_function()) {
        let (n, values) = function;
        let result = qm::minimize(&table_for(n, &values)).unwrap();
        let required: BTreeSet<Minterm> = result.required_minterms().clone();

        for skipped in 0..result.cover().len() {
            let rest_covers_all = required.iter().all(|&m| {
                result
                    .cover()
                    .iter()
                    .enumerate()
                    .any(|(i, implicant)| i != skipped && implicant.matches(m))
            });
            prop_assert!(!rest_covers_all, "term {} is redundant", result.cover()[skipped]);
        }
    }

    #[test]
    fn prop_robdd_matches_cover(function in arb_function()) {
        let (n, values) = function;
        let table = table_for(n, &values);
        let bdd = Robdd::from_table(&table).unwrap();

        for (m, &value) in values.iter().enumerate() {
            prop_assert_eq!(bdd.evaluate(m as Minterm), value == 1);
        }
        prop_assert!(bdd.node_count() < 1 << n);
    }
}
