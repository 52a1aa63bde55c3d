//! Tests for the qm module

use super::*;
use crate::pla::{PLAReader, RowKind};

fn table_from_minterms(num_inputs: usize, on: &[Minterm], dc: &[Minterm]) -> TruthTable {
    let mut table = TruthTable::new(num_inputs);
    for (minterms, kind) in [(on, RowKind::On), (dc, RowKind::DontCare)] {
        for &m in minterms {
            let implicant = Implicant::from_minterm(m, num_inputs);
            table.add_row(implicant.literals(), kind);
        }
    }
    table
}

fn cover_strings(result: &Minimization) -> Vec<String> {
    result.cover().iter().map(|i| i.to_string()).collect()
}

const TWO_INPUT: &str = "\
.i 2
.o 1
.ilb a b
.ob f
.p 3
00 1
01 1
11 1
.e
";

#[test]
fn test_two_input_cover() {
    let table = TruthTable::from_pla_string(TWO_INPUT).unwrap();
    let result = minimize(&table).unwrap();

    assert_eq!(cover_strings(&result), vec!["-1", "0-"]);
    assert_eq!(result.essentials().len(), 2);
    assert!(result.selected().is_empty());
    assert_eq!(result.sum_of_products(), "b + a'");
}

#[test]
fn test_write_minimized_pla() {
    let table = TruthTable::from_pla_string(TWO_INPUT).unwrap();
    let result = minimize(&table).unwrap();
    let expected = "\
.i 2
.o 1
.ilb a b
.ob f
.p 2
-1 1
0- 1
.e
";
    assert_eq!(result.to_pla_string().unwrap(), expected);
}

#[test]
fn test_cyclic_function_uses_petrick() {
    let table = table_from_minterms(3, &[0, 1, 2, 5, 6, 7], &[]);
    let result = minimize(&table).unwrap();

    assert!(result.essentials().is_empty());
    assert_eq!(result.primes().len(), 6);
    assert_eq!(cover_strings(&result), vec!["-01", "0-0", "11-"]);
}

#[test]
fn test_dont_cares_enlarge_implicants() {
    let table = table_from_minterms(3, &[1, 3], &[5, 7]);
    let result = minimize(&table).unwrap();

    assert_eq!(cover_strings(&result), vec!["--1"]);
    assert_eq!(result.required_minterms(), &BTreeSet::from([1, 3]));
    assert_eq!(result.dont_care_minterms(), &BTreeSet::from([5, 7]));
}

#[test]
fn test_dont_care_not_required() {
    let table = table_from_minterms(3, &[0], &[7]);
    let result = minimize(&table).unwrap();
    assert_eq!(cover_strings(&result), vec!["000"]);
    assert!(!result.evaluate(7));
}

#[test]
fn test_on_overrides_dont_care() {
    let table = table_from_minterms(2, &[3], &[3]);
    let result = minimize(&table).unwrap();
    assert_eq!(result.required_minterms(), &BTreeSet::from([3]));
    assert!(result.dont_care_minterms().is_empty());
    assert_eq!(cover_strings(&result), vec!["11"]);
}

#[test]
fn test_empty_on_set() {
    let table = table_from_minterms(2, &[], &[1]);
    let result = minimize(&table).unwrap();
    assert!(result.cover().is_empty());
    assert_eq!(result.sum_of_products(), "0");
    assert!(result.to_pla_string().unwrap().contains(".p 0\n.e\n"));
}

#[test]
fn test_tautology() {
    let table = table_from_minterms(2, &[0, 1, 2, 3], &[]);
    let result = minimize(&table).unwrap();
    assert_eq!(cover_strings(&result), vec!["--"]);
    assert_eq!(result.sum_of_products(), "1");
}

#[test]
fn test_off_rows_are_ignored() {
    let mut table = TruthTable::new(2);
    table.add_row(&[Some(true), None], RowKind::On);
    table.add_row(&[Some(false), Some(false)], RowKind::Off);
    let result = minimize(&table).unwrap();
    assert_eq!(cover_strings(&result), vec!["1-"]);
}

#[test]
fn test_cover_matches_function() {
    let on = [1, 4, 6, 7, 8, 9, 10, 11, 15];
    let dc = [0, 5];
    let table = table_from_minterms(4, &on, &dc);
    let result = minimize(&table).unwrap();

    for m in 0..16 {
        if on.contains(&m) {
            assert!(result.evaluate(m), "minterm {} must be covered", m);
        } else if !dc.contains(&m) {
            assert!(!result.evaluate(m), "minterm {} must not be covered", m);
        }
    }
    assert!(result.cover().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_too_many_inputs() {
    let table = TruthTable::new(5);
    let config = QmConfig { max_inputs: 4 };
    assert!(matches!(
        minimize_with_config(&table, &config),
        Err(CadError::TooManyInputs { inputs: 5, max: 4 })
    ));
}

#[test]
fn test_default_labels_in_expression() {
    let table = table_from_minterms(2, &[2, 3], &[]);
    let result = minimize(&table).unwrap();
    assert_eq!(result.sum_of_products(), "x0");
}
