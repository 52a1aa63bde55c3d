//! Tests for the bdd module

use super::*;
use crate::pla::PLAReader;

fn table(pla: &str) -> TruthTable {
    TruthTable::from_pla_string(pla).unwrap()
}

const AND: &str = ".i 2\n.o 1\n.ilb a b\n.p 1\n11 1\n.e\n";

#[test]
fn test_and_has_two_nodes() {
    let bdd = Robdd::from_table(&table(AND)).unwrap();
    assert_eq!(bdd.root(), 1);
    assert_eq!(bdd.true_node(), 4);

    let ids: Vec<NodeId> = bdd.nodes().keys().copied().collect();
    assert_eq!(ids, vec![1, 3]);

    let root = bdd.nodes()[&1];
    assert_eq!((root.level(), root.low(), root.high()), (0, FALSE_NODE, 3));
    let b = bdd.nodes()[&3];
    assert_eq!((b.level(), b.low(), b.high()), (1, FALSE_NODE, 4));
}

#[test]
fn test_tautology_reduces_to_terminal() {
    let bdd = Robdd::from_table(&table(".i 2\n.o 1\n.p 1\n-- 1\n.e\n")).unwrap();
    assert_eq!(bdd.node_count(), 0);
    assert_eq!(bdd.root(), 4);
    assert!(bdd.evaluate(0));
}

#[test]
fn test_empty_on_set_is_false() {
    let bdd = Robdd::from_table(&table(".i 3\n.o 1\n.p 1\n1-1 0\n.e\n")).unwrap();
    assert_eq!(bdd.node_count(), 0);
    assert_eq!(bdd.root(), FALSE_NODE);
}

#[test]
fn test_dont_care_rows_ignored() {
    let bdd = Robdd::from_table(&table(".i 2\n.o 1\n.p 2\n11 1\n0- -\n.e\n")).unwrap();
    assert_eq!(bdd.node_count(), 2);
    assert!(!bdd.evaluate(0b00));
}

#[test]
fn test_isomorphic_nodes_are_shared() {
    // f = b xor c, independent of a
    let pla = ".i 3\n.o 1\n.ilb a b c\n.p 2\n-01 1\n-10 1\n.e\n";
    let bdd = Robdd::from_table(&table(pla)).unwrap();

    // a is redundant, one b node and two c nodes remain
    assert_eq!(bdd.root(), 2);
    let levels: Vec<usize> = bdd.nodes().values().map(|n| n.level()).collect();
    assert_eq!(levels, vec![1, 2, 2]);
    for m in 0..8 {
        let expected = ((m >> 1) ^ m) & 1 == 1;
        assert_eq!(bdd.evaluate(m), expected, "minterm {}", m);
    }
}

#[test]
fn test_evaluate_matches_table() {
    let pla = ".i 3\n.o 1\n.p 3\n1-0 1\n011 1\n000 1\n.e\n";
    let t = table(pla);
    let bdd = Robdd::from_table(&t).unwrap();
    let on = [0, 3, 4, 6];
    for m in 0..8 {
        assert_eq!(bdd.evaluate(m), on.contains(&m), "minterm {}", m);
    }
}

#[test]
fn test_default_labels() {
    let bdd = Robdd::from_table(&table(".i 1\n.o 1\n.p 1\n1 1\n.e\n")).unwrap();
    assert_eq!(bdd.labels()[0].as_ref(), "x0");
    assert_eq!(bdd.node_count(), 1);
}

#[test]
fn test_zero_inputs() {
    let mut t = TruthTable::new(0);
    t.add_row(&[], RowKind::On);
    let bdd = Robdd::from_table(&t).unwrap();
    assert_eq!(bdd.root(), bdd.true_node());
    assert!(bdd.evaluate(0));
}

#[test]
fn test_too_many_inputs() {
    let config = BddConfig { max_inputs: 2 };
    let result = Robdd::from_table_with_config(&TruthTable::new(3), &config);
    assert!(matches!(
        result,
        Err(CadError::TooManyInputs { inputs: 3, max: 2 })
    ));
}

#[test]
fn test_to_dot() {
    let bdd = Robdd::from_table(&table(AND)).unwrap();
    let expected = "\
digraph G {
{rank=same 1}
{rank=same 3}

0 [label=0, shape=box]
1 [label=\"a\"]
3 [label=\"b\"]
4 [label=1, shape=box]

1 -> 0 [label=\"0\", style=dotted]
1 -> 3 [label=\"1\", style=solid]
3 -> 0 [label=\"0\", style=dotted]
3 -> 4 [label=\"1\", style=solid]
}
";
    assert_eq!(bdd.to_dot(), expected);
}
