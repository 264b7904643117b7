use super::*;
use crate::symbolic::clause::clause;

#[test]
fn rejects_empty() {
    let empty: Vec<Vec<i32>> = vec![];
    assert!(cnf(empty).is_err());
}

#[test]
fn single_clause_cnf() {
    let f = cnf(vec![vec![1, 2]]).unwrap();
    assert_eq!(f.len(), 1);
}

#[test]
fn a_false_clause_collapses_the_whole_cnf() {
    let f = cnf(vec![vec![1, 2], vec![Literal::Bool(Bool::False)]])
        .unwrap()
        .tautologically_reduce();
    assert!(f.is_tautologically_false());
}

#[test]
fn tautological_clauses_are_dropped() {
    let f = cnf(vec![vec![1, -1], vec![2, 3]])
        .unwrap()
        .tautologically_reduce();
    assert_eq!(f.len(), 1);
    assert!(f.clauses().contains(&clause(vec![2, 3]).unwrap()));
}

#[test]
fn all_tautological_clauses_collapse_to_true() {
    let f = cnf(vec![vec![1, -1], vec![2, -2]])
        .unwrap()
        .tautologically_reduce();
    assert!(f.is_tautologically_true());
}

#[test]
fn reduction_is_idempotent() {
    let f = cnf(vec![vec![1, 2], vec![3]]).unwrap();
    let once = f.tautologically_reduce();
    let twice = once.tautologically_reduce();
    assert_eq!(once, twice);
}

#[test]
fn lits_is_the_union_of_clause_literals() {
    let f = cnf(vec![vec![1, 2], vec![2, 3]]).unwrap();
    assert_eq!(f.lits().len(), 3);
}

#[test]
fn reduces_to_constant_flag() {
    let constant = cnf(vec![vec![1, -1]]).unwrap();
    let not_constant = cnf(vec![vec![1, 2]]).unwrap();
    assert!(constant.reduces_to_constant());
    assert!(!not_constant.reduces_to_constant());
}
