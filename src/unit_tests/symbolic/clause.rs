use super::*;
use crate::symbolic::literal::neg;

#[test]
fn rejects_empty() {
    let empty: Vec<i32> = vec![];
    assert!(clause(empty).is_err());
}

#[test]
fn dedupes_literals() {
    let c = clause(vec![1, 1, -2]).unwrap();
    assert_eq!(c.len(), 2);
}

#[test]
fn true_absorbs_everything() {
    let c = clause(vec![Literal::Int(1), Literal::Bool(Bool::True)]).unwrap();
    let r = c.tautologically_reduce();
    assert_eq!(r.len(), 1);
    assert!(r.contains(&Literal::Bool(Bool::True)));
}

#[test]
fn bare_false_is_preserved() {
    let c = clause(vec![Bool::False]).unwrap();
    let r = c.tautologically_reduce();
    assert!(r.contains(&Literal::Bool(Bool::False)));
}

#[test]
fn false_is_dropped_alongside_other_literals() {
    let c = clause(vec![Literal::Int(1), Literal::Bool(Bool::False)]).unwrap();
    let r = c.tautologically_reduce();
    assert_eq!(r.len(), 1);
    assert!(r.contains(&Literal::Int(1)));
}

#[test]
fn complementary_pair_collapses_to_true() {
    let c = clause(vec![1, -1]).unwrap();
    let r = c.tautologically_reduce();
    assert_eq!(r.len(), 1);
    assert!(r.contains(&Literal::Bool(Bool::True)));
}

#[test]
fn already_reduced_clause_is_unchanged() {
    let c = clause(vec![1, 2, -3]).unwrap();
    assert_eq!(c.tautologically_reduce(), c);
}

#[test]
fn neg_round_trips_through_clause_membership() {
    let c = clause(vec![1, 2]).unwrap();
    assert!(c.contains(&Literal::Int(1)));
    assert!(!c.contains(&neg(Literal::Int(1))));
}
