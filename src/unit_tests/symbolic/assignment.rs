use super::*;
use crate::symbolic::variable::variable;

#[test]
fn unbound_literal_passes_through() {
    let a = Assignment::new();
    assert_eq!(assign_in_lit(&a, Literal::Int(3)), Literal::Int(3));
}

#[test]
fn bool_literal_is_immune_to_assignment() {
    let a = Assignment::new().with(variable(1).unwrap(), Bool::True);
    assert_eq!(
        assign_in_lit(&a, Literal::Bool(Bool::False)),
        Literal::Bool(Bool::False)
    );
}

#[test]
fn positive_literal_takes_the_bound_value() {
    let a = Assignment::new().with(variable(1).unwrap(), Bool::True);
    assert_eq!(assign_in_lit(&a, Literal::Int(1)), Literal::Bool(Bool::True));
}

#[test]
fn negative_literal_takes_the_negated_bound_value() {
    let a = Assignment::new().with(variable(1).unwrap(), Bool::True);
    assert_eq!(
        assign_in_lit(&a, Literal::Int(-1)),
        Literal::Bool(Bool::False)
    );
}

#[test]
fn assign_in_clause_reduces_to_true_when_any_bound_literal_holds() {
    let c = crate::symbolic::clause::clause(vec![1, 2]).unwrap();
    let a = Assignment::new().with(variable(1).unwrap(), Bool::True);
    let r = assign_in_clause(&a, &c);
    assert!(r.contains(&Literal::Bool(Bool::True)));
}

#[test]
fn assign_in_cnf_satisfies_a_fully_bound_formula() {
    let f = crate::symbolic::cnf::cnf(vec![vec![1, 2], vec![-1, 3]]).unwrap();
    let assigned = assign(
        &f,
        vec![
            (variable(1).unwrap(), Bool::True),
            (variable(3).unwrap(), Bool::True),
        ],
    );
    assert!(assigned.is_tautologically_true());
}

#[test]
fn assign_in_cnf_falsifies_when_every_clause_fails() {
    let f = crate::symbolic::cnf::cnf(vec![vec![1], vec![-1]]).unwrap();
    let assigned = assign(&f, vec![(variable(1).unwrap(), Bool::True)]);
    assert!(assigned.is_tautologically_false());
}

#[test]
fn partial_assignment_leaves_unbound_variables_symbolic() {
    let f = crate::symbolic::cnf::cnf(vec![vec![1, 2]]).unwrap();
    let assigned = assign(&f, vec![(variable(1).unwrap(), Bool::False)]);
    assert_eq!(assigned.len(), 1);
    assert!(assigned
        .clauses()
        .iter()
        .next()
        .unwrap()
        .contains(&Literal::Int(2)));
}
