use super::*;
use crate::symbolic::cnf::cnf;

#[test]
fn generate_assignments_count_is_2_pow_num_vars() {
    let f = cnf(vec![vec![1, 2]]).unwrap();
    let all: Vec<_> = generate_assignments(&f).collect();
    assert_eq!(all.len(), 4);
}

#[test]
fn satisfiable_formula_is_sat() {
    let f = cnf(vec![vec![1, 2]]).unwrap();
    assert!(brute_force_sat(&f));
}

#[test]
fn unsatisfiable_formula_is_unsat() {
    let f = cnf(vec![vec![1], vec![-1]]).unwrap();
    assert!(!brute_force_sat(&f));
}

#[test]
fn single_loop_scenario_s6_is_sat() {
    let f = cnf(vec![vec![1]]).unwrap();
    assert!(brute_force_sat(&f));
}

#[test]
fn constants_short_circuit_without_enumeration() {
    let tautology = cnf(vec![vec![1, -1]]).unwrap();
    assert!(brute_force_sat(&tautology));
}
