use super::*;
use crate::symbolic::cnf::cnf;

#[test]
fn agrees_with_brute_force_on_a_satisfiable_formula() {
    let f = cnf(vec![vec![1, 2], vec![-1, 3]])
        .unwrap()
        .tautologically_reduce();
    assert_eq!(solve(&f), crate::oracle::brute_force::brute_force_sat(&f));
}

#[test]
fn agrees_with_brute_force_on_an_unsatisfiable_formula() {
    let f = cnf(vec![vec![1], vec![-1]])
        .unwrap()
        .tautologically_reduce();
    assert!(!solve(&f));
    assert!(!crate::oracle::brute_force::brute_force_sat(&f));
}
