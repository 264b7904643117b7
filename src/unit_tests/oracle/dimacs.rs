use super::*;
use crate::symbolic::cnf::cnf;

#[test]
fn true_constant_emits_empty_string() {
    let f = cnf(vec![vec![1, -1]]).unwrap().tautologically_reduce();
    assert_eq!(to_dimacs(&f), "");
}

#[test]
fn false_constant_emits_lone_zero() {
    let f = cnf(vec![vec![1], vec![-1]])
        .unwrap()
        .tautologically_reduce();
    let assigned = crate::symbolic::assignment::assign(
        &f,
        vec![(
            crate::symbolic::variable::variable(1).unwrap(),
            crate::symbolic::literal::Bool::True,
        )],
    );
    assert_eq!(to_dimacs(&assigned), "0");
}

#[test]
fn real_formula_emits_one_line_per_clause_terminated_by_zero() {
    let f = cnf(vec![vec![1, 2], vec![-1, 3]]).unwrap();
    let text = to_dimacs(&f);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(line.trim_end().ends_with('0'));
    }
}
