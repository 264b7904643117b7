//! DIMACS-shaped emission of a (already-reduced) CNF.
//!
//! Contract: clauses on lines terminated by `0`, literals as signed nonzero integers, with
//! two sentinel forms: the empty string means "trivially satisfiable", and the lone string
//! `"0"` means "trivially unsatisfiable". DIMACS emission is pure.

use crate::symbolic::cnf::Cnf;
use crate::symbolic::literal::Literal;

/// Emit `formula` (assumed already tautologically reduced) as DIMACS text.
///
/// Returns the empty string for `{{TRUE}}`, `"0"` for `{{FALSE}}`, and otherwise one line
/// per clause.
pub fn to_dimacs(formula: &Cnf) -> String {
    if formula.is_tautologically_true() {
        return String::new();
    }
    if formula.is_tautologically_false() {
        return "0".to_string();
    }
    formula
        .clauses()
        .iter()
        .map(|c| {
            let mut line: Vec<String> = c
                .literals()
                .iter()
                .map(|l| match l {
                    Literal::Int(n) => n.to_string(),
                    Literal::Bool(_) => {
                        unreachable!("a reduced non-constant clause carries no Bool literals")
                    }
                })
                .collect();
            line.push("0".to_string());
            line.join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../unit_tests/oracle/dimacs.rs"]
mod tests;
