//! External Minisat-class DPLL oracle, backed by the `varisat` CDCL solver crate.

use crate::symbolic::cnf::Cnf;
use crate::symbolic::literal::Literal;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver};

/// Translate a (non-constant) reduced CNF into a `varisat` [`CnfFormula`].
fn to_varisat_formula(formula: &Cnf) -> CnfFormula {
    let mut out = CnfFormula::new();
    for c in formula.clauses() {
        let lits: Vec<Lit> = c
            .literals()
            .iter()
            .map(|l| match l {
                Literal::Int(n) => Lit::from_dimacs(*n as isize),
                Literal::Bool(_) => {
                    unreachable!("a reduced non-constant clause carries no Bool literals")
                }
            })
            .collect();
        out.add_clause(&lits);
    }
    out
}

/// Decide satisfiability of an already-reduced, non-constant CNF via `varisat`.
pub fn solve(formula: &Cnf) -> bool {
    let mut solver = Solver::new();
    solver.add_formula(&to_varisat_formula(formula));
    solver
        .solve()
        .expect("varisat's in-process solve() does not hit I/O errors")
}

#[cfg(test)]
#[path = "../unit_tests/oracle/varisat_backend.rs"]
mod tests;
