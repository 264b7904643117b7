//! Brute-force SAT oracle: enumerate every assignment and check against tautological
//! reduction. A fallback for small formulas and for testing the external oracle path
//! against ground truth.

use crate::symbolic::assignment::{assign, Assignment};
use crate::symbolic::cnf::Cnf;
use crate::symbolic::literal::Bool;
use crate::symbolic::variable::Variable;
use bitvec::prelude::*;
use std::collections::BTreeSet;

/// Lazily yields every total [`Assignment`] over the variables appearing in `formula`.
pub struct AssignmentIterator {
    variables: Vec<Variable>,
    next_mask: Option<u64>,
}

impl AssignmentIterator {
    /// Enumerate assignments over `formula`'s variables. Supports up to 64 variables.
    pub fn new(formula: &Cnf) -> Self {
        let variables: BTreeSet<Variable> = formula
            .lits()
            .iter()
            .filter_map(|l| l.variable_index())
            .map(|n| Variable::new(n).expect("variable indices are positive"))
            .collect();
        let variables: Vec<Variable> = variables.into_iter().collect();
        assert!(
            variables.len() <= 64,
            "brute-force enumeration does not scale past 64 variables"
        );
        Self {
            variables,
            next_mask: Some(0),
        }
    }
}

impl Iterator for AssignmentIterator {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.next_mask?;
        let n = self.variables.len() as u32;
        // One bit per variable, low bit first, mirroring the teacher's `TruthTable` rows.
        let bits = mask.view_bits::<Lsb0>();
        let assignment = Assignment::from_pairs(self.variables.iter().enumerate().map(|(i, &v)| {
            (v, if bits[i] { Bool::True } else { Bool::False })
        }));

        let total = if n == 0 { 1u64 } else { 1u64 << n };
        let next = mask + 1;
        self.next_mask = if next < total { Some(next) } else { None };
        Some(assignment)
    }
}

/// `generate_assignments(C)`: every total assignment over `C`'s variables.
pub fn generate_assignments(formula: &Cnf) -> AssignmentIterator {
    AssignmentIterator::new(formula)
}

/// Brute-force decision: does any assignment reduce `formula` to `{{TRUE}}`?
pub fn brute_force_sat(formula: &Cnf) -> bool {
    let reduced = formula.tautologically_reduce();
    if reduced.is_tautologically_true() {
        return true;
    }
    if reduced.is_tautologically_false() {
        return false;
    }
    generate_assignments(&reduced).any(|a| {
        let pairs: Vec<_> = a.domain().map(|v| (v, a.get(v).unwrap())).collect();
        assign(&reduced, pairs).is_tautologically_true()
    })
}

#[cfg(test)]
#[path = "../unit_tests/oracle/brute_force.rs"]
mod tests;
