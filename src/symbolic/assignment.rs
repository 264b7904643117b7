//! Partial truth assignments and their action on literals, clauses, and CNFs.

use crate::symbolic::clause::{clause, Clause};
use crate::symbolic::cnf::{cnf, Cnf};
use crate::symbolic::literal::{neg, Bool, Literal};
use crate::symbolic::variable::Variable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A finite partial map from [`Variable`] to [`Bool`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment(BTreeMap<Variable, Bool>);

impl Assignment {
    /// The empty assignment.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build an assignment from `(Variable, Bool)` pairs.
    pub fn from_pairs<I: IntoIterator<Item = (Variable, Bool)>>(pairs: I) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Extend this assignment with one more binding, returning the updated assignment.
    pub fn with(mut self, var: Variable, value: Bool) -> Self {
        self.0.insert(var, value);
        self
    }

    /// Look up the value bound to a variable, if any.
    pub fn get(&self, var: Variable) -> Option<Bool> {
        self.0.get(&var).copied()
    }

    /// The variables this assignment binds.
    pub fn domain(&self) -> impl Iterator<Item = Variable> + '_ {
        self.0.keys().copied()
    }
}

/// Apply an assignment to a single literal.
///
/// `Bool` literals pass through unchanged. An `Int(n)` literal whose underlying variable
/// is unbound by `assignment` also passes through unchanged; otherwise it collapses to the
/// bound value, negated if `n` is negative (tag-based, not integer-equality-based: the sign
/// of `n` determines whether the bound value or its negation is produced).
pub fn assign_in_lit(assignment: &Assignment, literal: Literal) -> Literal {
    match literal {
        Literal::Bool(_) => literal,
        Literal::Int(n) => match Variable::new(n.unsigned_abs()) {
            Ok(var) => match assignment.get(var) {
                Some(value) => {
                    let lit = Literal::Bool(value);
                    if n < 0 {
                        neg(lit)
                    } else {
                        lit
                    }
                }
                None => literal,
            },
            Err(_) => literal,
        },
    }
}

/// Apply an assignment to every literal of a clause, then tautologically reduce.
pub fn assign_in_clause(assignment: &Assignment, c: &Clause) -> Clause {
    let mapped: Vec<Literal> = c
        .literals()
        .iter()
        .map(|l| assign_in_lit(assignment, *l))
        .collect();
    clause(mapped)
        .expect("assigning preserves non-emptiness")
        .tautologically_reduce()
}

/// Apply an assignment to every clause of a CNF, then tautologically reduce the whole CNF.
pub fn assign_in_cnf(assignment: &Assignment, formula: &Cnf) -> Cnf {
    let mapped: Vec<Clause> = formula
        .clauses()
        .iter()
        .map(|c| assign_in_clause(assignment, c))
        .collect();
    cnf(mapped
        .into_iter()
        .map(|c| c.literals().iter().copied().collect::<Vec<_>>()))
    .expect("assigning preserves non-emptiness")
    .tautologically_reduce()
}

/// Apply an assignment built from `(Variable, Bool)` pairs to a CNF.
pub fn assign<I: IntoIterator<Item = (Variable, Bool)>>(formula: &Cnf, mapping: I) -> Cnf {
    let assignment = Assignment::from_pairs(mapping);
    assign_in_cnf(&assignment, formula)
}

#[cfg(test)]
#[path = "../unit_tests/symbolic/assignment.rs"]
mod tests;
