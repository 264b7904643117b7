//! Clauses: non-empty sets of literals, read disjunctively.

use crate::error::{CoreError, Result};
use crate::symbolic::literal::{lit, Bool, IntoLiteral, Literal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A non-empty unordered set of [`Literal`]s (read disjunctively).
///
/// Backed by a `BTreeSet` so that equality, hashing, and iteration order are all
/// insertion-order-independent and canonical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    /// Construct a clause from a non-empty collection of literal-likes.
    ///
    /// Idempotent: `clause(clause(xs).literals()) == clause(xs)`.
    pub fn new<T: IntoLiteral, I: IntoIterator<Item = T>>(xs: I) -> Result<Self> {
        let mut set = BTreeSet::new();
        for x in xs {
            set.insert(lit(x)?);
        }
        if set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "clause" });
        }
        Ok(Self(set))
    }

    /// Construct directly from an already-built, non-empty literal set.
    pub fn from_literals(set: BTreeSet<Literal>) -> Result<Self> {
        if set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "clause" });
        }
        Ok(Self(set))
    }

    /// The literals of this clause.
    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.0
    }

    /// Number of literals.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A clause is never empty by construction, but `is_empty` is offered for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Does this clause contain the given literal?
    pub fn contains(&self, literal: &Literal) -> bool {
        self.0.contains(literal)
    }

    fn singleton(b: Bool) -> Self {
        let mut set = BTreeSet::new();
        set.insert(Literal::Bool(b));
        Self(set)
    }

    /// Tautologically reduce this clause.
    ///
    /// Fixed rule order:
    /// 1. If `Bool(TRUE)` is present, collapse to `{TRUE}`.
    /// 2. If the clause is exactly `{Bool(FALSE)}`, return it unchanged.
    /// 3. Drop `Bool(FALSE)` members.
    /// 4. If a literal and its negation are both present, collapse to `{TRUE}`.
    /// 5. Otherwise return the (possibly FALSE-pruned) clause.
    pub fn tautologically_reduce(&self) -> Self {
        if self.0.contains(&Literal::Bool(Bool::True)) {
            return Self::singleton(Bool::True);
        }
        if self.0.len() == 1 && self.0.contains(&Literal::Bool(Bool::False)) {
            return Self::singleton(Bool::False);
        }
        let without_false: BTreeSet<Literal> = self
            .0
            .iter()
            .copied()
            .filter(|l| *l != Literal::Bool(Bool::False))
            .collect();
        let without_false = if without_false.is_empty() {
            // Every member was Bool(FALSE); rule 2 already handled the {FALSE} singleton,
            // so this can only happen for a malformed multi-FALSE clause, which cannot
            // occur since Clause stores a set. Kept for totality.
            let mut set = BTreeSet::new();
            set.insert(Literal::Bool(Bool::False));
            set
        } else {
            without_false
        };
        let has_complementary_pair = without_false.iter().any(|l| {
            if let Literal::Int(_) = l {
                without_false.contains(&crate::symbolic::literal::neg(*l))
            } else {
                false
            }
        });
        if has_complementary_pair {
            return Self::singleton(Bool::True);
        }
        Self(without_false)
    }
}

/// Construct a [`Clause`] from a non-empty collection of literal-likes.
pub fn clause<T: IntoLiteral, I: IntoIterator<Item = T>>(xs: I) -> Result<Clause> {
    Clause::new(xs)
}

#[cfg(test)]
#[path = "../unit_tests/symbolic/clause.rs"]
mod tests;
