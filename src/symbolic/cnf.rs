//! CNFs: non-empty sets of clauses, read conjunctively.

use crate::error::{CoreError, Result};
use crate::symbolic::clause::{clause, Clause};
use crate::symbolic::literal::{Bool, Literal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A non-empty unordered set of [`Clause`]s (read conjunctively).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cnf(BTreeSet<Clause>);

impl Cnf {
    /// Construct a CNF from a non-empty collection of clause-likes.
    pub fn new<T, I, J>(xss: I) -> Result<Self>
    where
        T: crate::symbolic::literal::IntoLiteral,
        J: IntoIterator<Item = T>,
        I: IntoIterator<Item = J>,
    {
        let mut set = BTreeSet::new();
        let mut any = false;
        for xs in xss {
            any = true;
            set.insert(clause(xs)?);
        }
        if !any || set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "cnf" });
        }
        Ok(Self(set))
    }

    /// Construct directly from an already-built, non-empty clause set.
    pub fn from_clauses(set: BTreeSet<Clause>) -> Result<Self> {
        if set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "cnf" });
        }
        Ok(Self(set))
    }

    /// A CNF made of exactly one clause.
    pub fn from_clause(c: Clause) -> Self {
        let mut set = BTreeSet::new();
        set.insert(c);
        Self(set)
    }

    /// The clauses of this CNF.
    pub fn clauses(&self) -> &BTreeSet<Clause> {
        &self.0
    }

    /// `lits(cnf)`: the union of all literals appearing in any clause.
    pub fn lits(&self) -> BTreeSet<Literal> {
        self.0.iter().flat_map(|c| c.literals().iter().copied()).collect()
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn singleton_clause(b: Bool) -> Clause {
        clause(vec![Literal::Bool(b)]).expect("singleton constant clause is never empty")
    }

    fn is_true_cnf(&self) -> bool {
        self.0.len() == 1 && self.0.iter().next().unwrap().literals().len() == 1
            && self
                .0
                .iter()
                .next()
                .unwrap()
                .literals()
                .contains(&Literal::Bool(Bool::True))
    }

    fn is_false_cnf(&self) -> bool {
        self.0.len() == 1 && self.0.iter().next().unwrap().literals().len() == 1
            && self
                .0
                .iter()
                .next()
                .unwrap()
                .literals()
                .contains(&Literal::Bool(Bool::False))
    }

    /// Tautologically reduce this CNF to a fixed point.
    ///
    /// Steps, repeated until the clause set stops changing:
    /// 1. Reduce every clause individually.
    /// 2. If any clause reduced to `{FALSE}`, the whole CNF collapses to `{{FALSE}}`.
    /// 3. Drop every clause that reduced to `{TRUE}`.
    /// 4. If dropping tautological clauses leaves nothing, the CNF collapses to `{{TRUE}}`.
    /// 5. Otherwise keep the surviving (deduplicated) clause set and repeat from 1.
    pub fn tautologically_reduce(&self) -> Self {
        let mut current = self.0.clone();
        loop {
            let reduced: BTreeSet<Clause> = current.iter().map(Clause::tautologically_reduce).collect();

            let false_clause = Self::singleton_clause(Bool::False);
            if reduced.contains(&false_clause) {
                return Self(std::iter::once(false_clause).collect());
            }

            let true_clause = Self::singleton_clause(Bool::True);
            let survivors: BTreeSet<Clause> =
                reduced.into_iter().filter(|c| *c != true_clause).collect();

            if survivors.is_empty() {
                return Self(std::iter::once(true_clause).collect());
            }

            if survivors == current {
                return Self(survivors);
            }
            current = survivors;
        }
    }

    /// Is this CNF (after reduction) the constant `TRUE`?
    pub fn is_tautologically_true(&self) -> bool {
        self.tautologically_reduce().is_true_cnf()
    }

    /// Is this CNF (after reduction) the constant `FALSE`?
    pub fn is_tautologically_false(&self) -> bool {
        self.tautologically_reduce().is_false_cnf()
    }

    /// Is this CNF, once reduced, a bare Boolean constant rather than a real formula?
    pub fn reduces_to_constant(&self) -> bool {
        let r = self.tautologically_reduce();
        r.is_true_cnf() || r.is_false_cnf()
    }
}

/// Construct a [`Cnf`] from a non-empty collection of clause-likes.
pub fn cnf<T, I, J>(xss: I) -> Result<Cnf>
where
    T: crate::symbolic::literal::IntoLiteral,
    J: IntoIterator<Item = T>,
    I: IntoIterator<Item = J>,
{
    Cnf::new(xss)
}

#[cfg(test)]
#[path = "../unit_tests/symbolic/cnf.rs"]
mod tests;
