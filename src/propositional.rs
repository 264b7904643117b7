//! Pointwise propositional operations (AND/OR/NOT) on clauses and CNFs, lifted to MHGraphs
//! and CNF-sets by `graph_or`/`graph_and`.

use crate::graph::mhgraph::{graph_union, MhGraph};
use crate::symbolic::clause::Clause;
use crate::symbolic::cnf::Cnf;
use crate::symbolic::literal::neg;
use crate::translation::{cnfs_from_mhgraph, EnumerationOptions};
use std::collections::BTreeSet;

/// Disjunction of two clauses: set union of their literals, tautologically reduced.
pub fn clause_or_clause(a: &Clause, b: &Clause) -> Clause {
    let merged: BTreeSet<_> = a.literals().union(b.literals()).copied().collect();
    Clause::from_literals(merged)
        .expect("the union of two non-empty clauses is non-empty")
        .tautologically_reduce()
}

/// Conjunction of two clauses: the two-clause CNF `{a, b}`, tautologically reduced.
pub fn clause_and_clause(a: &Clause, b: &Clause) -> Cnf {
    Cnf::from_clauses([a.clone(), b.clone()].into_iter().collect())
        .tautologically_reduce()
}

/// Negation of a clause: De Morgan's law turns a disjunction into a conjunction of the
/// negated literals, i.e. a CNF of singleton clauses.
pub fn clause_not(c: &Clause) -> Cnf {
    let clauses: BTreeSet<Clause> = c
        .literals()
        .iter()
        .map(|&l| {
            Clause::from_literals(std::iter::once(neg(l)).collect())
                .expect("a singleton set is non-empty")
        })
        .collect();
    Cnf::from_clauses(clauses).tautologically_reduce()
}

/// Disjunction of two CNFs: the Cartesian product of their clauses, each pair combined
/// with [`clause_or_clause`] (this is exactly CNF-distribution of an OR), reduced.
pub fn cnf_or_cnf(a: &Cnf, b: &Cnf) -> Cnf {
    let mut clauses = BTreeSet::new();
    for ca in a.clauses() {
        for cb in b.clauses() {
            clauses.insert(clause_or_clause(ca, cb));
        }
    }
    Cnf::from_clauses(clauses).tautologically_reduce()
}

/// Conjunction of two CNFs: set union of their clauses, reduced.
pub fn cnf_and_cnf(a: &Cnf, b: &Cnf) -> Cnf {
    let clauses: BTreeSet<Clause> = a.clauses().union(b.clauses()).cloned().collect();
    Cnf::from_clauses(clauses).tautologically_reduce()
}

/// Negation of a CNF: De Morgan's law distributed clause by clause, folding through
/// [`cnf_or_cnf`] — `¬(C1 ∧ C2 ∧ ...) = ¬C1 ∨ ¬C2 ∨ ...`.
pub fn cnf_not(f: &Cnf) -> Cnf {
    let mut clauses = f.clauses().iter();
    let first = clauses
        .next()
        .expect("a CNF has at least one clause");
    let mut acc = clause_not(first);
    for c in clauses {
        acc = cnf_or_cnf(&acc, &clause_not(c));
    }
    acc
}

/// Either a structural MHGraph or an already-materialized set of CNFs; the common input
/// shape of [`graph_or`]/[`graph_and`], which coerce an MHGraph to its full CNF-set.
pub enum GraphOrCnfs {
    /// A structural MHGraph, to be expanded via `cnfs_from_mhgraph`.
    Graph(MhGraph),
    /// An already-materialized, deduplicated set of CNFs.
    Cnfs(BTreeSet<Cnf>),
}

impl GraphOrCnfs {
    fn into_cnfs(self) -> BTreeSet<Cnf> {
        match self {
            GraphOrCnfs::Cnfs(set) => set,
            GraphOrCnfs::Graph(g) => cnfs_from_mhgraph(&g, EnumerationOptions::default())
                .expect("a non-oversaturated mhgraph enumerates without error")
                .collect(),
        }
    }
}

/// `graph_or(A, B)`: coerce both operands to CNF-sets, form the Cartesian product under
/// [`cnf_or_cnf`], tautologically reduce, and return the resulting set.
pub fn graph_or(a: GraphOrCnfs, b: GraphOrCnfs) -> BTreeSet<Cnf> {
    let cnfs_a = a.into_cnfs();
    let cnfs_b = b.into_cnfs();
    let mut out = BTreeSet::new();
    for fa in &cnfs_a {
        for fb in &cnfs_b {
            out.insert(cnf_or_cnf(fa, fb));
        }
    }
    out
}

/// `graph_and(A, B)`: if both operands are MHGraphs, return their `graph_union`; otherwise
/// behave as [`graph_or`] but combine with [`cnf_and_cnf`].
pub fn graph_and(a: GraphOrCnfs, b: GraphOrCnfs) -> GraphOrCnfs {
    if let (GraphOrCnfs::Graph(ga), GraphOrCnfs::Graph(gb)) = (&a, &b) {
        return GraphOrCnfs::Graph(graph_union(ga, gb));
    }
    let cnfs_a = a.into_cnfs();
    let cnfs_b = b.into_cnfs();
    let mut out = BTreeSet::new();
    for fa in &cnfs_a {
        for fb in &cnfs_b {
            out.insert(cnf_and_cnf(fa, fb));
        }
    }
    GraphOrCnfs::Cnfs(out)
}

#[cfg(test)]
#[path = "unit_tests/propositional.rs"]
mod tests;
