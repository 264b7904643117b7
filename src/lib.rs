//! # mhgraph-sat
//!
//! A research library deciding Boolean satisfiability of *multi-hyper-graphs* (MHGs) by
//! recursive structural decomposition.
//!
//! Given an MHG, every CNF formula it "supports" (one clause per hyperedge, with that
//! clause's variable set equal to the edge's vertex set) is simultaneously satisfiable iff
//! [`decompose::decompose`] returns `true`. This reduces a combinatorial SAT question over
//! whole *families* of formulas to structural operations on a single finite object.
//!
//! ## Layering
//!
//! - [`symbolic`] (C1) — literals, clauses, CNFs, and partial assignment.
//! - [`graph`] (C2) — vertices, edges, hyperedges, and the `MhGraph` multiset, with its
//!   structural queries (`degree`, `star`, `link`, `sphr`, ...).
//! - [`translation`] (C3) — the CNF <-> MHG correspondence.
//! - [`morphism`] (C4) — injective vertex relabelings, subgraph/isomorphism search.
//! - [`propositional`] (C5) — pointwise AND/OR/NOT on clauses/CNFs, lifted to graphs.
//! - [`oracle`] (C6) — the external SAT predicate (`varisat`-backed, with a brute-force
//!   fallback) and the memoized `mhgraph_sat`.
//! - [`decompose`] (C7) — the decomposition engine: leaf/loop simplification, partition
//!   enumeration, the heuristic and entangled checks, and memoized `decompose`.
//! - [`rewrite`] — the reduction-rule engine sibling to C7, for explicit rewriting to
//!   normal forms via a small library of known rules.
//!
//! CLI commands, configuration, DAT-file I/O, pretty-printing, and visualization are
//! explicitly out of scope: this crate consumes only a SAT oracle and a source of
//! candidate MHGs, and exposes value-level operations over them.

pub mod cache;
pub mod combinatorics;
pub mod decompose;
pub mod error;
pub mod graph;
pub mod morphism;
pub mod oracle;
pub mod propositional;
pub mod rewrite;
pub mod symbolic;
pub mod translation;

/// Convenience re-exports of the most commonly used types and functions.
pub mod prelude {
    pub use crate::decompose::{decompose, decompose_with, DecomposeEngine, DecomposeOptions};
    pub use crate::error::{CoreError, Result};
    pub use crate::graph::{hedge, mhgraph, HEdge, MhGraph, Vertex};
    pub use crate::oracle::{cnf_sat, mhgraph_sat, SatOracle};
    pub use crate::symbolic::{cnf, Bool, Cnf, Literal};
    pub use crate::translation::{cnfs_from_mhgraph, mhgraph_from_cnf, number_of_cnfs};
}
