//! MHGraphs: non-empty multisets of hyperedges (hyperedge -> positive multiplicity).

use crate::error::{CoreError, Result};
use crate::graph::hedge::HEdge;
use crate::graph::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A hyperedge multiset: maps a hyperedge to its (possibly zero, for intermediate
/// computations such as `star`/`link`/`sphr`) multiplicity.
pub type Multiset = BTreeMap<HEdge, u32>;

/// A non-empty multiset of [`HEdge`]s, each carrying a positive-integer multiplicity.
///
/// Equal as values iff their multiset contents are equal; canonically ordered (by the
/// underlying `BTreeMap`) for deterministic iteration and hashing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MhGraph(Multiset);

impl MhGraph {
    /// Construct directly from explicit `(hyperedge, multiplicity)` pairs.
    ///
    /// Multiplicities for a repeated hyperedge key are summed. Rejects an empty result
    /// and any zero multiplicity.
    pub fn new<I: IntoIterator<Item = (HEdge, u32)>>(items: I) -> Result<Self> {
        let mut map: Multiset = BTreeMap::new();
        for (h, m) in items {
            if m == 0 {
                return Err(CoreError::NonPositive {
                    kind: "multiplicity",
                    value: 0,
                });
            }
            *map.entry(h).or_insert(0) += m;
        }
        if map.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "mhgraph" });
        }
        Ok(Self(map))
    }

    /// Construct from a plain collection of hyperedges, counting repeats as multiplicity.
    pub fn from_edges<I: IntoIterator<Item = HEdge>>(edges: I) -> Result<Self> {
        let mut map: Multiset = BTreeMap::new();
        for h in edges {
            *map.entry(h).or_insert(0) += 1;
        }
        if map.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "mhgraph" });
        }
        Ok(Self(map))
    }

    /// Construct from an already-built, non-empty multiset, preserving multiplicities as given.
    pub fn from_multiset(map: Multiset) -> Result<Self> {
        if map.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "mhgraph" });
        }
        if map.values().any(|&m| m == 0) {
            return Err(CoreError::NonPositive {
                kind: "multiplicity",
                value: 0,
            });
        }
        Ok(Self(map))
    }

    /// Construct from a possibly-empty multiset, where empty means the graph is vacuously
    /// satisfied (the caller, e.g. the simplification fixed point, is expected to check
    /// `is_empty` and short-circuit before calling this).
    pub fn try_from_multiset_allow_empty(map: Multiset) -> Option<Self> {
        if map.is_empty() {
            None
        } else {
            Some(Self(map))
        }
    }

    /// The underlying hyperedge -> multiplicity multiset.
    pub fn as_multiset(&self) -> &Multiset {
        &self.0
    }

    /// Number of distinct hyperedges (ignoring multiplicity).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never empty by construction; offered for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All vertices appearing in any hyperedge.
    pub fn vertices(&self) -> std::collections::BTreeSet<Vertex> {
        self.0
            .keys()
            .flat_map(|h| h.vertices().iter().copied())
            .collect()
    }

    /// `degree(v, G)`: sum of multiplicities of hyperedges containing `v`.
    pub fn degree(&self, v: Vertex) -> u32 {
        self.0
            .iter()
            .filter(|(h, _)| h.contains(v))
            .map(|(_, m)| *m)
            .sum()
    }

    /// `star(G, v)`: the sub-multiset of hyperedges containing `v`, multiplicities preserved.
    pub fn star(&self, v: Vertex) -> Multiset {
        self.0
            .iter()
            .filter(|(h, _)| h.contains(v))
            .map(|(h, m)| (h.clone(), *m))
            .collect()
    }

    /// `link(G, v)`: `star(G, v)` with `v` projected away, dropping loops at `v`
    /// (a loop `{v}` has nothing left once `v` is removed).
    pub fn link(&self, v: Vertex) -> Multiset {
        let mut out: Multiset = BTreeMap::new();
        for (h, m) in self.star(v) {
            if h.is_loop() {
                continue;
            }
            let projected = h.without(v).expect("non-loop hyperedge survives removing one vertex");
            *out.entry(projected).or_insert(0) += m;
        }
        out
    }

    /// `sphr(G, v)`: hyperedges not containing `v`, multiplicities preserved.
    /// Complementary to `star`: `G = star(v) ⊎ sphr(v)`.
    pub fn sphr(&self, v: Vertex) -> Multiset {
        self.0
            .iter()
            .filter(|(h, _)| !h.contains(v))
            .map(|(h, m)| (h.clone(), *m))
            .collect()
    }

    /// `is_oversaturated(G)`: does any hyperedge `h` of size `k` carry multiplicity `> 2^k`?
    pub fn is_oversaturated(&self) -> bool {
        self.0.iter().any(|(h, &m)| {
            let max = 1u64 << h.len();
            (m as u64) > max
        })
    }

    /// Does this graph have a loop (a hyperedge of size 1) at `v`?
    pub fn has_loop_at(&self, v: Vertex) -> bool {
        self.0
            .iter()
            .any(|(h, _)| h.is_loop() && h.contains(v))
    }

    /// Multiplicity of the loop at `v`, if any (0 if none).
    pub fn loop_multiplicity(&self, v: Vertex) -> u32 {
        self.0
            .iter()
            .filter(|(h, _)| h.is_loop() && h.contains(v))
            .map(|(_, m)| *m)
            .sum()
    }

    /// `pick_max_degree_vertex(G)`: the vertex of maximum degree, ties broken by smallest id.
    pub fn pick_max_degree_vertex(&self) -> Vertex {
        self.vertices()
            .into_iter()
            .max_by_key(|&v| (self.degree(v), std::cmp::Reverse(v)))
            .expect("non-empty mhgraph has at least one vertex")
    }

    /// `pick_min_degree_vertex(G)`: the vertex of minimum degree, ties broken by smallest id.
    pub fn pick_min_degree_vertex(&self) -> Vertex {
        self.vertices()
            .into_iter()
            .min_by_key(|&v| (self.degree(v), v))
            .expect("non-empty mhgraph has at least one vertex")
    }
}

/// `graph_union(G1, G2)`: multiset sum of two MHGraphs.
pub fn graph_union(g1: &MhGraph, g2: &MhGraph) -> MhGraph {
    let mut map = g1.0.clone();
    for (h, m) in &g2.0 {
        *map.entry(h.clone()).or_insert(0) += m;
    }
    MhGraph::from_multiset(map).expect("union of two non-empty mhgraphs is non-empty")
}

/// Union a possibly-empty raw multiset with an MHGraph, producing an MHGraph.
/// Used by the decomposition engine when `sphr`/`link` results need combining with an
/// existing graph and may themselves be empty.
pub fn union_multiset_with(g: &MhGraph, extra: &Multiset) -> MhGraph {
    let mut map = g.0.clone();
    for (h, m) in extra {
        *map.entry(h.clone()).or_insert(0) += m;
    }
    MhGraph::from_multiset(map).expect("g is non-empty, so the union is non-empty")
}

/// Construct an [`MhGraph`] from explicit `(hyperedge, multiplicity)` pairs.
pub fn mhgraph<I: IntoIterator<Item = (HEdge, u32)>>(items: I) -> Result<MhGraph> {
    MhGraph::new(items)
}

#[cfg(test)]
#[path = "../unit_tests/graph/mhgraph.rs"]
mod tests;
