//! Hyperedges: non-empty sets of distinct vertices of any cardinality.

use crate::error::{CoreError, Result};
use crate::graph::vertex::{vertex, Vertex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A non-empty set of distinct [`Vertex`] values, any cardinality `>= 1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HEdge(BTreeSet<Vertex>);

impl HEdge {
    /// Construct a hyperedge from a non-empty collection of vertex-likes (`u32` or [`Vertex`]).
    pub fn new<T: IntoVertex, I: IntoIterator<Item = T>>(vs: I) -> Result<Self> {
        let mut set = BTreeSet::new();
        for v in vs {
            set.insert(v.into_vertex()?);
        }
        if set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "hyperedge" });
        }
        Ok(Self(set))
    }

    /// Construct directly from an already-built, non-empty vertex set.
    pub fn from_vertices(set: BTreeSet<Vertex>) -> Result<Self> {
        if set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "hyperedge" });
        }
        Ok(Self(set))
    }

    /// The vertices of this hyperedge.
    pub fn vertices(&self) -> &BTreeSet<Vertex> {
        &self.0
    }

    /// Cardinality of the hyperedge.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A hyperedge is never empty by construction; offered for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Does this hyperedge contain `v`?
    pub fn contains(&self, v: Vertex) -> bool {
        self.0.contains(&v)
    }

    /// Is this a loop, i.e. a hyperedge of size 1?
    pub fn is_loop(&self) -> bool {
        self.0.len() == 1
    }

    /// This hyperedge with `v` removed, if present. Fails if removing `v` would empty it.
    pub fn without(&self, v: Vertex) -> Result<Self> {
        let mut set = self.0.clone();
        set.remove(&v);
        Self::from_vertices(set)
    }
}

/// Convert a value into a [`Vertex`], used so hyperedge/graph constructors accept both
/// raw `u32`s and already-built `Vertex`es.
pub trait IntoVertex {
    /// Attempt the conversion, failing on zero.
    fn into_vertex(self) -> Result<Vertex>;
}

impl IntoVertex for Vertex {
    fn into_vertex(self) -> Result<Vertex> {
        Ok(self)
    }
}

impl IntoVertex for u32 {
    fn into_vertex(self) -> Result<Vertex> {
        vertex(self)
    }
}

/// Construct an [`HEdge`] from a non-empty collection of vertex-likes.
pub fn hedge<T: IntoVertex, I: IntoIterator<Item = T>>(vs: I) -> Result<HEdge> {
    HEdge::new(vs)
}

#[cfg(test)]
#[path = "../unit_tests/graph/hedge.rs"]
mod tests;
