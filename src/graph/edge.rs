//! Simple edges: unordered pairs (or loops) of vertices.

use crate::error::{CoreError, Result};
use crate::graph::hedge::IntoVertex;
use crate::graph::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An unordered set of 1 or 2 distinct [`Vertex`] values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge(BTreeSet<Vertex>);

impl Edge {
    /// Construct an edge from a non-empty collection of at most two vertex-likes.
    pub fn new<T: IntoVertex, I: IntoIterator<Item = T>>(vs: I) -> Result<Self> {
        let mut set = BTreeSet::new();
        for v in vs {
            set.insert(v.into_vertex()?);
        }
        if set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "edge" });
        }
        if set.len() > 2 {
            return Err(CoreError::StructuralRestriction {
                kind: "edge cardinality",
                limit: 2,
                value: set.len(),
            });
        }
        Ok(Self(set))
    }

    /// Construct directly from an already-built vertex set, checking size.
    pub fn from_vertices_checked(set: BTreeSet<Vertex>) -> Result<Self> {
        if set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "edge" });
        }
        if set.len() > 2 {
            return Err(CoreError::StructuralRestriction {
                kind: "edge cardinality",
                limit: 2,
                value: set.len(),
            });
        }
        Ok(Self(set))
    }

    /// The vertices of this edge.
    pub fn vertices(&self) -> &BTreeSet<Vertex> {
        &self.0
    }

    /// `1` for a loop, `2` for a proper edge.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never empty by construction; offered for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Construct an [`Edge`] from a non-empty collection of at most two vertex-likes.
pub fn edge<T: IntoVertex, I: IntoIterator<Item = T>>(vs: I) -> Result<Edge> {
    Edge::new(vs)
}

#[cfg(test)]
#[path = "../unit_tests/graph/edge.rs"]
mod tests;
