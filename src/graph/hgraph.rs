//! HGraphs: non-empty sets of hyperedges (no multiplicity).

use crate::error::{CoreError, Result};
use crate::graph::hedge::HEdge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A non-empty set of [`HEdge`]s.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HGraph(BTreeSet<HEdge>);

impl HGraph {
    /// Construct an HGraph from a non-empty collection of hyperedges.
    pub fn new<I: IntoIterator<Item = HEdge>>(edges: I) -> Result<Self> {
        let set: BTreeSet<HEdge> = edges.into_iter().collect();
        if set.is_empty() {
            return Err(CoreError::EmptyCollection { kind: "hgraph" });
        }
        Ok(Self(set))
    }

    /// The hyperedges of this HGraph.
    pub fn edges(&self) -> &BTreeSet<HEdge> {
        &self.0
    }

    /// Number of distinct hyperedges.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never empty by construction; offered for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Construct an [`HGraph`] from a non-empty collection of hyperedges.
pub fn hgraph<I: IntoIterator<Item = HEdge>>(edges: I) -> Result<HGraph> {
    HGraph::new(edges)
}

#[cfg(test)]
#[path = "../unit_tests/graph/hgraph.rs"]
mod tests;
