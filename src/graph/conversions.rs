//! Conversions between [`Graph`], [`HGraph`], and [`MhGraph`], defined only where the
//! necessary restrictions hold (no multi-edges for `Graph`; all edges size <= 2).

use crate::error::{CoreError, Result};
use crate::graph::edge::Edge;
use crate::graph::hedge::HEdge;
use crate::graph::hgraph::HGraph;
use crate::graph::mhgraph::MhGraph;
use crate::graph::simple::Graph;
use std::collections::BTreeSet;

impl From<&Graph> for HGraph {
    fn from(g: &Graph) -> Self {
        let edges: BTreeSet<HEdge> = g
            .edges()
            .iter()
            .map(|e| HEdge::from_vertices(e.vertices().clone()).expect("edge vertex sets are non-empty"))
            .collect();
        HGraph::new(edges).expect("a non-empty Graph converts to a non-empty HGraph")
    }
}

impl TryFrom<&HGraph> for Graph {
    type Error = CoreError;

    /// Fails if any hyperedge has size greater than 2.
    fn try_from(hg: &HGraph) -> Result<Self> {
        let mut edges = Vec::new();
        for h in hg.edges() {
            if h.len() > 2 {
                return Err(CoreError::StructuralRestriction {
                    kind: "hyperedge size while converting HGraph to Graph",
                    limit: 2,
                    value: h.len(),
                });
            }
            edges.push(Edge::from_vertices_checked(h.vertices().clone())?);
        }
        Graph::new(edges)
    }
}

impl From<&HGraph> for MhGraph {
    fn from(hg: &HGraph) -> Self {
        MhGraph::from_edges(hg.edges().iter().cloned())
            .expect("a non-empty HGraph converts to a non-empty MhGraph")
    }
}

impl TryFrom<&MhGraph> for HGraph {
    type Error = CoreError;

    /// Fails if any hyperedge carries multiplicity greater than 1 (a multi-edge).
    fn try_from(mhg: &MhGraph) -> Result<Self> {
        for &m in mhg.as_multiset().values() {
            if m > 1 {
                return Err(CoreError::StructuralRestriction {
                    kind: "hyperedge multiplicity while converting MhGraph to HGraph",
                    limit: 1,
                    value: m as usize,
                });
            }
        }
        HGraph::new(mhg.as_multiset().keys().cloned())
    }
}

impl From<&Graph> for MhGraph {
    fn from(g: &Graph) -> Self {
        let hg: HGraph = g.into();
        (&hg).into()
    }
}

impl TryFrom<&MhGraph> for Graph {
    type Error = CoreError;

    /// Fails if the MHGraph has a multi-edge or a hyperedge of size greater than 2.
    fn try_from(mhg: &MhGraph) -> Result<Self> {
        let hg: HGraph = mhg.try_into()?;
        (&hg).try_into()
    }
}

#[cfg(test)]
#[path = "../unit_tests/graph/conversions.rs"]
mod tests;
