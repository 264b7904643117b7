//! The graph core: vertices, edges, hyperedges, and the three graph value types
//! (`Graph`, `HGraph`, `MhGraph`) with their structural operations.

pub mod conversions;
pub mod edge;
pub mod hedge;
pub mod hgraph;
pub mod mhgraph;
pub mod simple;
pub mod vertex;

pub use edge::{edge, Edge};
pub use hedge::{hedge, HEdge, IntoVertex};
pub use hgraph::{hgraph, HGraph};
pub use mhgraph::{graph_union, mhgraph, MhGraph, Multiset};
pub use simple::{graph, Graph};
pub use vertex::{vertex, Vertex};
