use crate::graph::edge::edge;
use crate::graph::hgraph::HGraph;
use crate::graph::mhgraph::{mhgraph, MhGraph};
use crate::graph::simple::{graph, Graph};
use crate::graph::hedge::hedge;

#[test]
fn graph_round_trips_through_hgraph() {
    let g = graph(vec![edge(vec![1, 2]).unwrap(), edge(vec![2, 3]).unwrap()]).unwrap();
    let hg: HGraph = (&g).into();
    let back: Graph = (&hg).try_into().unwrap();
    assert_eq!(g, back);
}

#[test]
fn hgraph_to_graph_fails_on_large_hyperedge() {
    let hg = HGraph::new(vec![hedge(vec![1, 2, 3]).unwrap()]).unwrap();
    let attempt: Result<Graph, _> = (&hg).try_into();
    assert!(attempt.is_err());
}

#[test]
fn mhgraph_to_hgraph_fails_on_multi_edge() {
    let mhg = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 2)]).unwrap();
    let attempt: Result<HGraph, _> = (&mhg).try_into();
    assert!(attempt.is_err());
}

#[test]
fn graph_round_trips_through_mhgraph() {
    let g = graph(vec![edge(vec![1, 2]).unwrap()]).unwrap();
    let mhg: MhGraph = (&g).into();
    let back: Graph = (&mhg).try_into().unwrap();
    assert_eq!(g, back);
}
