use super::*;
use crate::graph::edge::edge;

#[test]
fn rejects_empty() {
    let empty: Vec<Edge> = vec![];
    assert!(graph(empty).is_err());
}

#[test]
fn dedupes_edges() {
    let e = edge(vec![1, 2]).unwrap();
    let g = graph(vec![e.clone(), e]).unwrap();
    assert_eq!(g.len(), 1);
}
