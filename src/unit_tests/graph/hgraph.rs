use super::*;
use crate::graph::hedge::hedge;

#[test]
fn rejects_empty() {
    let empty: Vec<HEdge> = vec![];
    assert!(hgraph(empty).is_err());
}

#[test]
fn dedupes_hyperedges() {
    let h = hedge(vec![1, 2, 3]).unwrap();
    let hg = hgraph(vec![h.clone(), h]).unwrap();
    assert_eq!(hg.len(), 1);
}
