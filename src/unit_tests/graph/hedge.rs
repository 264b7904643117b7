use super::*;

#[test]
fn rejects_empty() {
    let empty: Vec<u32> = vec![];
    assert!(hedge(empty).is_err());
}

#[test]
fn dedupes_vertices() {
    let h = hedge(vec![1, 1, 2]).unwrap();
    assert_eq!(h.len(), 2);
}

#[test]
fn idempotent() {
    let h = hedge(vec![1, 2, 3]).unwrap();
    let again = HEdge::from_vertices(h.vertices().clone()).unwrap();
    assert_eq!(h, again);
}

#[test]
fn single_vertex_is_a_loop() {
    let h = hedge(vec![1]).unwrap();
    assert!(h.is_loop());
    let h2 = hedge(vec![1, 2]).unwrap();
    assert!(!h2.is_loop());
}

#[test]
fn without_drops_one_vertex() {
    let h = hedge(vec![1, 2, 3]).unwrap();
    let smaller = h.without(crate::graph::vertex::vertex(2).unwrap()).unwrap();
    assert_eq!(smaller.len(), 2);
    assert!(!smaller.contains(crate::graph::vertex::vertex(2).unwrap()));
}

#[test]
fn without_last_vertex_fails() {
    let h = hedge(vec![1]).unwrap();
    assert!(h.without(crate::graph::vertex::vertex(1).unwrap()).is_err());
}
