use super::*;
use crate::graph::hedge::hedge;
use crate::graph::mhgraph::mhgraph;
use crate::graph::vertex::vertex;

fn triangle() -> MhGraph {
    mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
    ])
    .unwrap()
}

fn single_edge() -> MhGraph {
    mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1)]).unwrap()
}

#[test]
fn vertex_map_rejects_partial_domain() {
    let dom: BTreeSet<Vertex> = [vertex(1).unwrap(), vertex(2).unwrap()].into_iter().collect();
    let codom: BTreeSet<Vertex> = [vertex(1).unwrap()].into_iter().collect();
    let mut translation = BTreeMap::new();
    translation.insert(vertex(1).unwrap(), vertex(1).unwrap());
    assert!(VertexMap::new(&dom, &codom, translation).is_none());
}

#[test]
fn vertex_map_rejects_image_outside_codomain() {
    let dom: BTreeSet<Vertex> = [vertex(1).unwrap()].into_iter().collect();
    let codom: BTreeSet<Vertex> = [vertex(2).unwrap()].into_iter().collect();
    let mut translation = BTreeMap::new();
    translation.insert(vertex(1).unwrap(), vertex(5).unwrap());
    assert!(VertexMap::new(&dom, &codom, translation).is_none());
}

#[test]
fn injective_vertex_map_rejects_collisions() {
    let dom: BTreeSet<Vertex> = [vertex(1).unwrap(), vertex(2).unwrap()].into_iter().collect();
    let codom: BTreeSet<Vertex> = [vertex(1).unwrap()].into_iter().collect();
    let mut translation = BTreeMap::new();
    translation.insert(vertex(1).unwrap(), vertex(1).unwrap());
    translation.insert(vertex(2).unwrap(), vertex(1).unwrap());
    let vm = VertexMap::new(&dom, &codom, translation).unwrap();
    assert!(InjectiveVertexMap::new(vm).is_none());
}

#[test]
fn single_edge_is_a_subgraph_of_the_triangle() {
    let (found, _) = subgraph_search(&single_edge(), &triangle(), false);
    assert!(found);
}

#[test]
fn triangle_is_not_a_subgraph_of_a_single_edge() {
    let (found, _) = subgraph_search(&triangle(), &single_edge(), false);
    assert!(!found);
}

#[test]
fn triangle_is_isomorphic_to_itself() {
    let (found, _) = isomorphism_search(&triangle(), &triangle(), false);
    assert!(found);
}

#[test]
fn isomorphism_search_is_symmetric() {
    let relabeled = mhgraph(vec![
        (hedge(vec![4, 5]).unwrap(), 1),
        (hedge(vec![4, 6]).unwrap(), 1),
        (hedge(vec![5, 6]).unwrap(), 1),
    ])
    .unwrap();
    let (forward, _) = isomorphism_search(&triangle(), &relabeled, false);
    let (backward, _) = isomorphism_search(&relabeled, &triangle(), false);
    assert_eq!(forward, backward);
    assert!(forward);
}

#[test]
fn unique_upto_isom_collapses_relabelings() {
    let relabeled = mhgraph(vec![
        (hedge(vec![4, 5]).unwrap(), 1),
        (hedge(vec![4, 6]).unwrap(), 1),
        (hedge(vec![5, 6]).unwrap(), 1),
    ])
    .unwrap();
    let unique = unique_upto_isom(vec![triangle(), relabeled, single_edge()]);
    assert_eq!(unique.len(), 2);
}

#[test]
fn subgraph_search_return_all_reports_every_witness() {
    let (found, witnesses) = subgraph_search(&single_edge(), &triangle(), true);
    assert!(found);
    assert!(witnesses.len() >= 1);
}
