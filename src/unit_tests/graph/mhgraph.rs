use super::*;
use crate::graph::hedge::hedge;
use crate::graph::vertex::vertex;

fn v(n: u32) -> crate::graph::vertex::Vertex {
    vertex(n).unwrap()
}

fn triangle() -> MhGraph {
    mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
    ])
    .unwrap()
}

#[test]
fn rejects_empty() {
    let empty: Vec<(HEdge, u32)> = vec![];
    assert!(mhgraph(empty).is_err());
}

#[test]
fn rejects_zero_multiplicity() {
    assert!(mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 0)]).is_err());
}

#[test]
fn from_edges_counts_repeats_as_multiplicity() {
    let h = hedge(vec![1, 2]).unwrap();
    let g = MhGraph::from_edges(vec![h.clone(), h]).unwrap();
    assert_eq!(g.as_multiset().len(), 1);
    assert_eq!(*g.as_multiset().values().next().unwrap(), 2);
}

#[test]
fn degree_sums_multiplicities() {
    let g = triangle();
    assert_eq!(g.degree(v(1)), 2);
}

#[test]
fn star_keeps_only_incident_edges() {
    let g = triangle();
    let s = g.star(v(1));
    assert_eq!(s.len(), 2);
}

#[test]
fn link_projects_away_the_vertex() {
    let g = triangle();
    let l = g.link(v(1));
    assert_eq!(l.len(), 2);
    assert!(l.contains_key(&hedge(vec![2]).unwrap()));
    assert!(l.contains_key(&hedge(vec![3]).unwrap()));
}

#[test]
fn link_drops_loops() {
    let g = mhgraph(vec![(hedge(vec![1]).unwrap(), 1), (hedge(vec![1, 2]).unwrap(), 1)]).unwrap();
    let l = g.link(v(1));
    assert_eq!(l.len(), 1);
    assert!(l.contains_key(&hedge(vec![2]).unwrap()));
}

#[test]
fn sphr_is_complementary_to_star() {
    let g = triangle();
    let s = g.sphr(v(1));
    assert_eq!(s.len(), 1);
    assert!(s.contains_key(&hedge(vec![2, 3]).unwrap()));
}

#[test]
fn is_oversaturated_detects_multiplicity_over_2_pow_k() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 4)]).unwrap();
    assert!(g.is_oversaturated());
    let not_saturated = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 3)]).unwrap();
    assert!(!not_saturated.is_oversaturated());
}

#[test]
fn pick_max_degree_vertex_breaks_ties_by_smallest_id() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1), (hedge(vec![3, 4]).unwrap(), 1)]).unwrap();
    assert_eq!(g.pick_max_degree_vertex(), v(1));
}

#[test]
fn pick_min_degree_vertex_breaks_ties_by_smallest_id() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1), (hedge(vec![3, 4]).unwrap(), 1)]).unwrap();
    assert_eq!(g.pick_min_degree_vertex(), v(1));
}

#[test]
fn graph_union_sums_multiplicities_on_shared_edges() {
    let h = hedge(vec![1, 2]).unwrap();
    let g1 = mhgraph(vec![(h.clone(), 1)]).unwrap();
    let g2 = mhgraph(vec![(h.clone(), 2)]).unwrap();
    let u = graph_union(&g1, &g2);
    assert_eq!(*u.as_multiset().get(&h).unwrap(), 3);
}

#[test]
fn single_loop_has_empty_sphr_and_link() {
    let g = mhgraph(vec![(hedge(vec![1]).unwrap(), 1)]).unwrap();
    assert!(g.link(v(1)).is_empty());
    assert!(g.sphr(v(1)).is_empty());
}

#[test]
fn double_loop_has_multiplicity_two() {
    let g = mhgraph(vec![(hedge(vec![1]).unwrap(), 2)]).unwrap();
    assert_eq!(g.loop_multiplicity(v(1)), 2);
}
