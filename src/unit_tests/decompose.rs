use super::*;
use crate::graph::hedge::hedge;
use crate::graph::mhgraph::mhgraph;
use crate::graph::vertex::vertex;
use crate::oracle::BruteForceOracle;

fn engine() -> DecomposeEngine<'static> {
    DecomposeEngine::new(&BruteForceOracle, DecomposeOptions::default())
}

fn v(n: u32) -> Vertex {
    vertex(n).unwrap()
}

/// S1: triangle K3 is SAT.
#[test]
fn scenario_s1_triangle_is_sat() {
    let g = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
    ])
    .unwrap();
    assert!(engine().decompose(&g));
}

/// S2: an edge of multiplicity 4 is over-saturated and UNSAT.
#[test]
fn scenario_s2_oversaturated_edge_is_unsat() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 4)]).unwrap();
    assert!(!engine().decompose(&g));
}

/// S3: K4 is UNSAT.
#[test]
fn scenario_s3_k4_is_unsat() {
    let g = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![1, 4]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
        (hedge(vec![2, 4]).unwrap(), 1),
        (hedge(vec![3, 4]).unwrap(), 1),
    ])
    .unwrap();
    assert!(!engine().decompose(&g));
}

/// S4: K4 minus an edge is SAT.
#[test]
fn scenario_s4_k4_minus_edge_is_sat() {
    let g = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![1, 4]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
        (hedge(vec![2, 4]).unwrap(), 1),
    ])
    .unwrap();
    assert!(engine().decompose(&g));
}

/// S5: K4 represented as a 3-uniform hypergraph is SAT.
#[test]
fn scenario_s5_k4_as_3_uniform_is_sat() {
    let g = mhgraph(vec![
        (hedge(vec![1, 2, 3]).unwrap(), 1),
        (hedge(vec![1, 2, 4]).unwrap(), 1),
        (hedge(vec![1, 3, 4]).unwrap(), 1),
        (hedge(vec![2, 3, 4]).unwrap(), 1),
    ])
    .unwrap();
    assert!(engine().decompose(&g));
}

/// S6: a single loop is SAT (it just fixes a sign).
#[test]
fn scenario_s6_single_loop_is_sat() {
    let g = mhgraph(vec![(hedge(vec![1]).unwrap(), 1)]).unwrap();
    assert!(engine().decompose(&g));
}

/// S7: a double loop is UNSAT.
#[test]
fn scenario_s7_double_loop_is_unsat() {
    let g = mhgraph(vec![(hedge(vec![1]).unwrap(), 2)]).unwrap();
    assert!(!engine().decompose(&g));
}

#[test]
fn simplify_at_leaves_drops_the_leaf_edge() {
    // A path 1-2-3: vertex 1 and vertex 3 are leaves of degree 1.
    let g = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
    ])
    .unwrap();
    match simplify_at_leaves(&g) {
        SimplifyOutcome::Bool(b) => assert!(b, "a tree of leaf edges should collapse to TRUE"),
        SimplifyOutcome::Graph(_) => panic!("expected the whole path to simplify away"),
    }
}

#[test]
fn simplify_at_leaves_leaves_a_cycle_unchanged() {
    let triangle = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
    ])
    .unwrap();
    match simplify_at_leaves(&triangle) {
        SimplifyOutcome::Graph(g) => assert_eq!(g, triangle),
        SimplifyOutcome::Bool(_) => panic!("a cycle has no leaves to simplify"),
    }
}

#[test]
fn simplify_at_leaves_and_loops_reduces_single_loop_to_true() {
    let g = mhgraph(vec![(hedge(vec![1]).unwrap(), 1)]).unwrap();
    match engine().simplify_at_leaves_and_loops(&g) {
        SimplifyOutcome::Bool(b) => assert!(b),
        SimplifyOutcome::Graph(_) => panic!("a single loop must reduce to TRUE"),
    }
}

#[test]
fn simplify_at_leaves_and_loops_reduces_double_loop_to_false() {
    let g = mhgraph(vec![(hedge(vec![1]).unwrap(), 2)]).unwrap();
    match engine().simplify_at_leaves_and_loops(&g) {
        SimplifyOutcome::Bool(b) => assert!(!b),
        SimplifyOutcome::Graph(_) => panic!("a double loop must reduce to FALSE"),
    }
}

#[test]
fn compute_all_two_partitions_of_three_items_has_three_splits() {
    // {1,2},{1,3},{1,4} linked at vertex 1 projects to {2},{3},{4}: three items.
    let g = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![1, 4]).unwrap(), 1),
    ])
    .unwrap();
    let link = g.link(v(1));
    let partitions: Vec<_> = compute_all_two_partitions(&link, false).collect();
    // n=3 items -> 2^(3-1) - 1 = 3 distinct bipartitions.
    assert_eq!(partitions.len(), 3);
    for (a, b) in &partitions {
        assert!(!a.is_empty());
        assert!(!b.is_empty());
    }
}

#[test]
fn compute_all_two_partitions_hyperbolic_only_filters_lopsided_splits() {
    let g = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![1, 4]).unwrap(), 1),
        (hedge(vec![1, 5]).unwrap(), 1),
    ])
    .unwrap();
    let link = g.link(v(1));
    let all: Vec<_> = compute_all_two_partitions(&link, false).collect();
    let hyperbolic: Vec<_> = compute_all_two_partitions(&link, true).collect();
    assert!(hyperbolic.len() < all.len());
    for (a, b) in &hyperbolic {
        let diff = (total_multiplicity(a) as i64 - total_multiplicity(b) as i64).abs();
        assert!(diff <= 1);
    }
}

#[test]
fn decompose_cache_agrees_with_itself_across_calls() {
    let g = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
    ])
    .unwrap();
    let e = engine();
    let first = e.decompose(&g);
    let second = e.decompose(&g);
    assert_eq!(first, second);
}

#[test]
fn decompose_agrees_with_exhaustive_mhgraph_sat() {
    // Property 9: decompose(G) should agree with brute-force mhgraph_sat(G).
    let cases = vec![
        mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1), (hedge(vec![2, 3]).unwrap(), 1)]).unwrap(),
        mhgraph(vec![
            (hedge(vec![1, 2]).unwrap(), 1),
            (hedge(vec![1, 3]).unwrap(), 1),
            (hedge(vec![2, 3]).unwrap(), 1),
        ])
        .unwrap(),
        mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 3)]).unwrap(),
    ];
    for g in cases {
        let via_decompose = engine().decompose(&g);
        let via_sat = crate::oracle::mhgraph_sat_with(&BruteForceOracle, &g);
        assert_eq!(via_decompose, via_sat, "disagreement on {g:?}");
    }
}

#[test]
fn hyperbolic_only_option_does_not_change_the_decision() {
    let g = mhgraph(vec![
        (hedge(vec![1, 2, 3]).unwrap(), 1),
        (hedge(vec![1, 2, 4]).unwrap(), 1),
        (hedge(vec![1, 3, 4]).unwrap(), 1),
        (hedge(vec![2, 3, 4]).unwrap(), 1),
    ])
    .unwrap();
    let plain = DecomposeEngine::new(&BruteForceOracle, DecomposeOptions::default());
    let hyperbolic = DecomposeEngine::new(
        &BruteForceOracle,
        DecomposeOptions { hyperbolic_only: true, ..DecomposeOptions::default() },
    );
    assert_eq!(plain.decompose(&g), hyperbolic.decompose(&g));
}
