use super::*;
use crate::graph::hedge::hedge;
use crate::graph::mhgraph::mhgraph;

#[test]
fn edge_smooth_rewrites_a_path_to_a_single_edge() {
    // {1,2},{1,3} -> {2,3}, matched with vertex 4 playing the role of the free vertex 1.
    let g = mhgraph(vec![(hedge(vec![4, 2]).unwrap(), 1), (hedge(vec![4, 3]).unwrap(), 1)]).unwrap();
    let rule = edge_smooth();
    let rewritten = apply_rule(&g, &rule);
    assert_eq!(rewritten.len(), 1);
    assert_eq!(rewritten[0], mhgraph(vec![(hedge(vec![2, 3]).unwrap(), 1)]).unwrap());
}

#[test]
fn apply_rule_is_identity_when_pattern_does_not_match() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1)]).unwrap();
    let rule = r4();
    let rewritten = apply_rule(&g, &rule);
    assert_eq!(rewritten, vec![g]);
}

#[test]
fn apply_rule_respects_the_free_vertex_degree_guard() {
    // vertex 1 here has degree 3 (one more hyperedge than EDGE_SMOOTH's free vertex),
    // so the pattern should not fire even though it embeds as a subgraph.
    let g = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![1, 4]).unwrap(), 1),
    ])
    .unwrap();
    let rewritten = apply_rule(&g, &edge_smooth());
    assert_eq!(rewritten, vec![g]);
}

#[test]
fn r2_splits_into_two_children() {
    // {1,2,3},{1,2},{1,3} -> {2}, {3}.
    let g = mhgraph(vec![
        (hedge(vec![1, 2, 3]).unwrap(), 1),
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
    ])
    .unwrap();
    let rewritten = apply_rule(&g, &r2());
    assert_eq!(rewritten.len(), 2);
    assert!(rewritten.contains(&mhgraph(vec![(hedge(vec![2]).unwrap(), 1)]).unwrap()));
    assert!(rewritten.contains(&mhgraph(vec![(hedge(vec![3]).unwrap(), 1)]).unwrap()));
}

#[test]
fn pop2_halves_a_repeated_edge() {
    let rule = pop2(4);
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 4)]).unwrap();
    let rewritten = apply_rule(&g, &rule);
    assert_eq!(rewritten, vec![mhgraph(vec![(hedge(vec![2]).unwrap(), 2)]).unwrap()]);
}

#[test]
fn pop3_halves_a_repeated_hyperedge() {
    let rule = pop3(6);
    let g = mhgraph(vec![(hedge(vec![1, 2, 3]).unwrap(), 6)]).unwrap();
    let rewritten = apply_rule(&g, &rule);
    assert_eq!(
        rewritten,
        vec![mhgraph(vec![(hedge(vec![2, 3]).unwrap(), 3)]).unwrap()]
    );
}

#[test]
fn known_rules_has_the_fixed_seventeen_rules() {
    // EDGE_SMOOTH, HEDGE_SMOOTH, R1, R2, R4, R5, R7 (7) + pop2(2..=4) (3) + pop3(2..=8) (7).
    assert_eq!(known_rules().len(), 7 + 3 + 7);
}

#[test]
fn make_tree_on_an_edge_smooth_pattern_has_one_leaf() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1), (hedge(vec![1, 3]).unwrap(), 1)]).unwrap();
    let tree = make_tree(&g, &known_rules());
    let leaves = tree.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(*leaves[0], mhgraph(vec![(hedge(vec![2, 3]).unwrap(), 1)]).unwrap());
}

#[test]
fn make_tree_is_a_single_node_when_no_rule_matches() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1)]).unwrap();
    let tree = make_tree(&g, &known_rules());
    assert!(tree.children.is_empty());
    assert_eq!(tree.graph, g);
}
