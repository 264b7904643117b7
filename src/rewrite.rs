//! The reduction-rule engine (§4.7.6), a sibling of the decomposition engine: a small
//! library of hand-authored rules `(pattern, free vertex, children)`, `apply_rule` to
//! rewrite one match, and `make_tree` to build the reduction tree down to normal forms.
//!
//! Grounded in `examples/original_source/reduce_by_rules.py`'s `KNOWN_RULES`/`apply_rule`/
//! `make_tree`, with the rule data reproduced verbatim from that module.

use crate::graph::hedge::HEdge;
use crate::graph::mhgraph::{MhGraph, Multiset};
use crate::graph::vertex::{vertex, Vertex};
use crate::morphism::{graph_image, subgraph_search};

/// A reduction rule: wherever `pattern` appears as a subgraph with a witness mapping
/// preserving `free`'s degree, replace the matched subgraph by each of `children` in turn.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Human-readable rule name, for diagnostics only.
    pub name: &'static str,
    /// The pattern to search for as a subgraph.
    pub pattern: MhGraph,
    /// The pattern vertex whose degree must be preserved by the match.
    pub free: Vertex,
    /// The replacement(s): `apply_rule` returns one rewritten graph per child.
    pub children: Vec<MhGraph>,
}

fn edges(vss: Vec<Vec<u32>>) -> Vec<HEdge> {
    vss.into_iter()
        .map(|vs| HEdge::new(vs).expect("rule literal hyperedges are well-formed"))
        .collect()
}

fn mk_mhgraph(vss: Vec<Vec<u32>>) -> MhGraph {
    MhGraph::from_edges(edges(vss)).expect("rule literal mhgraphs are non-empty")
}

fn mk_rule(name: &'static str, pattern: Vec<Vec<u32>>, free: u32, children: Vec<Vec<Vec<u32>>>) -> Rule {
    Rule {
        name,
        pattern: mk_mhgraph(pattern),
        free: vertex(free).expect("rule free vertex is positive"),
        children: children.into_iter().map(mk_mhgraph).collect(),
    }
}

fn repeated(edge: Vec<u32>, n: usize) -> Vec<Vec<u32>> {
    std::iter::repeat(edge).take(n).collect()
}

/// `EDGE_SMOOTH`: `{1,2},{1,3} -> {2,3}`, free vertex 1.
pub fn edge_smooth() -> Rule {
    mk_rule("EDGE_SMOOTH", vec![vec![1, 2], vec![1, 3]], 1, vec![vec![vec![2, 3]]])
}

/// `HEDGE_SMOOTH`: `{1,2,3},{1,2,4} -> {2,3,4}`, free vertex 1.
pub fn hedge_smooth() -> Rule {
    mk_rule(
        "HEDGE_SMOOTH",
        vec![vec![1, 2, 3], vec![1, 2, 4]],
        1,
        vec![vec![vec![2, 3, 4]]],
    )
}

/// `R1`: `{1,2,3},{1,2} -> {2,3}`, free vertex 1.
pub fn r1() -> Rule {
    mk_rule("R1", vec![vec![1, 2, 3], vec![1, 2]], 1, vec![vec![vec![2, 3]]])
}

/// `R2`: `{1,2,3},{1,2},{1,3} -> {2}, {3}`, free vertex 1.
pub fn r2() -> Rule {
    mk_rule(
        "R2",
        vec![vec![1, 2, 3], vec![1, 2], vec![1, 3]],
        1,
        vec![vec![vec![2]], vec![vec![3]]],
    )
}

/// `R4`: `{1,2,3},{1,2,4},{1,3,4} -> {2,3}, {2,4}, {3,4}`, free vertex 1.
pub fn r4() -> Rule {
    mk_rule(
        "R4",
        vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4]],
        1,
        vec![vec![vec![2, 3]], vec![vec![2, 4]], vec![vec![3, 4]]],
    )
}

/// `R5`: `{1,2,3},{1,4} -> {2,3,4}`, free vertex 1.
pub fn r5() -> Rule {
    mk_rule("R5", vec![vec![1, 2, 3], vec![1, 4]], 1, vec![vec![vec![2, 3, 4]]])
}

/// `R7`: `{1,2,3}x2,{1,2},{1,3} -> {2,3}x3`, free vertex 1.
pub fn r7() -> Rule {
    mk_rule(
        "R7",
        {
            let mut p = repeated(vec![1, 2, 3], 2);
            p.push(vec![1, 2]);
            p.push(vec![1, 3]);
            p
        },
        1,
        vec![repeated(vec![2, 3], 3)],
    )
}

/// `pop2(n)` for `n in 2..=4`: `{1,2}^n -> {2}^(n/2)`, free vertex 1.
pub fn pop2(n: usize) -> Rule {
    assert!(n > 1, "pop2 requires n > 1");
    mk_rule(
        "pop2",
        repeated(vec![1, 2], n),
        1,
        vec![repeated(vec![2], n / 2)],
    )
}

/// `pop3(n)` for `n in 2..=8`: `{1,2,3}^n -> {2,3}^(n/2)`, free vertex 1.
pub fn pop3(n: usize) -> Rule {
    assert!(n > 1, "pop3 requires n > 1");
    mk_rule(
        "pop3",
        repeated(vec![1, 2, 3], n),
        1,
        vec![repeated(vec![2, 3], n / 2)],
    )
}

/// The fixed-order rule library applied by `make_tree`: `EDGE_SMOOTH`, `HEDGE_SMOOTH`,
/// `R1`, `R2`, `R4`, `R5`, `R7`, then the parameterized `pop2`/`pop3` families.
pub fn known_rules() -> Vec<Rule> {
    let mut rules = vec![edge_smooth(), hedge_smooth(), r1(), r2(), r4(), r5(), r7()];
    rules.extend((2..=4).map(pop2));
    rules.extend((2..=8).map(pop3));
    rules
}

fn subtract_multiset(base: &mut Multiset, sub: &Multiset) {
    for (h, m) in sub {
        if let Some(entry) = base.get_mut(h) {
            *entry = entry.saturating_sub(*m);
            if *entry == 0 {
                base.remove(h);
            }
        }
    }
}

fn add_multiset(base: &mut Multiset, add: &Multiset) {
    for (h, m) in add {
        *base.entry(h.clone()).or_insert(0) += m;
    }
}

/// `apply_rule(G, rule)`: `[G]` unchanged if no witness preserving the free vertex's
/// degree is found; else one rewritten graph per child of the first such witness.
pub fn apply_rule(g: &MhGraph, rule: &Rule) -> Vec<MhGraph> {
    let (is_subgraph, morphs) = subgraph_search(&rule.pattern, g, true);
    if !is_subgraph {
        return vec![g.clone()];
    }

    for morph in &morphs {
        let Some(mapped_free) = morph.as_injective_vertex_map().as_vertex_map().get(rule.free) else {
            continue;
        };
        if g.degree(mapped_free) != rule.pattern.degree(rule.free) {
            continue;
        }

        let ivm = morph.as_injective_vertex_map();
        let mapped_parent = graph_image(ivm, &rule.pattern);
        let rewritten: Vec<MhGraph> = rule
            .children
            .iter()
            .filter_map(|child| {
                let mapped_child = graph_image(ivm, child);
                let mut map = g.as_multiset().clone();
                subtract_multiset(&mut map, &mapped_parent);
                add_multiset(&mut map, &mapped_child);
                MhGraph::try_from_multiset_allow_empty(map)
            })
            .collect();

        if !rewritten.is_empty() {
            return rewritten;
        }
    }
    vec![g.clone()]
}

/// A node in the reduction tree built by `make_tree`: its own graph, plus one child per
/// rewritten graph from the first matching rule (in the fixed order of `known_rules`).
#[derive(Debug, Clone)]
pub struct ReductionTree {
    /// The graph at this node.
    pub graph: MhGraph,
    /// Children produced by the first matching rule; empty at a normal form (a leaf).
    pub children: Vec<ReductionTree>,
}

impl ReductionTree {
    /// The graphs at every leaf of this tree (the normal forms reached by rewriting).
    pub fn leaves(&self) -> Vec<&MhGraph> {
        if self.children.is_empty() {
            vec![&self.graph]
        } else {
            self.children.iter().flat_map(|c| c.leaves()).collect()
        }
    }
}

/// `make_tree(G)`: build the reduction tree, always descending into the first matching
/// rule's children (fixed rule order, first match wins).
pub fn make_tree(g: &MhGraph, rules: &[Rule]) -> ReductionTree {
    for rule in rules {
        let reduction = apply_rule(g, rule);
        if reduction.len() != 1 || &reduction[0] != g {
            let children = reduction.iter().map(|child| make_tree(child, rules)).collect();
            return ReductionTree { graph: g.clone(), children };
        }
    }
    ReductionTree { graph: g.clone(), children: Vec::new() }
}

#[cfg(test)]
#[path = "unit_tests/rewrite.rs"]
mod tests;
