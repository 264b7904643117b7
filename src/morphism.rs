//! Injective vertex relabelings between MHGraphs, and subgraph/isomorphism search built on them.
//!
//! Predicate-like constructors here return `Option`/absence markers rather than raising,
//! because they are exercised at enumeration scale (tens of thousands of candidates per
//! outer call).

use crate::combinatorics::{Combinations, CombinationsWithReplacement, Permutations};
use crate::graph::hedge::HEdge;
use crate::graph::mhgraph::{MhGraph, Multiset};
use crate::graph::vertex::Vertex;
use std::collections::{BTreeMap, BTreeSet};

/// A candidate vertex relabeling from `dom(G1)` onto a subset of `V(G2)`.
///
/// Valid iff `dom(translation) = V(G1)` and `img(translation) ⊆ V(G2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexMap {
    translation: BTreeMap<Vertex, Vertex>,
}

impl VertexMap {
    /// Construct a `VertexMap`, returning `None` if the domain/image restrictions fail.
    pub fn new(
        dom: &BTreeSet<Vertex>,
        codom: &BTreeSet<Vertex>,
        translation: BTreeMap<Vertex, Vertex>,
    ) -> Option<Self> {
        let actual_dom: BTreeSet<Vertex> = translation.keys().copied().collect();
        if &actual_dom != dom {
            return None;
        }
        if !translation.values().all(|v| codom.contains(v)) {
            return None;
        }
        Some(Self { translation })
    }

    /// The underlying vertex-to-vertex map.
    pub fn translation(&self) -> &BTreeMap<Vertex, Vertex> {
        &self.translation
    }

    /// Look up where `v` is sent.
    pub fn get(&self, v: Vertex) -> Option<Vertex> {
        self.translation.get(&v).copied()
    }
}

/// A [`VertexMap`] whose translation is injective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectiveVertexMap(VertexMap);

impl InjectiveVertexMap {
    /// Construct from a `VertexMap`, returning `None` if it is not injective.
    pub fn new(vm: VertexMap) -> Option<Self> {
        let values: BTreeSet<Vertex> = vm.translation.values().copied().collect();
        if values.len() != vm.translation.len() {
            return None;
        }
        Some(Self(vm))
    }

    /// View as the underlying (non-injective-checked) `VertexMap`.
    pub fn as_vertex_map(&self) -> &VertexMap {
        &self.0
    }
}

/// `graph_image(ι, G)`: apply `ι` to every vertex of every hyperedge of `G`, preserving
/// multiplicity. Injectivity guarantees no hyperedge collapses into another.
pub fn graph_image(ivm: &InjectiveVertexMap, g: &MhGraph) -> Multiset {
    let tr = ivm.as_vertex_map().translation();
    g.as_multiset()
        .iter()
        .map(|(h, &m)| {
            let mapped: BTreeSet<Vertex> = h
                .vertices()
                .iter()
                .map(|v| *tr.get(v).expect("ivm's domain covers every vertex of g"))
                .collect();
            let mapped_edge =
                HEdge::from_vertices(mapped).expect("a non-empty hyperedge maps to a non-empty hyperedge");
            (mapped_edge, m)
        })
        .collect()
}

/// An [`InjectiveVertexMap`] under which every hyperedge of `G1`'s image is a hyperedge of
/// `G2` (multiplicities ignored at this stage; see [`is_immediate_subgraph`] for that check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morphism(InjectiveVertexMap);

impl Morphism {
    /// Construct a `Morphism`, returning `None` if some image hyperedge is absent from `g2`.
    pub fn new(ivm: InjectiveVertexMap, g1: &MhGraph, g2: &MhGraph) -> Option<Self> {
        let image = graph_image(&ivm, g1);
        if image.keys().all(|h| g2.as_multiset().contains_key(h)) {
            Some(Self(ivm))
        } else {
            None
        }
    }

    /// View as the underlying injective vertex map.
    pub fn as_injective_vertex_map(&self) -> &InjectiveVertexMap {
        &self.0
    }
}

/// `generate_vertexmaps(V(G1), V(G2), injective)`: pair each permutation of `V(G1)` with
/// each size-`|V(G1)|` subset of `V(G2)` (combinations when injective, combinations with
/// replacement otherwise), keeping only the valid `VertexMap`s.
pub fn generate_vertexmaps(
    dom: Vec<Vertex>,
    codom: Vec<Vertex>,
    injective: bool,
) -> Box<dyn Iterator<Item = VertexMap>> {
    let dom_set: BTreeSet<Vertex> = dom.iter().copied().collect();
    let codom_set: BTreeSet<Vertex> = codom.iter().copied().collect();
    let k = dom.len();

    if injective {
        Box::new(Permutations::new(dom).flat_map(move |perm| {
            let dom_set = dom_set.clone();
            let codom_set = codom_set.clone();
            Combinations::new(codom.clone(), k).filter_map(move |subset| {
                let translation: BTreeMap<Vertex, Vertex> =
                    perm.iter().copied().zip(subset).collect();
                VertexMap::new(&dom_set, &codom_set, translation)
            })
        }))
    } else {
        Box::new(Permutations::new(dom).flat_map(move |perm| {
            let dom_set = dom_set.clone();
            let codom_set = codom_set.clone();
            CombinationsWithReplacement::new(codom.clone(), k).filter_map(move |subset| {
                let translation: BTreeMap<Vertex, Vertex> =
                    perm.iter().copied().zip(subset).collect();
                VertexMap::new(&dom_set, &codom_set, translation)
            })
        }))
    }
}

/// Is `image` an immediate submultiset of `g2`, i.e. does every hyperedge in `image` occur
/// in `g2` with at least its `image` multiplicity?
pub fn is_immediate_subgraph(image: &Multiset, g2: &MhGraph) -> bool {
    image
        .iter()
        .all(|(h, &m)| g2.as_multiset().get(h).copied().unwrap_or(0) >= m)
}

fn heuristic_gate_passes(g1: &MhGraph, g2: &MhGraph) -> bool {
    let vertices_ok = g1.vertices().len() <= g2.vertices().len();
    let edges_ok = g1.len() <= g2.len();
    let count_of_size = |g: &MhGraph, size: usize| {
        g.as_multiset().keys().filter(|h| h.len() == size).count()
    };
    let size2_ok = count_of_size(g1, 2) <= count_of_size(g2, 2);
    let size3_ok = count_of_size(g1, 3) <= count_of_size(g2, 3);
    let total_mult = |g: &MhGraph| g.as_multiset().values().sum::<u32>();
    let mult_ok = total_mult(g1) <= total_mult(g2);
    vertices_ok && edges_ok && size2_ok && size3_ok && mult_ok
}

/// `subgraph_search(G1, G2, return_all)`: does an injective structural embedding of `G1`
/// into `G2` exist (with multiplicities respected)? Returns every witness when `return_all`.
pub fn subgraph_search(g1: &MhGraph, g2: &MhGraph, return_all: bool) -> (bool, Vec<Morphism>) {
    if !heuristic_gate_passes(g1, g2) {
        log::trace!("subgraph_search: heuristic gate rejected, no enumeration");
        return (false, Vec::new());
    }
    let dom: Vec<Vertex> = g1.vertices().into_iter().collect();
    let codom: Vec<Vertex> = g2.vertices().into_iter().collect();

    let mut found = Vec::new();
    for vm in generate_vertexmaps(dom, codom, true) {
        let Some(ivm) = InjectiveVertexMap::new(vm) else {
            continue;
        };
        let Some(morph) = Morphism::new(ivm, g1, g2) else {
            continue;
        };
        let image = graph_image(morph.as_injective_vertex_map(), g1);
        if is_immediate_subgraph(&image, g2) {
            found.push(morph);
            if !return_all {
                break;
            }
        }
    }
    (!found.is_empty(), found)
}

/// `isomorphism_search(G1, G2, return_all)`: mutual subgraph embedding (`G2` into `G1`
/// exists, and `G1` into `G2` with witnesses per `return_all`).
pub fn isomorphism_search(g1: &MhGraph, g2: &MhGraph, return_all: bool) -> (bool, Vec<Morphism>) {
    if !subgraph_search(g2, g1, false).0 {
        return (false, Vec::new());
    }
    subgraph_search(g1, g2, return_all)
}

/// `unique_upto_isom(seq)`: keep the first representative of each isomorphism class.
pub fn unique_upto_isom(seq: impl IntoIterator<Item = MhGraph>) -> Vec<MhGraph> {
    let mut representatives: Vec<MhGraph> = Vec::new();
    for g in seq {
        let already_seen = representatives
            .iter()
            .any(|rep| isomorphism_search(rep, &g, false).0);
        if !already_seen {
            representatives.push(g);
        }
    }
    representatives
}

#[cfg(test)]
#[path = "unit_tests/morphism.rs"]
mod tests;
