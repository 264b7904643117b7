//! Translation between the symbolic core (C1) and the graph core (C2): deriving the CNFs
//! "supported" by a hyperedge or an MHGraph, and recovering an MHGraph from a CNF.

use crate::combinatorics::{binomial, Combinations};
use crate::error::{CoreError, Result};
use crate::graph::hedge::HEdge;
use crate::graph::mhgraph::MhGraph;
use crate::graph::vertex::Vertex;
use crate::symbolic::clause::{clause, Clause};
use crate::symbolic::cnf::Cnf;
use crate::symbolic::literal::Literal;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::HashMap;

/// `lits_from_vertex(v)`: the positive and negative literal for a vertex.
pub fn lits_from_vertex(v: Vertex) -> (Literal, Literal) {
    let n = v.get() as i32;
    (Literal::Int(n), Literal::Int(-n))
}

/// `clauses_from_hedge(h)`: the `2^|h|` clauses obtained by choosing a sign for each vertex.
pub fn clauses_from_hedge(h: &HEdge) -> Vec<Clause> {
    let vertices: Vec<Vertex> = h.vertices().iter().copied().collect();
    let k = vertices.len();
    (0u32..(1u32 << k))
        .map(|mask| {
            let lits: Vec<Literal> = vertices
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let (pos, neg) = lits_from_vertex(v);
                    if mask & (1 << i) != 0 {
                        pos
                    } else {
                        neg
                    }
                })
                .collect();
            clause(lits).expect("a hyperedge's vertex set is non-empty")
        })
        .collect()
}

/// `cnfs_from_hedge(h, m)`: the `C(2^|h|, m)` CNFs formed by choosing `m` distinct clauses
/// out of `clauses_from_hedge(h)`. Empty if `m > 2^|h|`. Fails for `m < 1`.
pub fn cnfs_from_hedge(h: &HEdge, m: usize) -> Result<Vec<Cnf>> {
    if m < 1 {
        return Err(CoreError::MultiplicityOutOfRange {
            multiplicity: m,
            max: 1usize << h.len(),
            size: h.len(),
        });
    }
    let candidates = clauses_from_hedge(h);
    if m > candidates.len() {
        return Ok(Vec::new());
    }
    Ok(Combinations::new(candidates, m)
        .map(|clauses| Cnf::new(clauses.into_iter().map(|c| c.literals().iter().copied().collect::<Vec<_>>())).expect("non-empty combination of clauses"))
        .collect())
}

/// `number_of_cnfs(G) = prod over (h, m) in G of C(2^|h|, m)` (0 if over-saturated).
pub fn number_of_cnfs(g: &MhGraph) -> u128 {
    g.as_multiset()
        .iter()
        .map(|(h, &m)| binomial(1u128 << h.len(), m as u128))
        .product()
}

/// `is_oversaturated(G)`: any hyperedge whose multiplicity exceeds `2^|h|`.
pub fn is_oversaturated(g: &MhGraph) -> bool {
    g.is_oversaturated()
}

/// Options controlling CNF enumeration. The only "configuration" surface this crate
/// carries: no external config layer, per the Design Notes on avoiding hidden global state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerationOptions {
    /// Shuffle the enumeration order. Default tests should disable this for determinism.
    pub randomize: bool,
    /// Seed for the shuffle, when `randomize` is set. `None` uses OS entropy.
    pub seed: Option<u64>,
}

/// A streaming Durstenfeld/Fisher-Yates shuffle over `0..n` that never materializes the
/// full index range: only the (at most `n`) positions actually swapped get an entry in
/// `overrides`, so a consumer that draws `k` indices pays `O(k)`, not `O(n)`.
struct LazyShuffle {
    n: usize,
    pos: usize,
    overrides: HashMap<usize, usize>,
    rng: Box<dyn RngCore>,
}

impl LazyShuffle {
    fn new(n: usize, rng: Box<dyn RngCore>) -> Self {
        Self { n, pos: 0, overrides: HashMap::new(), rng }
    }

    fn value_at(&self, i: usize) -> usize {
        self.overrides.get(&i).copied().unwrap_or(i)
    }

    fn next_index(&mut self) -> Option<usize> {
        if self.pos >= self.n {
            return None;
        }
        let j = self.rng.random_range(self.pos..self.n);
        let pos_val = self.value_at(self.pos);
        let j_val = self.value_at(j);
        self.overrides.insert(self.pos, j_val);
        self.overrides.insert(j, pos_val);
        self.pos += 1;
        Some(pos_val)
    }
}

/// `cnfs_from_mhgraph(G)`: the lazy Cartesian product, over `G`'s `(hyperedge, multiplicity)`
/// entries, of `cnfs_from_hedge(h, m)`, with the selected clause sets unioned across edges.
///
/// Pull-based per the "lazy sequences" design note: the default (non-randomized) path
/// decodes directly from `position` with no up-front allocation proportional to
/// `number_of_cnfs(G)`; the randomized path draws from a [`LazyShuffle`] that only pays
/// for indices actually drawn, so a consumer that short-circuits (`.all()`/`.any()`/first
/// match) never materializes the full combinatorial product.
pub struct CnfsFromMhgraph {
    per_edge: Vec<Vec<Cnf>>,
    total: usize,
    position: usize,
    shuffle: Option<LazyShuffle>,
}

impl CnfsFromMhgraph {
    fn new(g: &MhGraph, options: EnumerationOptions) -> Result<Self> {
        let mut per_edge = Vec::new();
        for (h, &m) in g.as_multiset() {
            per_edge.push(cnfs_from_hedge(h, m as usize)?);
        }
        let total: u128 = per_edge.iter().map(|v| v.len() as u128).product();
        let total = total.min(usize::MAX as u128) as usize;
        let shuffle = if options.randomize && total > 1 {
            let rng: Box<dyn RngCore> = match options.seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::rng()),
            };
            Some(LazyShuffle::new(total, rng))
        } else {
            None
        };
        Ok(Self {
            per_edge,
            total,
            position: 0,
            shuffle,
        })
    }

    fn decode(&self, mut index: usize) -> Cnf {
        let mut clauses = Vec::new();
        for candidates in self.per_edge.iter().rev() {
            let len = candidates.len().max(1);
            let choice = index % len;
            index /= len;
            if let Some(c) = candidates.get(choice) {
                clauses.extend(c.clauses().iter().cloned());
            }
        }
        Cnf::from_clauses(clauses.into_iter().collect())
            .expect("every edge contributes at least one clause for a non-oversaturated mhgraph")
    }
}

impl Iterator for CnfsFromMhgraph {
    type Item = Cnf;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.total {
            return None;
        }
        let index = match &mut self.shuffle {
            Some(s) => s.next_index().expect("position < total implies a draw remains"),
            None => self.position,
        };
        self.position += 1;
        Some(self.decode(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.position;
        (remaining, Some(remaining))
    }
}

/// `cnfs_from_mhgraph(G)`: construct the lazy CNF enumeration, empty if `G` is over-saturated.
pub fn cnfs_from_mhgraph(g: &MhGraph, options: EnumerationOptions) -> Result<CnfsFromMhgraph> {
    CnfsFromMhgraph::new(g, options)
}

/// `mhgraph_from_cnf(C)`: tautologically reduce `C`; fail if the result is a bare constant;
/// else derive a hyperedge per clause (the clause's variable set), with multiplicity from
/// repeated clauses translating to the same hyperedge.
pub fn mhgraph_from_cnf(formula: &Cnf) -> Result<MhGraph> {
    let reduced = formula.tautologically_reduce();
    if reduced.reduces_to_constant() {
        return Err(CoreError::ConstantCnf);
    }
    let mut edges = Vec::new();
    for c in reduced.clauses() {
        let vertices: std::collections::BTreeSet<Vertex> = c
            .literals()
            .iter()
            .filter_map(|l| l.variable_index())
            .map(|n| Vertex::new(n).expect("variable indices are positive"))
            .collect();
        edges.push(HEdge::from_vertices(vertices).expect("a non-constant clause has at least one variable"));
    }
    MhGraph::from_edges(edges)
}

#[cfg(test)]
#[path = "unit_tests/translation.rs"]
mod tests;
