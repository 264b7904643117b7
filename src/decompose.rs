//! The decomposition engine (C7): leaf/loop simplification to a fixed point, 2-partition
//! enumeration of a vertex's link, the heuristic-independent and entangled satisfiability
//! checks of a single partition term, and the memoized top-level `decompose`.
//!
//! This is the research contribution of the crate: it decides `mhgraph_sat(G)` without
//! exhaustively enumerating every CNF `G` supports, whenever the structural shortcuts of
//! §4.7 apply.

use crate::cache::{LruCache, MemoMap};
use crate::graph::hedge::HEdge;
use crate::graph::mhgraph::{union_multiset_with, MhGraph, Multiset};
use crate::graph::vertex::Vertex;
use crate::oracle::{cnf_sat_with, SatOracle, VarisatOracle};
use crate::propositional::cnf_and_cnf;
use crate::symbolic::cnf::Cnf;
use crate::translation::{cnfs_from_mhgraph, EnumerationOptions};

/// The outcome of a simplification step: either a Boolean short-circuit (the graph's
/// satisfiability is already decided) or a strictly smaller `MhGraph` to keep working on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimplifyOutcome {
    /// Satisfiability was decided outright by simplification.
    Bool(bool),
    /// Simplification produced a (possibly unchanged) graph; recursion continues.
    Graph(MhGraph),
}

/// Options controlling `decompose`. The only in-process "configuration" surface this
/// engine carries, threaded explicitly rather than held as a process-wide global.
#[derive(Debug, Clone, Copy)]
pub struct DecomposeOptions {
    /// Restrict 2-partitions of a vertex's link to maximally hyperbolic ones
    /// (`||H1| - |H2|| <= 1`).
    pub hyperbolic_only: bool,
    /// Capacity of the `decompose` LRU cache.
    pub cache_capacity: usize,
    /// Options for materializing CNFs during the entangled check.
    pub enumeration: EnumerationOptions,
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self {
            hyperbolic_only: false,
            cache_capacity: 1024,
            enumeration: EnumerationOptions::default(),
        }
    }
}

fn total_multiplicity(m: &Multiset) -> usize {
    m.values().map(|&mult| mult as usize).sum()
}

fn is_oversaturated_multiset(m: &Multiset) -> bool {
    m.iter().any(|(h, &mult)| (mult as u64) > (1u64 << h.len()))
}

/// `simplify_at_leaves(G)`: repeatedly drop the unique incident hyperedge of any
/// degree-1 vertex, to a fixed point. `TRUE` if this empties the graph.
pub fn simplify_at_leaves(g: &MhGraph) -> SimplifyOutcome {
    let mut current = g.clone();
    loop {
        let leaf = current.vertices().into_iter().find(|&v| current.degree(v) == 1);
        let Some(v) = leaf else {
            return SimplifyOutcome::Graph(current);
        };
        let star = current.star(v);
        let (h, _) = star
            .into_iter()
            .next()
            .expect("a degree-1 vertex has exactly one incident hyperedge");
        let mut map = current.as_multiset().clone();
        map.remove(&h);
        match MhGraph::try_from_multiset_allow_empty(map) {
            None => {
                log::trace!("simplify_at_leaves: dropped last leaf edge, graph empties to TRUE");
                return SimplifyOutcome::Bool(true);
            }
            Some(next) => current = next,
        }
    }
}

/// `simplify_at_loops(G)`: one step. `FALSE` on a double loop, `G` unchanged if loop-free,
/// `TRUE` on a bare single loop, else `sphr(G,v) ∪ link(G,v)` for the looped vertex `v`.
fn simplify_at_loops_uncached(g: &MhGraph) -> SimplifyOutcome {
    let Some(v) = g.vertices().into_iter().find(|&v| g.has_loop_at(v)) else {
        return SimplifyOutcome::Graph(g.clone());
    };
    if g.loop_multiplicity(v) >= 2 {
        log::trace!("simplify_at_loops: double loop at {v:?}, UNSAT");
        return SimplifyOutcome::Bool(false);
    }
    let sphr = g.sphr(v);
    let link = g.link(v);
    if sphr.is_empty() && link.is_empty() {
        log::trace!("simplify_at_loops: bare single loop at {v:?}, SAT");
        return SimplifyOutcome::Bool(true);
    }
    let mut combined = sphr;
    for (h, m) in link {
        *combined.entry(h).or_insert(0) += m;
    }
    SimplifyOutcome::Graph(
        MhGraph::from_multiset(combined).expect("sphr/link union is non-empty: checked above"),
    )
}

/// `TwoPartitions(link)`: every unordered bipartition of a hyperedge multiset (expanded to
/// a flat sequence honoring multiplicity) into two non-empty parts.
pub struct TwoPartitions {
    items: Vec<HEdge>,
    submask: u64,
    total: u64,
}

impl TwoPartitions {
    /// Construct the iterator over a non-empty link with more than one element.
    pub fn new(link: &Multiset) -> Self {
        let mut items = Vec::new();
        for (h, &m) in link {
            for _ in 0..m {
                items.push(h.clone());
            }
        }
        let n = items.len();
        assert!(
            n > 1,
            "compute_all_two_partitions requires a link with more than one element; \
             simplify with simplify_at_leaves_and_loops first"
        );
        let total = 1u64 << (n - 1);
        Self { items, submask: 0, total }
    }
}

fn to_multiset(items: Vec<HEdge>) -> Multiset {
    let mut map = Multiset::new();
    for h in items {
        *map.entry(h).or_insert(0) += 1;
    }
    map
}

impl Iterator for TwoPartitions {
    type Item = (Multiset, Multiset);

    fn next(&mut self) -> Option<Self::Item> {
        if self.submask >= self.total - 1 {
            return None;
        }
        let submask = self.submask;
        self.submask += 1;
        let n = self.items.len();
        let mut a = vec![self.items[0].clone()];
        let mut b = Vec::new();
        for i in 1..n {
            if (submask >> (i - 1)) & 1 == 1 {
                a.push(self.items[i].clone());
            } else {
                b.push(self.items[i].clone());
            }
        }
        Some((to_multiset(a), to_multiset(b)))
    }
}

/// `compute_all_two_partitions(G, v)`: every unordered, non-empty bipartition of
/// `link(G, v)`, optionally restricted to maximally hyperbolic splits.
pub fn compute_all_two_partitions(
    link: &Multiset,
    hyperbolic_only: bool,
) -> Box<dyn Iterator<Item = (Multiset, Multiset)>> {
    let partitions = TwoPartitions::new(link);
    if hyperbolic_only {
        Box::new(partitions.filter(|(a, b)| {
            (total_multiplicity(a) as i64 - total_multiplicity(b) as i64).abs() <= 1
        }))
    } else {
        Box::new(partitions)
    }
}

/// The decomposition engine: an oracle, its options, and the two caches of §5
/// (`decompose`'s bounded LRU and `simplify_at_loops`'s unbounded memo).
pub struct DecomposeEngine<'a> {
    oracle: &'a dyn SatOracle,
    options: DecomposeOptions,
    decompose_cache: LruCache<(MhGraph, bool), bool>,
    loop_cache: MemoMap<MhGraph, SimplifyOutcome>,
}

impl<'a> DecomposeEngine<'a> {
    /// Construct an engine around the given oracle and options.
    pub fn new(oracle: &'a dyn SatOracle, options: DecomposeOptions) -> Self {
        Self {
            oracle,
            decompose_cache: LruCache::new(options.cache_capacity),
            loop_cache: MemoMap::new(),
            options,
        }
    }

    fn simplify_at_loops(&self, g: &MhGraph) -> SimplifyOutcome {
        if let Some(cached) = self.loop_cache.get(g) {
            return cached;
        }
        let result = simplify_at_loops_uncached(g);
        self.loop_cache.insert(g.clone(), result.clone());
        result
    }

    /// `simplify_at_leaves_and_loops(G)`: alternate the two simplifications to a fixed
    /// point, discriminating Bool-vs-graph at each step.
    pub fn simplify_at_leaves_and_loops(&self, g: &MhGraph) -> SimplifyOutcome {
        match simplify_at_leaves(g) {
            SimplifyOutcome::Bool(b) => SimplifyOutcome::Bool(b),
            SimplifyOutcome::Graph(after_leaves) => {
                if &after_leaves != g {
                    return self.simplify_at_leaves_and_loops(&after_leaves);
                }
                match self.simplify_at_loops(&after_leaves) {
                    SimplifyOutcome::Bool(b) => SimplifyOutcome::Bool(b),
                    SimplifyOutcome::Graph(after_loops) => {
                        if after_loops == after_leaves {
                            SimplifyOutcome::Graph(after_loops)
                        } else {
                            self.simplify_at_leaves_and_loops(&after_loops)
                        }
                    }
                }
            }
        }
    }

    fn cnf_sat(&self, formula: &Cnf) -> bool {
        cnf_sat_with(self.oracle, formula)
    }

    /// The entangled correctness check of §4.7.3 step 3, translated verbatim from the
    /// as-implemented semantics: for a fixed `xs`/`xh1` pair where `xs ∧ xh1` is UNSAT, a
    /// single unsatisfiable `xs ∧ xh2` (for *any* `xh2`, not necessarily a matching one)
    /// fails the whole check.
    fn entangled_check(&self, cnfs_sphr: &[Cnf], cnfs_h1: &[Cnf], cnfs_h2: &[Cnf]) -> bool {
        for xs in cnfs_sphr {
            for xh1 in cnfs_h1 {
                let combo1 = cnf_and_cnf(xs, xh1);
                if !self.cnf_sat(&combo1) {
                    for xh2 in cnfs_h2 {
                        let combo2 = cnf_and_cnf(xs, xh2);
                        if !self.cnf_sat(&combo2) {
                            log::debug!("entangled_check: found an unsatisfiable combo2, UNSAT");
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// `satcheck_partition`: decide whether a single entangled partition term is SAT.
    fn satcheck_partition(&self, sphr: &MhGraph, h1: &Multiset, h2: &Multiset) -> bool {
        let g1 = MhGraph::from_multiset(h1.clone()).expect("partition part is non-empty");
        let g2 = MhGraph::from_multiset(h2.clone()).expect("partition part is non-empty");
        let h1_over = g1.is_oversaturated();
        let h2_over = g2.is_oversaturated();

        if h1_over && h2_over {
            log::trace!("satcheck_partition: both partition parts over-saturated, UNSAT");
            return false;
        }
        if h1_over {
            return self.decompose(&union_multiset_with(sphr, h2));
        }
        if h2_over {
            return self.decompose(&union_multiset_with(sphr, h1));
        }

        let sphr_h1 = union_multiset_with(sphr, h1);
        let sphr_h2 = union_multiset_with(sphr, h2);
        if self.decompose(&sphr_h1) || self.decompose(&sphr_h2) {
            log::trace!("satcheck_partition: heuristic independent check concluded SAT");
            return true;
        }

        let cnfs_sphr: Vec<Cnf> = cnfs_from_mhgraph(sphr, self.options.enumeration)
            .expect("sphr is non-oversaturated here")
            .collect();
        let cnfs_h1: Vec<Cnf> = cnfs_from_mhgraph(&g1, self.options.enumeration)
            .expect("h1 is non-oversaturated here")
            .collect();
        let cnfs_h2: Vec<Cnf> = cnfs_from_mhgraph(&g2, self.options.enumeration)
            .expect("h2 is non-oversaturated here")
            .collect();
        self.entangled_check(&cnfs_sphr, &cnfs_h1, &cnfs_h2)
    }

    /// `decompose_at_vertex(G, v)`.
    fn decompose_at_vertex(&self, g: &MhGraph, v: Vertex) -> bool {
        let sphr = g.sphr(v);
        let link = g.link(v);
        let partitions = compute_all_two_partitions(&link, self.options.hyperbolic_only);

        if sphr.is_empty() {
            // mhg is a star graph around v: every hyperedge touches v.
            return partitions.into_iter().all(|(h1, h2)| {
                let g1 = MhGraph::from_multiset(h1).expect("partition part is non-empty");
                let g2 = MhGraph::from_multiset(h2).expect("partition part is non-empty");
                self.decompose(&g1) || self.decompose(&g2)
            });
        }

        let sphr_graph = MhGraph::from_multiset(sphr).expect("checked non-empty above");
        if sphr_graph.is_oversaturated() {
            log::trace!("decompose_at_vertex: sphr is over-saturated at {v:?}, UNSAT");
            return false;
        }

        partitions
            .into_iter()
            .all(|(h1, h2)| self.satcheck_partition(&sphr_graph, &h1, &h2))
    }

    /// `decompose(G)`: simplify to a fixed point, pick the max-degree vertex, decompose.
    /// Memoized on `(G, hyperbolic_only)` with an LRU of the configured capacity.
    pub fn decompose(&self, g: &MhGraph) -> bool {
        let key = (g.clone(), self.options.hyperbolic_only);
        if let Some(cached) = self.decompose_cache.get(&key) {
            log::trace!("decompose: cache hit");
            return cached;
        }
        let result = match self.simplify_at_leaves_and_loops(g) {
            SimplifyOutcome::Bool(b) => b,
            SimplifyOutcome::Graph(simplified) => {
                debug_assert!(
                    simplified.as_multiset().keys().all(|h| h.len() > 1),
                    "simplify_at_leaves_and_loops left a loop behind"
                );
                debug_assert!(
                    simplified.vertices().iter().all(|&v| simplified.degree(v) > 1),
                    "simplify_at_leaves_and_loops left a leaf behind"
                );
                let v = simplified.pick_max_degree_vertex();
                self.decompose_at_vertex(&simplified, v)
            }
        };
        self.decompose_cache.insert(key, result);
        result
    }
}

/// `decompose(G)`, using the external `varisat` oracle and default options.
pub fn decompose(g: &MhGraph) -> bool {
    let engine = DecomposeEngine::new(&VarisatOracle, DecomposeOptions::default());
    engine.decompose(g)
}

/// `decompose(G)`, using a caller-chosen oracle and options.
pub fn decompose_with(oracle: &dyn SatOracle, options: DecomposeOptions, g: &MhGraph) -> bool {
    let engine = DecomposeEngine::new(oracle, options);
    engine.decompose(g)
}

#[cfg(test)]
#[path = "unit_tests/decompose.rs"]
mod tests;
