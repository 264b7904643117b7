//! The external SAT oracle adapter: a single `cnf_sat` predicate, backed by a real
//! Minisat-class CDCL solver (`varisat`) with a brute-force fallback for small formulas
//! and tests, plus the memoized `mhgraph_sat` built on top of it.

pub mod brute_force;
pub mod dimacs;
pub mod varisat_backend;

use crate::graph::mhgraph::MhGraph;
use crate::symbolic::cnf::Cnf;
use crate::translation::{cnfs_from_mhgraph, number_of_cnfs, EnumerationOptions};
use std::collections::HashMap;
use std::sync::Mutex;

/// A decision procedure for reduced CNFs. Implementations need not handle tautological
/// constants; `cnf_sat_with` reduces and short-circuits before ever calling one.
pub trait SatOracle {
    /// Decide satisfiability of `formula`, which is guaranteed non-constant and already
    /// tautologically reduced.
    fn decide(&self, formula: &Cnf) -> bool;
}

/// The external DPLL/CDCL oracle, backed by `varisat`.
pub struct VarisatOracle;

impl SatOracle for VarisatOracle {
    fn decide(&self, formula: &Cnf) -> bool {
        varisat_backend::solve(formula)
    }
}

/// The brute-force oracle: enumerate every assignment. Useful for small formulas and for
/// cross-checking the external oracle in tests.
pub struct BruteForceOracle;

impl SatOracle for BruteForceOracle {
    fn decide(&self, formula: &Cnf) -> bool {
        brute_force::brute_force_sat(formula)
    }
}

/// `cnf_sat(C)` against a chosen oracle: tautologically reduce first, short-circuit on a
/// constant result, else delegate to `oracle`.
pub fn cnf_sat_with(oracle: &dyn SatOracle, formula: &Cnf) -> bool {
    let reduced = formula.tautologically_reduce();
    if reduced.is_tautologically_true() {
        return true;
    }
    if reduced.is_tautologically_false() {
        return false;
    }
    oracle.decide(&reduced)
}

/// `cnf_sat(C)`, using the external `varisat` oracle.
pub fn cnf_sat(formula: &Cnf) -> bool {
    cnf_sat_with(&VarisatOracle, formula)
}

/// Unbounded memoization for `mhgraph_sat`, per the caching policy: `simplify_at_loops`
/// and `mhgraph_pysat_satcheck` are memoized without eviction. An owned, explicitly passed
/// context rather than a process-wide global, per the Design Notes on avoiding hidden state.
#[derive(Default)]
pub struct SatCache {
    memo: Mutex<HashMap<MhGraph, bool>>,
}

impl SatCache {
    /// A fresh, empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

/// `mhgraph_sat(G) = number_of_cnfs(G) > 0 ∧ ∀ C ∈ cnfs_from_mhgraph(G): cnf_sat(C)`.
pub fn mhgraph_sat_with(oracle: &dyn SatOracle, g: &MhGraph) -> bool {
    if number_of_cnfs(g) == 0 {
        log::trace!("mhgraph_sat: over-saturated, no supported CNFs, UNSAT");
        return false;
    }
    cnfs_from_mhgraph(g, EnumerationOptions::default())
        .expect("number_of_cnfs(g) > 0 implies enumeration succeeds")
        .all(|c| cnf_sat_with(oracle, &c))
}

/// `mhgraph_sat(G)`, memoized in `cache`.
pub fn mhgraph_sat_cached(cache: &SatCache, oracle: &dyn SatOracle, g: &MhGraph) -> bool {
    if let Some(&cached) = cache.memo.lock().expect("sat cache mutex poisoned").get(g) {
        log::trace!("mhgraph_sat_cached: cache hit");
        return cached;
    }
    let result = mhgraph_sat_with(oracle, g);
    cache
        .memo
        .lock()
        .expect("sat cache mutex poisoned")
        .insert(g.clone(), result);
    result
}

/// `mhgraph_sat(G)`, using the external `varisat` oracle, uncached.
pub fn mhgraph_sat(g: &MhGraph) -> bool {
    mhgraph_sat_with(&VarisatOracle, g)
}

#[cfg(test)]
#[path = "../unit_tests/oracle/mod_tests.rs"]
mod tests;
