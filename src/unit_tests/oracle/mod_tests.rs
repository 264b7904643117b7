use super::*;
use crate::graph::hedge::hedge;
use crate::graph::mhgraph::mhgraph;
use crate::symbolic::cnf::cnf;

#[test]
fn cnf_sat_with_brute_force_agrees_with_varisat() {
    let f = cnf(vec![vec![1, 2], vec![-1, 3]]).unwrap();
    assert_eq!(
        cnf_sat_with(&BruteForceOracle, &f),
        cnf_sat_with(&VarisatOracle, &f)
    );
}

#[test]
fn mhgraph_sat_triangle_scenario_s1() {
    let triangle = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
    ])
    .unwrap();
    assert!(mhgraph_sat_with(&BruteForceOracle, &triangle));
}

#[test]
fn mhgraph_sat_oversaturated_edge_scenario_s2() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 4)]).unwrap();
    assert!(!mhgraph_sat_with(&BruteForceOracle, &g));
}

#[test]
fn mhgraph_sat_cache_agrees_with_uncached() {
    let triangle = mhgraph(vec![
        (hedge(vec![1, 2]).unwrap(), 1),
        (hedge(vec![1, 3]).unwrap(), 1),
        (hedge(vec![2, 3]).unwrap(), 1),
    ])
    .unwrap();
    let cache = SatCache::new();
    let cached = mhgraph_sat_cached(&cache, &BruteForceOracle, &triangle);
    let uncached = mhgraph_sat_with(&BruteForceOracle, &triangle);
    assert_eq!(cached, uncached);
    // second lookup must hit the cache and return the same answer.
    assert_eq!(mhgraph_sat_cached(&cache, &BruteForceOracle, &triangle), cached);
}
