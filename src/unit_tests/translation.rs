use super::*;
use crate::graph::hedge::hedge;
use crate::graph::mhgraph::mhgraph;
use crate::graph::vertex::vertex;

#[test]
fn lits_from_vertex_are_a_complementary_pair() {
    let (pos, neg) = lits_from_vertex(vertex(3).unwrap());
    assert_eq!(pos, Literal::Int(3));
    assert_eq!(neg, Literal::Int(-3));
}

#[test]
fn clauses_from_hedge_count_is_2_pow_k() {
    let h = hedge(vec![1, 2]).unwrap();
    let clauses = clauses_from_hedge(&h);
    assert_eq!(clauses.len(), 4);
}

#[test]
fn cnfs_from_hedge_scenario_s8() {
    let h = hedge(vec![1, 2]).unwrap();
    let cnfs = cnfs_from_hedge(&h, 1).unwrap();
    assert_eq!(cnfs.len(), 4);
}

#[test]
fn cnfs_from_hedge_rejects_zero_multiplicity() {
    let h = hedge(vec![1, 2]).unwrap();
    assert!(cnfs_from_hedge(&h, 0).is_err());
}

#[test]
fn cnfs_from_hedge_is_empty_when_oversaturated() {
    let h = hedge(vec![1, 2]).unwrap();
    let cnfs = cnfs_from_hedge(&h, 5).unwrap();
    assert!(cnfs.is_empty());
}

#[test]
fn number_of_cnfs_matches_binomial_product() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1)]).unwrap();
    assert_eq!(number_of_cnfs(&g), 4);
}

#[test]
fn number_of_cnfs_is_zero_when_oversaturated() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 5)]).unwrap();
    assert_eq!(number_of_cnfs(&g), 0);
}

#[test]
fn cnfs_from_mhgraph_has_as_many_elements_as_number_of_cnfs() {
    let g = mhgraph(vec![(hedge(vec![1, 2]).unwrap(), 1)]).unwrap();
    let all: Vec<_> = cnfs_from_mhgraph(&g, EnumerationOptions::default())
        .unwrap()
        .collect();
    assert_eq!(all.len(), number_of_cnfs(&g) as usize);
}

#[test]
fn mhgraph_from_cnf_recovers_a_single_edge() {
    let h = hedge(vec![1, 2]).unwrap();
    let cnfs = cnfs_from_hedge(&h, 1).unwrap();
    let recovered = mhgraph_from_cnf(&cnfs[0]).unwrap();
    assert_eq!(recovered, mhgraph(vec![(h, 1)]).unwrap());
}

#[test]
fn mhgraph_from_cnf_rejects_constant_formulas() {
    let f = crate::symbolic::cnf::cnf(vec![vec![1, -1]]).unwrap();
    assert!(mhgraph_from_cnf(&f).is_err());
}

#[test]
fn randomized_enumeration_is_a_permutation_of_the_unrandomized_one() {
    let g = mhgraph(vec![(hedge(vec![1, 2, 3]).unwrap(), 1)]).unwrap();
    let plain: std::collections::BTreeSet<_> =
        cnfs_from_mhgraph(&g, EnumerationOptions::default()).unwrap().collect();
    let shuffled: std::collections::BTreeSet<_> = cnfs_from_mhgraph(
        &g,
        EnumerationOptions { randomize: true, seed: Some(7) },
    )
    .unwrap()
    .collect();
    assert_eq!(plain, shuffled);
}

#[test]
fn randomized_enumeration_with_same_seed_is_deterministic() {
    let g = mhgraph(vec![(hedge(vec![1, 2, 3, 4]).unwrap(), 2)]).unwrap();
    let opts = EnumerationOptions { randomize: true, seed: Some(42) };
    let first: Vec<_> = cnfs_from_mhgraph(&g, opts).unwrap().collect();
    let second: Vec<_> = cnfs_from_mhgraph(&g, opts).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn round_trip_property_cnf_is_among_its_own_mhgraphs_cnfs() {
    let h = hedge(vec![1, 2, 3]).unwrap();
    for c in cnfs_from_hedge(&h, 1).unwrap() {
        let g = mhgraph_from_cnf(&c).unwrap();
        let all: Vec<_> = cnfs_from_mhgraph(&g, EnumerationOptions::default())
            .unwrap()
            .collect();
        assert!(all.contains(&c));
    }
}
