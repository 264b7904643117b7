use super::*;
use crate::symbolic::clause::clause;
use crate::symbolic::cnf::cnf;
use crate::symbolic::literal::Literal;

#[test]
fn clause_or_clause_unions_literals() {
    let a = clause(vec![1, 2]).unwrap();
    let b = clause(vec![2, 3]).unwrap();
    let r = clause_or_clause(&a, &b);
    assert_eq!(r.len(), 3);
}

#[test]
fn clause_or_clause_collapses_complementary_pair() {
    let a = clause(vec![1]).unwrap();
    let b = clause(vec![-1]).unwrap();
    let r = clause_or_clause(&a, &b);
    assert!(r.contains(&Literal::Bool(crate::symbolic::literal::Bool::True)));
}

#[test]
fn clause_not_is_a_conjunction_of_negated_literals() {
    let c = clause(vec![1, 2]).unwrap();
    let negated = clause_not(&c);
    assert_eq!(negated.len(), 2);
    for clause in negated.clauses() {
        assert_eq!(clause.len(), 1);
    }
}

#[test]
fn cnf_and_cnf_is_clause_set_union() {
    let a = cnf(vec![vec![1, 2]]).unwrap();
    let b = cnf(vec![vec![3, 4]]).unwrap();
    let r = cnf_and_cnf(&a, &b);
    assert_eq!(r.len(), 2);
}

#[test]
fn cnf_or_cnf_distributes_over_clauses() {
    let a = cnf(vec![vec![1], vec![2]]).unwrap();
    let b = cnf(vec![vec![3], vec![4]]).unwrap();
    let r = cnf_or_cnf(&a, &b);
    assert_eq!(r.len(), 4);
}

#[test]
fn double_negation_of_a_cnf_is_itself() {
    let f = cnf(vec![vec![1, 2], vec![3]]).unwrap();
    let once = cnf_not(&f);
    let twice = cnf_not(&once);
    assert_eq!(twice, f.tautologically_reduce());
}

#[test]
fn graph_or_coerces_mhgraphs_to_cnf_sets() {
    let g1 = crate::graph::mhgraph::mhgraph(vec![(crate::graph::hedge::hedge(vec![1]).unwrap(), 1)]).unwrap();
    let g2 = crate::graph::mhgraph::mhgraph(vec![(crate::graph::hedge::hedge(vec![2]).unwrap(), 1)]).unwrap();
    let result = graph_or(GraphOrCnfs::Graph(g1), GraphOrCnfs::Graph(g2));
    assert!(!result.is_empty());
}

#[test]
fn graph_and_of_two_mhgraphs_is_their_union() {
    let h1 = crate::graph::hedge::hedge(vec![1, 2]).unwrap();
    let h2 = crate::graph::hedge::hedge(vec![2, 3]).unwrap();
    let g1 = crate::graph::mhgraph::mhgraph(vec![(h1.clone(), 1)]).unwrap();
    let g2 = crate::graph::mhgraph::mhgraph(vec![(h2.clone(), 1)]).unwrap();
    match graph_and(GraphOrCnfs::Graph(g1), GraphOrCnfs::Graph(g2)) {
        GraphOrCnfs::Graph(g) => assert_eq!(g.len(), 2),
        GraphOrCnfs::Cnfs(_) => panic!("expected a graph result for two mhgraph operands"),
    }
}
