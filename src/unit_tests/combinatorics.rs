use super::*;

#[test]
fn binomial_small_values() {
    assert_eq!(binomial(4, 2), 6);
    assert_eq!(binomial(5, 0), 1);
    assert_eq!(binomial(5, 5), 1);
    assert_eq!(binomial(2, 3), 0);
}

#[test]
fn combinations_count_matches_binomial() {
    let items = vec![1, 2, 3, 4];
    let combos: Vec<_> = Combinations::new(items, 2).collect();
    assert_eq!(combos.len(), binomial(4, 2) as usize);
}

#[test]
fn combinations_are_sorted_subsets() {
    let items = vec!['a', 'b', 'c'];
    let combos: Vec<_> = Combinations::new(items, 2).collect();
    assert!(combos.contains(&vec!['a', 'b']));
    assert!(combos.contains(&vec!['a', 'c']));
    assert!(combos.contains(&vec!['b', 'c']));
    assert_eq!(combos.len(), 3);
}

#[test]
fn combinations_of_k_greater_than_n_is_empty() {
    let items = vec![1, 2];
    let combos: Vec<_> = Combinations::new(items, 3).collect();
    assert!(combos.is_empty());
}

#[test]
fn combinations_with_replacement_allows_repeats() {
    let items = vec![1, 2];
    let combos: Vec<_> = CombinationsWithReplacement::new(items, 2).collect();
    assert_eq!(combos.len(), 3);
    assert!(combos.contains(&vec![1, 1]));
    assert!(combos.contains(&vec![1, 2]));
    assert!(combos.contains(&vec![2, 2]));
}

#[test]
fn permutations_count_matches_factorial() {
    let items = vec![1, 2, 3];
    let perms: Vec<_> = Permutations::new(items).collect();
    assert_eq!(perms.len(), 6);
}

#[test]
fn permutations_are_distinct() {
    let items = vec![1, 2, 3];
    let mut perms: Vec<_> = Permutations::new(items).collect();
    perms.sort();
    perms.dedup();
    assert_eq!(perms.len(), 6);
}

#[test]
fn single_item_permutes_to_itself() {
    let perms: Vec<_> = Permutations::new(vec![42]).collect();
    assert_eq!(perms, vec![vec![42]]);
}
