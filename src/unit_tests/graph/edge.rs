use super::*;

#[test]
fn rejects_empty() {
    let empty: Vec<u32> = vec![];
    assert!(edge(empty).is_err());
}

#[test]
fn accepts_loop_and_pair() {
    assert!(edge(vec![1]).is_ok());
    assert!(edge(vec![1, 2]).is_ok());
}

#[test]
fn rejects_more_than_two_vertices() {
    assert!(edge(vec![1, 2, 3]).is_err());
}
