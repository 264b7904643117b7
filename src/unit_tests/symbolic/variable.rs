use super::*;

#[test]
fn rejects_zero() {
    assert!(variable(0).is_err());
}

#[test]
fn accepts_positive() {
    assert_eq!(variable(7).unwrap().get(), 7);
}

#[test]
fn idempotent() {
    let v = variable(3).unwrap();
    assert_eq!(variable(v.get()).unwrap(), v);
}

#[test]
fn ordering_matches_integer_ordering() {
    let a = variable(1).unwrap();
    let b = variable(2).unwrap();
    assert!(a < b);
}
