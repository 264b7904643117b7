use super::*;

#[test]
fn rejects_zero() {
    assert!(vertex(0).is_err());
}

#[test]
fn idempotent() {
    let v = vertex(4).unwrap();
    assert_eq!(vertex(v.get()).unwrap(), v);
}

#[test]
fn orders_by_integer_value() {
    assert!(vertex(1).unwrap() < vertex(2).unwrap());
}
