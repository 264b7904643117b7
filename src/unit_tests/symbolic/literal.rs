use super::*;

#[test]
fn rejects_zero() {
    assert!(lit(0i32).is_err());
}

#[test]
fn wraps_nonzero_int() {
    assert_eq!(lit(5i32).unwrap(), Literal::Int(5));
    assert_eq!(lit(-5i32).unwrap(), Literal::Int(-5));
}

#[test]
fn wraps_bool_constant() {
    assert_eq!(lit(Bool::True).unwrap(), Literal::Bool(Bool::True));
}

#[test]
fn lit_is_idempotent() {
    let l = lit(5i32).unwrap();
    assert_eq!(lit(l).unwrap(), l);
}

#[test]
fn neg_is_an_involution() {
    let l = lit(5i32).unwrap();
    assert_eq!(neg(neg(l)), l);
    let b = lit(Bool::False).unwrap();
    assert_eq!(neg(neg(b)), b);
}

#[test]
fn neg_flips_sign() {
    assert_eq!(neg(Literal::Int(5)), Literal::Int(-5));
    assert_eq!(neg(Literal::Bool(Bool::True)), Literal::Bool(Bool::False));
}

#[test]
fn absolute_value_drops_sign() {
    assert_eq!(absolute_value(Literal::Int(-5)), Literal::Int(5));
    assert_eq!(absolute_value(Literal::Int(5)), Literal::Int(5));
}

#[test]
fn absolute_value_of_bool_is_true() {
    assert_eq!(
        absolute_value(Literal::Bool(Bool::False)),
        Literal::Bool(Bool::True)
    );
}

#[test]
fn bool_constants_order_before_ints() {
    assert!(Literal::Bool(Bool::True) < Literal::Int(-1000));
    assert!(Literal::Bool(Bool::False) < Literal::Bool(Bool::True));
}
