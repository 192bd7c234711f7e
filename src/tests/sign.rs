use alloc::vec;

use crate::node::{build::{self, ApplyOptions}, Node};

#[test]
fn test_negate() {
    assert_eq!(parse!("-x").negate(), Some(ident!(x)));
    assert_eq!(parse!("--x").negate(), Some(parse!("-x")));

    assert_eq!(
        parse!("x + 3").negate(),
        Some(build::neg(parse!("x + 3"), ApplyOptions::default())),
    );

    assert_eq!(parse!("2/3").negate(), Some(parse!("-2 / 3")));
    assert_eq!(parse!("-2/3").negate(), Some(parse!("2 / 3")));
    assert_eq!(parse!("x/3").negate(), Some(parse!("-x / 3")));

    assert_eq!(num!(3).negate(), Some(parse!("-3")));
    assert_eq!(parse!("3x").negate(), Some(parse!("-3x")));
    assert_eq!(parse!("x^2").negate(), Some(parse!("-x^2")));
}

#[test]
fn test_negate_negative_coefficient() {
    // (-3) x becomes 3 x, staying implicit
    let term = build::implicit_mul(vec![parse!("-3"), ident!(x)]);
    assert_eq!(term.negate(), Some(build::implicit_mul(vec![num!(3), ident!(x)])));

    // Position of the coefficient doesn't matter
    let term = build::mul(vec![ident!(x), parse!("-3"), ident!(y)]);
    assert_eq!(term.negate(), Some(build::mul(vec![num!(3), ident!(x), ident!(y)])));
}

#[test]
fn test_double_negation() {
    for term in [ident!(x), num!(4), parse!("3x"), parse!("x^2"), parse!("2xy"), parse!("x + 1")] {
        let negated = term.negate().unwrap();
        assert!(negated.is_neg());
        assert_eq!(negated.negate(), Some(term));
    }
}

#[test]
fn test_negate_outside_domain() {
    assert_eq!(parse!("sin(x)").negate(), None);
    assert_eq!(parse!("x = 2").negate(), None);
    assert_eq!(parse!("(x)").negate(), None);
    assert_eq!(build::div(parse!("(x)"), num!(2)).negate(), None::<Node>);
}
