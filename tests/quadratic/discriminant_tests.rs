//! tests for the quadratic discriminant 
use computor::quadratic::discriminant::discriminant;
use computor::quadratic::report::Nature;

#[test]
fn perfect_square_is_zero() {
    let disc = discriminant(1.0, 2.0, 1.0);
    assert_eq!(disc, 0.0);
    assert_eq!(Nature::from_discriminant(disc, 0.0), Nature::OneRealRoot);
}

#[test]
fn two_roots_is_positive() {
    let disc = discriminant(2.0, 3.0, 1.0);
    assert_eq!(disc, 1.0);
    assert_eq!(Nature::from_discriminant(disc, 0.0), Nature::TwoRealRoots);
}

#[test]
fn no_real_roots_stays_signed() {
    let disc = discriminant(1.0, 0.0, 1.0);
    assert_eq!(disc, -4.0);
    assert_eq!(Nature::from_discriminant(disc, 0.0), Nature::NoRealRoots);
}

#[test]
fn defined_for_zero_a() {
    assert_eq!(discriminant(0.0, 3.0, 7.0), 9.0);
}

#[test]
fn nature_messages() {
    assert_eq!(Nature::OneRealRoot.to_string(),  "The equation has one real root");
    assert_eq!(Nature::TwoRealRoots.to_string(), "The equation has two real roots");
    assert_eq!(Nature::NoRealRoots.to_string(),  "The equation has no real roots");
}
