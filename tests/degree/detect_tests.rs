//! tests for degree detection 
use computor::degree::config::DegreeCfg;
use computor::degree::detect::{detect, max_degree};
use computor::degree::errors::DegreeError;

type TestResult = Result<(), DegreeError>;

#[test]
fn max_of_sequence() -> TestResult {
    assert_eq!(max_degree(&[2, 3])?, 3);
    assert_eq!(max_degree(&[3, 0, 1])?, 3);
    assert_eq!(max_degree(&[0])?, 0);
    Ok(())
}

#[test]
fn empty_sequence_is_an_error() -> TestResult {
    assert_eq!(max_degree(&[]).unwrap_err(), DegreeError::NoExponentFound);
    Ok(())
}

#[test]
fn detects_quadratic() -> TestResult {
    let report = detect("5 * x^0 + 4 * x^1 - 9.3 * x^2 = 1 * x^0", DegreeCfg::new())?;
    assert_eq!(report.degree, 2);
    assert!(report.is_quadratic());
    Ok(())
}

#[test]
fn detects_cubic() -> TestResult {
    let report = detect("x^2 + x^3", DegreeCfg::new())?;
    assert_eq!(report.exponents, vec![2, 3]);
    assert_eq!(report.degree, 3);
    assert!(!report.is_quadratic());
    Ok(())
}

#[test]
fn no_exponent_found() -> TestResult {
    let err = detect("no exponents here", DegreeCfg::new()).unwrap_err();
    assert_eq!(err, DegreeError::NoExponentFound);
    Ok(())
}

#[test]
fn truncated_input_errors_before_max() -> TestResult {
    let err = detect("x^", DegreeCfg::new()).unwrap_err();
    assert!(matches!(err, DegreeError::StringIndexOutOfRange { .. }));
    Ok(())
}
