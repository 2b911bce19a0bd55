//! tests for `x^D` exponent extraction 
use computor::degree::config::DegreeCfg;
use computor::degree::errors::DegreeError;
use computor::degree::exponents::extract_exponents;

type TestResult = Result<(), DegreeError>;

#[test]
fn extracts_in_order() -> TestResult {
    let exps = extract_exponents("x^2 + x^3", DegreeCfg::new())?;
    assert_eq!(exps, vec![2, 3]);
    Ok(())
}

#[test]
fn full_equation() -> TestResult {
    let exps = extract_exponents("5 * x^0 + 4 * x^1 - 9.3 * x^2 = 1 * x^0", DegreeCfg::new())?;
    assert_eq!(exps, vec![0, 1, 2, 0]);
    Ok(())
}

#[test]
fn no_exponents_is_empty() -> TestResult {
    let exps = extract_exponents("no exponents here", DegreeCfg::new())?;
    assert!(exps.is_empty());
    Ok(())
}

#[test]
fn empty_input() -> TestResult {
    assert!(extract_exponents("", DegreeCfg::new())?.is_empty());
    Ok(())
}

#[test]
fn trailing_caret_is_out_of_range() -> TestResult {
    let err = extract_exponents("x^", DegreeCfg::new()).unwrap_err();
    assert_eq!(err, DegreeError::StringIndexOutOfRange { index: 2, len: 2 });
    Ok(())
}

#[test]
fn trailing_caret_after_terms() -> TestResult {
    let err = extract_exponents("x^2 + x^", DegreeCfg::new()).unwrap_err();
    assert_eq!(err, DegreeError::StringIndexOutOfRange { index: 8, len: 8 });
    Ok(())
}

#[test]
fn trailing_variable_is_fine() -> TestResult {
    assert_eq!(extract_exponents("x^2 + x", DegreeCfg::new())?, vec![2]);
    Ok(())
}

#[test]
fn multi_digit_reads_first_digit() -> TestResult {
    assert_eq!(extract_exponents("x^12", DegreeCfg::new())?, vec![1]);
    Ok(())
}

#[test]
fn non_digit_after_caret_is_skipped() -> TestResult {
    assert_eq!(extract_exponents("x^a + x^ 2 + x^4", DegreeCfg::new())?, vec![4]);
    Ok(())
}

#[test]
fn variable_is_case_sensitive() -> TestResult {
    assert!(extract_exponents("X^2", DegreeCfg::new())?.is_empty());
    Ok(())
}

#[test]
fn custom_variable() -> TestResult {
    let cfg = DegreeCfg::new().with_variable('y');
    assert_eq!(extract_exponents("y^2 + x^3", cfg)?, vec![2]);
    Ok(())
}

#[test]
fn invalid_variable() -> TestResult {
    let cfg = DegreeCfg::new().with_variable('^');
    let err = extract_exponents("x^2", cfg).unwrap_err();
    assert_eq!(err, DegreeError::InvalidVariable { got: '^' });
    Ok(())
}
