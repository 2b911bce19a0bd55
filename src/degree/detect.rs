use tracing::debug;

use super::config::DegreeCfg;
use super::errors::DegreeError;
use super::exponents::extract_exponents;
use super::report::DegreeReport;


/// Returns the largest exponent in `exponents`.
///
/// # Errors
/// └ [`DegreeError::NoExponentFound`] - `exponents` is empty.
pub fn max_degree(exponents: &[u32]) -> Result<u32, DegreeError> {
    exponents
        .iter()
        .copied()
        .max()
        .ok_or(DegreeError::NoExponentFound)
}

/// Extracts the exponents of `text` and reduces them to the degree.
///
/// Errors from [`extract_exponents`] and [`max_degree`] are propagated.
pub fn detect(text: &str, cfg: DegreeCfg) -> Result<DegreeReport, DegreeError> {
    let exponents = extract_exponents(text, cfg)?;
    let degree    = max_degree(&exponents)?;
    debug!(?exponents, degree, "detected degree");
    Ok(DegreeReport { exponents, degree })
}
