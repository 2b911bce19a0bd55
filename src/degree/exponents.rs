//! Exponent extraction from `x^D` patterns.

use tracing::trace;

use super::config::DegreeCfg;
use super::errors::DegreeError;


/// Extracts the single-digit exponent of every `x^D` in `text`.
///
/// Scans left to right. A match is the variable symbol, then `^`, then an 
/// ASCII digit; the digit is pushed onto the result. 
///
/// # Errors
///
/// ┌ [`DegreeError::InvalidVariable`]       - `cfg.variable` is not an ASCII letter.
/// └ [`DegreeError::StringIndexOutOfRange`] - `x^` ends the input, so there is no 
///                                            character to read as the exponent.
///
/// # Notes 
/// ├ Only the first digit of a multi-digit exponent is read (`x^12` gives `1`). 
/// ├ Implicit exponents (`x`, constants) are not recognised. 
/// └ `x^` followed by a non-digit is skipped. 
///
/// # Examples
/// ```
/// use computor::degree::config::DegreeCfg;
/// use computor::degree::exponents::extract_exponents;
///
/// let exps = extract_exponents("x^2 + x^3", DegreeCfg::new()).unwrap();
/// assert_eq!(exps, vec![2, 3]);
/// ```
pub fn extract_exponents(text: &str, cfg: DegreeCfg) -> Result<Vec<u32>, DegreeError> {
    let cfg = cfg.validate()?;

    // variable is ASCII, so it never matches inside a multi-byte char
    let variable = cfg.variable() as u8;
    let bytes    = text.as_bytes();
    let len      = bytes.len();

    let mut exponents = Vec::new();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != variable || bytes.get(i + 1) != Some(&b'^') {
            continue;
        }

        let index = i + 2;
        let Some(&digit) = bytes.get(index) else {
            return Err(DegreeError::StringIndexOutOfRange { index, len });
        };

        if digit.is_ascii_digit() {
            let exponent = u32::from(digit - b'0');
            trace!(index, exponent, "matched exponent");
            exponents.push(exponent);
        }
    }

    Ok(exponents)
}
