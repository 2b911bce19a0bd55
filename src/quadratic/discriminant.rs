//! Discriminant of `a·x² + b·x + c`.

use tracing::debug;


/// Computes the discriminant `b² - 4ac`.
///
/// The value is returned signed for every case; the sign alone 
/// decides the root count (see 
/// [`Nature::from_discriminant`](super::report::Nature::from_discriminant)).
///
/// # Examples
/// ```
/// use computor::quadratic::discriminant::discriminant;
///
/// assert_eq!(discriminant(1.0, 2.0, 1.0), 0.0);
/// assert_eq!(discriminant(2.0, 3.0, 1.0), 1.0);
/// assert_eq!(discriminant(1.0, 0.0, 1.0), -4.0);
/// ```
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    let disc = b * b - 4.0 * a * c;
    debug!(a, b, c, disc, "discriminant");
    disc
}
