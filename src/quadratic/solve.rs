use tracing::debug;

use super::coefficients::Coefficients;
use super::config::QuadraticCfg;
use super::discriminant::discriminant;
use super::errors::QuadraticError;
use super::report::{Nature, QuadraticReport, Roots};


/// Maps `-0.0` to `0.0`; other values pass through.
#[inline]
fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}

/// Finds the real roots of `a·x² + b·x + c = 0` with the 
/// [quadratic formula](https://en.wikipedia.org/wiki/Quadratic_formula).
///
/// # Arguments
///
/// ┌ `coefficients` - `a`, `b`, `c`. All finite, `a != 0`. 
/// └ `cfg`          - See [`QuadraticCfg`]
///    Defaults: 
///    └ cfg.zero_disc = 0.0 
///
/// # Returns
///
/// On success, a [`QuadraticReport`] containing:
/// ├ `coefficients` : the input coefficients 
/// ├ `discriminant` : signed `b² - 4ac` 
/// ├ `nature`       : [`Nature`] of the roots 
/// └ `roots`        : 
///    ├ [`Roots::One`]  - `-b / 2a` when |Δ| <= `zero_disc` 
///    ├ [`Roots::Two`]  - `(-b ± √Δ) / 2a` when Δ > 0, `+` first 
///    └ [`Roots::None`] - when Δ < 0 
///
/// # Errors
///
/// ┌ [`QuadraticError::InvalidZeroTolerance`]  - `cfg.zero_disc` < 0 or not finite.
/// ├ [`QuadraticError::NonFiniteCoefficient`]  - any coefficient is NaN or inf.
/// ├ [`QuadraticError::ZeroLeadingCoefficient`] - `a == 0`.
/// └ [`QuadraticError::NonFiniteDiscriminant`] - `b² - 4ac` overflowed.
///
/// # Notes 
/// └ Roots equal to zero are reported as `+0.0`. 
pub fn solve(
    coefficients: Coefficients, 
    cfg: QuadraticCfg
) -> Result<QuadraticReport, QuadraticError> {

    let cfg = cfg.validate()?;
    coefficients.validate()?;

    let Coefficients { a, b, c } = coefficients;
    if a == 0.0 {
        return Err(QuadraticError::ZeroLeadingCoefficient);
    }

    let disc = discriminant(a, b, c);
    if !disc.is_finite() {
        return Err(QuadraticError::NonFiniteDiscriminant { a, b, c, disc });
    }

    let nature = Nature::from_discriminant(disc, cfg.zero_disc());
    debug!(disc, zero_disc = cfg.zero_disc(), %nature, "classified discriminant");
    let denom  = 2.0 * a;
    let roots  = match nature {
        Nature::OneRealRoot  => Roots::One(unsigned_zero(-b / denom)),
        Nature::TwoRealRoots => {
            let sqrt_disc = disc.sqrt();
            Roots::Two(
                unsigned_zero((-b + sqrt_disc) / denom),
                unsigned_zero((-b - sqrt_disc) / denom),
            )
        }
        Nature::NoRealRoots  => Roots::None,
    };

    debug!(?roots, "solved quadratic");

    Ok(QuadraticReport { coefficients, discriminant: disc, nature, roots })
}
