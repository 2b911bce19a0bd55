//! Coefficients of `a·x² + b·x + c = 0`.

use super::errors::QuadraticError;


/// Coefficients `(a, b, c)` of a quadratic equation.
///
/// The degree detector never reads coefficients from the equation text, 
/// so the binary solves [`Coefficients::STUB`] unless the caller 
/// overrides it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    /// Stub coefficients solved for every degree-2 equation: `x² + 2x + 1`.
    pub const STUB: Coefficients = Coefficients { a: 1.0, b: 2.0, c: 1.0 };

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Checks every coefficient is finite.
    ///
    /// `a == 0` is not rejected here; it is a [`solve`](super::solve::solve) 
    /// error, since the discriminant is still well defined.
    pub fn validate(&self) -> Result<(), QuadraticError> {
        for (name, got) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !got.is_finite() {
                return Err(QuadraticError::NonFiniteCoefficient { name, got });
            }
        }
        Ok(())
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::STUB
    }
}
