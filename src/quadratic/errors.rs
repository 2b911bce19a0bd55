//! Quadratic solver error types.  
//! 
//! [`QuadraticError`]
//! ├ degenerate equation (`a == 0`)  
//! ├ non-finite input coefficients  
//! ├ non-finite discriminant (overflow in `b² - 4ac`)  
//! └ invalid configuration tolerances  


use thiserror::Error; 


/// Quadratic solver runtime and configuration errors.  
/// 
/// ┌ Leading coefficient is zero, root formula undefined  
/// ├ Coefficient is NaN or inf  
/// ├ Discriminant overflowed to a non-finite value  
/// └ Invalid `zero_disc` tolerance  
#[derive(Debug, Error)]
pub enum QuadraticError {
    #[error("leading coefficient `a` is zero: not a quadratic equation")]
    ZeroLeadingCoefficient,

    #[error("coefficient `{name}` must be finite. got {got}")]
    NonFiniteCoefficient { name: &'static str, got: f64 },

    #[error("discriminant non-finite for a={a}, b={b}, c={c}: got {disc}")]
    NonFiniteDiscriminant { a: f64, b: f64, c: f64, disc: f64 },

    #[error("invalid `zero_disc` tolerance: must be finite and >= 0. got {got}")]
    InvalidZeroTolerance { got: f64 },
}
