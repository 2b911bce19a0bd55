//! Configuration for the quadratic solver.  
//! 
//! [`QuadraticCfg`]  
//! └ `zero_disc` : |Δ| at or below which the discriminant counts as zero  
//!
//! The default is `0.0`, i.e. only an exact zero discriminant yields a 
//! repeated root.


use super::errors::QuadraticError;


/// Quadratic solver configuration.  
/// 
/// # Defaults 
/// 
/// └ DEFAULT_ZERO_DISC - exact comparison against zero 
///
/// # Validation: 
/// └ Performed in [`solve`](super::solve::solve) via [`QuadraticCfg::validate()`] 
///    └ `zero_disc` >= 0 and finite 
#[derive(Debug, Copy, Clone)]
pub struct QuadraticCfg {
    zero_disc: Option<f64>,
}
impl QuadraticCfg { 
    pub const DEFAULT_ZERO_DISC: f64 = 0.0; 

    #[must_use]
    pub fn new() -> Self { Self::default() } 

    pub fn with_zero_disc(mut self, v: f64) -> Self { self.zero_disc = Some(v); self }

    #[inline] #[must_use] pub fn zero_disc(&self) -> f64 { self.zero_disc.unwrap_or(Self::DEFAULT_ZERO_DISC) }

    pub fn validate(&self) -> Result<QuadraticCfg, QuadraticError> {
        let zero_disc = self.zero_disc();
        if !zero_disc.is_finite() || zero_disc < 0.0 {
            return Err(QuadraticError::InvalidZeroTolerance { got: zero_disc });
        }
        Ok(Self { zero_disc: Some(zero_disc) })
    }
}

impl Default for QuadraticCfg { 
    fn default() -> Self { 
        Self { zero_disc: Some(Self::DEFAULT_ZERO_DISC) }
    }
}
