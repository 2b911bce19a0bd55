//! Defines the [`QuadraticReport`] struct returned by 
//! [`solve`](super::solve::solve). 

use super::coefficients::Coefficients;


/// Classification of a quadratic by the sign of its discriminant.
/// - [`Nature::OneRealRoot`]  : Δ = 0, one repeated root 
/// - [`Nature::TwoRealRoots`] : Δ > 0, two distinct real roots 
/// - [`Nature::NoRealRoots`]  : Δ < 0, complex roots (not reported) 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nature { 
    OneRealRoot, 
    TwoRealRoots, 
    NoRealRoots, 
}
impl Nature { 
    /// Classifies `disc`, treating `|disc| <= zero_disc` as zero.
    pub fn from_discriminant(disc: f64, zero_disc: f64) -> Self { 
        if disc.abs() <= zero_disc { 
            Nature::OneRealRoot
        } else if disc > 0.0 { 
            Nature::TwoRealRoots
        } else { 
            Nature::NoRealRoots
        }
    }
}
impl std::fmt::Display for Nature { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        let msg = match self { 
            Nature::OneRealRoot  => "The equation has one real root", 
            Nature::TwoRealRoots => "The equation has two real roots", 
            Nature::NoRealRoots  => "The equation has no real roots", 
        };
        f.write_str(msg)
    }
}


/// Real roots produced by a solve. 
/// - [`Roots::Two`] holds `(-b + √Δ) / 2a` first, then `(-b - √Δ) / 2a` 
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots { 
    None, 
    One(f64), 
    Two(f64, f64), 
}


/// Final report returned by [`solve`](super::solve::solve).  
/// 
/// [`QuadraticReport`]
/// - `coefficients` : the solved equation  
/// - `discriminant` : signed `b² - 4ac`  
/// - `nature`       : root classification ([`Nature`])  
/// - `roots`        : real roots ([`Roots`])  
#[derive(Debug, Copy, Clone, PartialEq)] 
pub struct QuadraticReport {
    pub coefficients : Coefficients, 
    pub discriminant : f64, 
    pub nature       : Nature, 
    pub roots        : Roots, 
}
