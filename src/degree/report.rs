//! Defines the [`DegreeReport`] struct returned by 
//! [`detect`](super::detect::detect). 

/// Outcome of scanning an equation.  
/// 
/// [`DegreeReport`]
/// - `exponents` : every `x^D` digit, in order of appearance  
/// - `degree`    : maximum of `exponents`  
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeReport {
    pub exponents : Vec<u32>,
    pub degree    : u32,
}

impl DegreeReport {
    pub fn is_quadratic(&self) -> bool {
        self.degree == 2
    }
}
