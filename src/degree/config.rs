//! Configuration for degree detection.  
//! 
//! [`DegreeCfg`]  
//! └ `variable` : symbol preceding `^` in each term, `x` by default  


use super::errors::DegreeError;


/// Degree detector configuration.  
///
/// # Validation: 
/// └ Performed in [`extract_exponents`](super::exponents::extract_exponents) 
///    └ `variable` is an ASCII letter 
#[derive(Debug, Copy, Clone)]
pub struct DegreeCfg {
    variable: Option<char>,
}
impl DegreeCfg { 
    pub const DEFAULT_VARIABLE: char = 'x'; 

    #[must_use]
    pub fn new() -> Self { Self::default() } 

    pub fn with_variable(mut self, v: char) -> Self { self.variable = Some(v); self }

    #[inline] #[must_use] pub fn variable(&self) -> char { self.variable.unwrap_or(Self::DEFAULT_VARIABLE) }

    pub fn validate(&self) -> Result<DegreeCfg, DegreeError> {
        let variable = self.variable();
        if !variable.is_ascii_alphabetic() {
            return Err(DegreeError::InvalidVariable { got: variable });
        }
        Ok(Self { variable: Some(variable) })
    }
}

impl Default for DegreeCfg { 
    fn default() -> Self { 
        Self { variable: Some(Self::DEFAULT_VARIABLE) }
    }
}
