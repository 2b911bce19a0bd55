//! Degree detection error types.  
//! 
//! [`DegreeError`]
//! ├ no `x^D` pattern in the input  
//! ├ `x^` truncated at the end of the input  
//! └ invalid variable symbol in [`DegreeCfg`](super::config::DegreeCfg)  


use thiserror::Error; 


#[derive(Debug, Error, PartialEq, Eq)]
pub enum DegreeError {
    #[error("no exponent found: expected at least one `x^D` term")]
    NoExponentFound,

    #[error("string index out of range: exponent expected at byte {index}, input length is {len}")]
    StringIndexOutOfRange { index: usize, len: usize },

    #[error("invalid variable {got:?}: must be an ASCII letter")]
    InvalidVariable { got: char },
}
