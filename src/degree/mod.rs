// common helpers 
pub mod report; 
pub mod errors; 
pub mod config; 

// scanning 
pub mod exponents; 
pub mod detect; 
