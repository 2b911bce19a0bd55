// common helpers 
pub mod coefficients; 
pub mod report; 
pub mod errors; 
pub mod config; 

// algorithms 
pub mod discriminant; 
pub mod solve; 
