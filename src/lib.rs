//! Degree detection for polynomial equations and discriminant-based
//! quadratic solving.
//!
//! ┌ [`degree`]    : scans `x^D` patterns and reports the polynomial degree
//! ├ [`quadratic`] : discriminant, root classification and real roots
//! └ [`cli`]       : argument handling and output for the `computor` binary

pub mod degree;
pub mod quadratic;
pub mod cli;
