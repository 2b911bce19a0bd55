//! Binary-level errors and their process exit codes.
//!
//! | error                    | code |
//! |--------------------------|------|
//! | `NoExponentFound`        | 3    |
//! | `StringIndexOutOfRange`  | 4    |
//! | `ZeroLeadingCoefficient` | 5    |
//! | anything else            | 1    |
//!
//! Code 2 is left to clap for usage errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::degree::errors::DegreeError;
use crate::quadratic::errors::QuadraticError;


#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Degree(#[from] DegreeError),

    #[error(transparent)]
    Quadratic(#[from] QuadraticError),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: std::io::Error },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse { path: PathBuf, source: toml::de::Error },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Degree(DegreeError::NoExponentFound)              => 3,
            CliError::Degree(DegreeError::StringIndexOutOfRange { .. }) => 4,
            CliError::Quadratic(QuadraticError::ZeroLeadingCoefficient) => 5,
            _ => 1,
        }
    }
}
