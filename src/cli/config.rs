//! Config file and setting resolution.
//!
//! ```toml
//! [coefficients]
//! a = 2.0
//! b = 3.0
//! c = 1.0
//!
//! [degree]
//! variable = "y"
//!
//! [quadratic]
//! zero_disc = 1e-12
//! ```
//!
//! Every key is optional. Precedence: CLI flag > config file > default.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use super::args::ComputorCli;
use super::errors::CliError;
use crate::degree::config::DegreeCfg;
use crate::quadratic::coefficients::Coefficients;
use crate::quadratic::config::QuadraticCfg;


#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub coefficients : CoefficientsSection,
    pub degree       : DegreeSection,
    pub quadratic    : QuadraticSection,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoefficientsSection {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DegreeSection {
    pub variable: Option<char>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuadraticSection {
    pub zero_disc: Option<f64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: FileConfig = toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}


/// Everything a run needs after merging flags, file and defaults.
#[derive(Debug, Copy, Clone)]
pub struct Settings {
    pub coefficients : Coefficients,
    pub degree       : DegreeCfg,
    pub quadratic    : QuadraticCfg,
}

impl Settings {
    pub fn resolve(cli: &ComputorCli) -> Result<Self, CliError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None       => FileConfig::default(),
        };
        Ok(Self::merge(cli, &file))
    }

    pub fn merge(cli: &ComputorCli, file: &FileConfig) -> Self {
        let stub = Coefficients::STUB;
        let coefficients = Coefficients::new(
            cli.a.or(file.coefficients.a).unwrap_or(stub.a),
            cli.b.or(file.coefficients.b).unwrap_or(stub.b),
            cli.c.or(file.coefficients.c).unwrap_or(stub.c),
        );

        let mut degree = DegreeCfg::new();
        if let Some(v) = cli.variable.or(file.degree.variable) {
            degree = degree.with_variable(v);
        }

        let mut quadratic = QuadraticCfg::new();
        if let Some(v) = file.quadratic.zero_disc {
            quadratic = quadratic.with_zero_disc(v);
        }

        Self { coefficients, degree, quadratic }
    }
}
