use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "computor",
    about = "Detect the degree of a polynomial equation and solve quadratics",
    version
)]
pub struct ComputorCli {
    /// Polynomial equation, e.g. "5 * x^0 + 4 * x^1 - 9.3 * x^2 = 1 * x^0"
    ///
    /// Exactly one is expected; any other count is reported, not rejected.
    /// May start with `-` (e.g. "-x^2 + 1 = 0"); options go before it.
    /// Non-UTF-8 bytes are replaced, not rejected.
    #[arg(value_name = "EQUATION", allow_hyphen_values = true)]
    pub equation: Vec<OsString>,

    /// Override coefficient `a` of the solved quadratic
    #[arg(short = 'a', value_name = "A", allow_hyphen_values = true)]
    pub a: Option<f64>,

    /// Override coefficient `b` of the solved quadratic
    #[arg(short = 'b', value_name = "B", allow_hyphen_values = true)]
    pub b: Option<f64>,

    /// Override coefficient `c` of the solved quadratic
    #[arg(short = 'c', value_name = "C", allow_hyphen_values = true)]
    pub c: Option<f64>,

    /// Variable symbol scanned in `x^D` terms
    #[arg(long = "variable", value_name = "CHAR")]
    pub variable: Option<char>,

    /// Path to a TOML config file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
