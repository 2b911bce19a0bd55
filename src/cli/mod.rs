//! Command-line front end for the `computor` binary.
//!
//! ┌ [`args`]   : clap definition of [`ComputorCli`]
//! ├ [`config`] : TOML config file and setting resolution
//! ├ [`errors`] : [`CliError`] and its exit codes
//! └ [`run`]    : drives the degree detector and the quadratic solver

pub mod args;
pub mod config;
pub mod errors;
pub mod run;

pub use args::ComputorCli;
pub use errors::CliError;
pub use run::run;

use tracing_subscriber::EnvFilter;

/// Installs the stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `verbose`; otherwise 0 → `warn`, 1 → `debug`, 
/// 2+ → `trace`.
///
/// # Errors
/// └ a global subscriber is already installed
pub fn init_tracing(verbose: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
