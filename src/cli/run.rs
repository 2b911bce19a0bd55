use std::io::Write;
use tracing::{debug, info};

use super::args::ComputorCli;
use super::config::Settings;
use super::errors::CliError;
use crate::degree::detect::detect;
use crate::quadratic::report::Roots;
use crate::quadratic::solve::solve;


/// Runs one invocation, writing user-facing lines to `out`.
///
/// # Behaviour
/// ┌ not exactly one equation : "Wrong number of arguments", `Ok`
/// ├ degree > 2               : unsolvable message
/// ├ degree == 2              : reduced form, discriminant, nature, roots 
/// │                            of the configured coefficients
/// └ degree < 2               : degree line only
///
/// # Errors
/// ├ [`CliError::Degree`]    - no `x^D` term, or a truncated `x^`
/// ├ [`CliError::Quadratic`] - invalid coefficients (e.g. `a == 0`)
/// ├ [`CliError::ConfigRead`] / [`CliError::ConfigParse`]
/// └ [`CliError::Output`]    - writing to `out` failed
pub fn run<W: Write>(cli: &ComputorCli, out: &mut W) -> Result<(), CliError> {
    let [equation] = cli.equation.as_slice() else {
        debug!(got = cli.equation.len(), "wrong argument count");
        writeln!(out, "Wrong number of arguments")?;
        return Ok(());
    };
    let equation = equation.to_string_lossy();

    let settings = Settings::resolve(cli)?;
    debug!(?settings, "resolved settings");

    let report = detect(&equation, settings.degree)?;
    writeln!(out, "Polynomial degree: {}", report.degree)?;

    if report.degree > 2 {
        writeln!(out, "The polynomial degree is strictly greater than 2, I can't solve.")?;
        return Ok(());
    }
    if !report.is_quadratic() {
        return Ok(());
    }

    writeln!(out, "Reduced form: {equation}")?;

    // coefficients are never read from the equation text
    info!(coefficients = ?settings.coefficients, "solving with configured coefficients");
    let solution = solve(settings.coefficients, settings.quadratic)?;

    writeln!(out, "The discriminant is: {}", solution.discriminant)?;
    writeln!(out, "{}", solution.nature)?;
    match solution.roots {
        Roots::One(root)         => writeln!(out, "The root is: {root}")?,
        Roots::Two(root1, root2) => writeln!(out, "The roots are: {root1} and {root2}")?,
        Roots::None              => {}
    }

    Ok(())
}
