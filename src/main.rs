use clap::Parser;
use std::process::ExitCode;

use computor::cli::{self, ComputorCli};

fn main() -> ExitCode {
    let args = ComputorCli::parse();
    if let Err(err) = cli::init_tracing(args.verbose) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut stdout = std::io::stdout().lock();
    match cli::run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "run failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
