//! cs: launch a command with a named set of environment-variable overrides.
//!
//! This is the main entry point for the `cs` CLI. It parses arguments,
//! dispatches to the command flow, and turns errors into exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod launcher;
pub mod logging;
pub mod resolver;

use cli::Cli;
use error::CsError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: {}", err);
    }

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Print an error for the user.
///
/// A lookup miss is guidance rather than a failure, so it goes to stdout
/// together with the names that do exist.
fn report(err: &CsError) {
    match err {
        CsError::EnvironmentNotFound { available, .. } => {
            println!("{}", err);
            print!("{}", resolver::format_available(available));
        }
        _ => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {}", err);
        }
    }
}
