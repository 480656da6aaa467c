//! Command implementations for cs.
//!
//! Routes the parsed CLI to listing, usage, or running an environment.

mod list;
mod run;

use crate::cli::Cli;
use crate::config::resolve_config_path;
use crate::error::Result;
use crate::exit_codes;
use std::path::PathBuf;

use list::{cmd_list, cmd_usage};
use run::cmd_run;

/// Dispatch the parsed command line.
///
/// Returns the exit code for runs that end without an error, such as the
/// usage screen shown when no environment is named.
pub fn dispatch(cli: Cli) -> Result<i32> {
    if cli.list {
        cmd_list(&config_path(cli.config)?, cli.json)?;
        return Ok(exit_codes::SUCCESS);
    }

    match cli.environment {
        None => Ok(cmd_usage(config_path(cli.config))),
        Some(name) => {
            cmd_run(&config_path(cli.config)?, &name, cli.dry_run)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => resolve_config_path(),
    }
}
