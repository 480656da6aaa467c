//! CLI argument parsing for cs.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The actual flow lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// cs: run a command with a named set of environment-variable overrides.
///
/// Environments are defined in `~/.cs/config.yaml`, which is created with a
/// default entry on first run.
#[derive(Parser, Debug)]
#[command(name = "cs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the environment to run.
    pub environment: Option<String>,

    /// Use this config file instead of `~/.cs/config.yaml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the defined environments and exit.
    #[arg(short, long, conflicts_with_all = ["environment", "dry_run"])]
    pub list: bool,

    /// With `--list`, print the names as a JSON array.
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Show what would run, without launching anything.
    #[arg(long, requires = "environment")]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
