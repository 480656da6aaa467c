//! Listing environments: `cs --list` and the bare `cs` usage screen.

use crate::config::Config;
use crate::error::Result;
use crate::exit_codes;
use crate::resolver::{format_available, list_names};
use std::path::{Path, PathBuf};

/// Print the defined environment names, one per line or as a JSON array.
pub fn cmd_list(config_path: &Path, json: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let names = list_names(&config);

    if json {
        println!("{}", serde_json::Value::from(names));
    } else {
        for name in &names {
            println!("{}", name);
        }
    }

    Ok(())
}

/// Print usage plus the available environments.
///
/// A config that cannot be located or loaded is reported inline rather than
/// aborting, since the usage text is still useful. Always returns the
/// user-error exit code.
pub fn cmd_usage(config_path: Result<PathBuf>) -> i32 {
    println!("Usage: cs <environment>");
    print!("{}", usage_listing(config_path));
    exit_codes::USER_ERROR
}

fn usage_listing(config_path: Result<PathBuf>) -> String {
    match config_path.and_then(Config::load) {
        Ok(config) => format_available(&list_names(&config)),
        Err(err) => format!(
            "Available environments:\n  (Unable to load config: {})\n",
            err
        ),
    }
}
