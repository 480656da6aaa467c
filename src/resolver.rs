//! Environment lookup by name.

use crate::config::{Config, Environment};
use crate::error::{CsError, Result};

/// Find an environment by exact, case-sensitive name.
///
/// A miss carries the defined names so the caller can show them.
pub fn lookup<'a>(config: &'a Config, name: &str) -> Result<&'a Environment> {
    config
        .environments
        .get(name)
        .ok_or_else(|| CsError::EnvironmentNotFound {
            name: name.to_string(),
            available: list_names(config),
        })
}

/// All defined environment names, in sorted order.
pub fn list_names(config: &Config) -> Vec<String> {
    config.environments.keys().cloned().collect()
}

/// Render the "Available environments" block shown on usage and lookup misses.
pub fn format_available(names: &[String]) -> String {
    let mut out = String::from("Available environments:\n");
    if names.is_empty() {
        out.push_str("  (none defined)\n");
    }
    for name in names {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out
}
