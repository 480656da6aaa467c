//! Error types for the cs CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cs operations.
///
/// Every failure is propagated to `main`, which prints it and exits with
/// [`CsError::exit_code`]. Nothing is retried.
#[derive(Error, Debug)]
pub enum CsError {
    /// The user's home directory could not be determined.
    #[error("failed to determine the user home directory")]
    HomeDirUnavailable,

    /// The default configuration (or its directory) could not be written.
    #[error("failed to create default config '{}': {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing configuration file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid YAML or has the wrong shape.
    #[error("failed to parse config file{}: {source}", describe_path(path.as_deref()))]
    ConfigParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    /// No environment with the requested name is defined.
    #[error("Environment '{name}' not found.")]
    EnvironmentNotFound {
        name: String,
        available: Vec<String>,
    },

    /// The environment's target is the empty string.
    #[error("target command is empty")]
    EmptyTarget,

    /// The environment's target contains no tokens after splitting.
    #[error("invalid target command '{0}'")]
    InvalidTarget(String),

    /// The target program could not be started.
    #[error("failed to run command '{program}': {source}")]
    SubprocessLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The target program ran but did not exit successfully.
    #[error("command '{program}' {}", describe_exit(*code))]
    ChildExited { program: String, code: Option<i32> },
}

fn describe_path(path: Option<&std::path::Path>) -> String {
    match path {
        Some(path) => format!(" '{}'", path.display()),
        None => String::new(),
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl CsError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// A child that exited with a status in `1..=255` has that status passed
    /// through; everything else maps to a fixed code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CsError::ChildExited {
                code: Some(code), ..
            } if (1..=255).contains(code) => *code,
            CsError::ChildExited { .. } => exit_codes::CHILD_FAILURE,
            _ => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for cs operations.
pub type Result<T> = std::result::Result<T, CsError>;
