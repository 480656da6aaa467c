//! Launching an environment's target command.
//!
//! The target is split on whitespace (no shell, no quoting), configured
//! variables are layered over the inherited environment, and the child runs
//! with the parent's stdin/stdout/stderr until it exits.

use crate::config::Environment;
use crate::error::{CsError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::process::{Command, Stdio};

/// A validated, tokenized target ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    /// Executable name or path (first token of the target).
    pub program: String,
    /// Remaining tokens, passed verbatim.
    pub args: Vec<String>,
    /// Variables to add or override in the child's environment.
    pub overlay: BTreeMap<String, String>,
}

/// Validate and tokenize an environment's target.
///
/// # Errors
///
/// * `EmptyTarget` - the target is the empty string
/// * `InvalidTarget` - the target has no tokens after splitting (whitespace only)
pub fn prepare(env: &Environment) -> Result<Launch> {
    if env.target.is_empty() {
        return Err(CsError::EmptyTarget);
    }

    let mut tokens = env.target.split_whitespace().map(str::to_string);
    let program = tokens
        .next()
        .ok_or_else(|| CsError::InvalidTarget(env.target.clone()))?;

    Ok(Launch {
        program,
        args: tokens.collect(),
        overlay: env
            .variables
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    })
}

/// Run an environment's target and wait for it to finish.
pub fn run(env: &Environment) -> Result<()> {
    prepare(env)?.run()
}

impl Launch {
    /// Build the process command with inherited stdio and the overlay applied.
    ///
    /// With an empty overlay the child's environment is left untouched.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if !self.overlay.is_empty() {
            command.envs(&self.overlay);
        }

        command
    }

    /// Spawn the command and block until it exits.
    ///
    /// # Errors
    ///
    /// * `SubprocessLaunch` - the program could not be started
    /// * `ChildExited` - the program exited unsuccessfully or was killed
    pub fn run(&self) -> Result<()> {
        tracing::debug!(
            program = %self.program,
            args = ?self.args,
            overlay = self.overlay.len(),
            "launching target"
        );

        let status = self
            .command()
            .status()
            .map_err(|source| CsError::SubprocessLaunch {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CsError::ChildExited {
                program: self.program.clone(),
                code: status.code(),
            })
        }
    }
}

impl fmt::Display for Launch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
