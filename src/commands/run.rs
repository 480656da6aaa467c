//! Running a named environment: `cs <environment>`.

use crate::config::Config;
use crate::error::Result;
use crate::launcher::{self, Launch};
use crate::resolver::lookup;
use std::path::Path;

/// Load the config, resolve `name`, and run its target.
///
/// With `dry_run` the target is validated and described instead of launched.
pub fn cmd_run(config_path: &Path, name: &str, dry_run: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let environment = lookup(&config, name)?;

    tracing::info!(environment = name, command = %environment.target, "selected environment");

    if dry_run {
        let launch = launcher::prepare(environment)?;
        print!("{}", render_dry_run(name, &launch));
        return Ok(());
    }

    launcher::run(environment)
}

/// Describe what `cs <name>` would execute.
pub fn render_dry_run(name: &str, launch: &Launch) -> String {
    let mut out = String::new();
    out.push_str(&format!("Environment: {}\n", name));
    out.push_str(&format!("Command:     {}\n", launch));

    if launch.overlay.is_empty() {
        out.push_str("Variables:   (inherited only)\n");
    } else {
        out.push_str("Variables:\n");
        for (key, value) in &launch.overlay {
            out.push_str(&format!("  {}={}\n", key, value));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsError;
    use std::fs;
    use tempfile::TempDir;

    fn config_file(temp_dir: &TempDir, yaml: &str) -> std::path::PathBuf {
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_unknown_environment_lists_available() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_file(
            &temp_dir,
            "environments:\n  dev:\n    target: \"true\"\n  prod:\n    target: \"true\"\n",
        );

        let err = cmd_run(&path, "staging", false).unwrap_err();
        match err {
            CsError::EnvironmentNotFound { name, available } => {
                assert_eq!(name, "staging");
                assert_eq!(available, vec!["dev", "prod"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dry_run_does_not_launch() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_file(
            &temp_dir,
            "environments:\n  ghost:\n    target: \"cs-test-no-such-program-9b2e\"\n",
        );

        // The program does not exist, so a real launch would fail.
        cmd_run(&path, "ghost", true).unwrap();
    }

    #[test]
    fn test_dry_run_still_validates_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_file(&temp_dir, "environments:\n  blank:\n    target: \"  \"\n");

        let result = cmd_run(&path, "blank", true);
        assert!(matches!(result, Err(CsError::InvalidTarget(_))));
    }

    #[test]
    fn test_render_dry_run() {
        let launch = Launch {
            program: "node".to_string(),
            args: vec!["server.js".to_string()],
            overlay: [("PORT".to_string(), "3000".to_string())].into(),
        };

        assert_eq!(
            render_dry_run("web", &launch),
            "Environment: web\nCommand:     node server.js\nVariables:\n  PORT=3000\n"
        );
    }

    #[test]
    fn test_render_dry_run_without_overlay() {
        let launch = Launch {
            program: "pwd".to_string(),
            args: vec![],
            overlay: Default::default(),
        };

        assert!(render_dry_run("here", &launch).contains("(inherited only)"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_success_and_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = config_file(
            &temp_dir,
            "environments:\n  ok:\n    target: \"true\"\n  bad:\n    target: \"false\"\n",
        );

        cmd_run(&path, "ok", false).unwrap();
        let err = cmd_run(&path, "bad", false).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
