//! End-to-end tests for the `cs` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cs(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cs"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute cs")
}

#[test]
fn test_list_json_on_first_run_keeps_stdout_machine_readable() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("fresh").join("config.yaml");

    let output = cs(
        temp_dir.path(),
        &["--config", config.to_str().unwrap(), "--list", "--json"],
    );

    assert!(output.status.success());
    assert!(config.exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(names, vec!["glm"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Created default configuration file"));
}

#[cfg(unix)]
#[test]
fn test_list_json_with_empty_home() {
    let temp_dir = TempDir::new().unwrap();

    let output = cs(temp_dir.path(), &["--list", "--json"]);

    assert!(output.status.success());
    assert!(temp_dir.path().join(".cs").join("config.yaml").exists());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(names, vec!["glm"]);
}

#[test]
fn test_no_arguments_prints_usage_and_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.yaml");

    let output = cs(temp_dir.path(), &["--config", config.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: cs <environment>"));
    assert!(stdout.contains("Available environments:\n  glm\n"));
}

#[test]
fn test_unknown_environment_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.yaml");
    std::fs::write(&config, "environments:\n  dev:\n    target: \"true\"\n").unwrap();

    let output = cs(
        temp_dir.path(),
        &["--config", config.to_str().unwrap(), "staging"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Environment 'staging' not found."));
    assert!(stdout.contains("  dev\n"));
}

#[test]
fn test_parse_error_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.yaml");
    std::fs::write(&config, "environments: [broken\n").unwrap();

    let output = cs(temp_dir.path(), &["--config", config.to_str().unwrap(), "--list"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse config file"));
    assert!(stderr.contains("broken.yaml"));
}
