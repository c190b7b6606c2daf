//! CLI smoke tests for the academic-records binary
//!
//! These run the built binary against throwaway home directories.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_academic_records(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_academic-records"))
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute academic-records")
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_academic-records"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn academic-records");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for academic-records")
}

/// Config rooted in `home` with file logging disabled.
fn write_config(home: &Path, database_url: &str) -> String {
    let config_path = home.join("config.yaml");
    let config_content = format!(
        r#"
app:
  home_dir: "{}"

database:
  url: "{database_url}"

logging:
  default:
    console_level: warn
    file: ""
"#,
        home.to_string_lossy().replace('\\', "/")
    );
    std::fs::write(&config_path, config_content).expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help_command() {
    let output = run_academic_records(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("academic-records"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("seed"), "Should contain 'seed' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let output = run_academic_records(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("academic-records 0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_academic_records(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should contain error message about invalid command"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_academic_records(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config file not found"),
        "Should mention config file issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_flag_short_form() {
    let output = run_academic_records(&["-c", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config file");
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");

    std::fs::write(&config_path, "invalid: yaml: content: [unclosed")
        .expect("Failed to write file");

    let output = run_academic_records(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config"),
        "Should mention config loading issue: {}",
        stderr
    );
}

#[test]
fn test_cli_unknown_config_key_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("unknown.yaml");

    std::fs::write(&config_path, "server:\n  port: 8080\n").expect("Failed to write file");

    let output = run_academic_records(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Unknown sections should fail");
}

#[test]
fn test_cli_check_with_sqlite_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "sqlite://database/records.db");

    let output = run_academic_records(&["--config", &config, "check"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "Check should succeed.\nSTDOUT: {stdout}\nSTDERR: {stderr}"
    );
    assert!(stdout.contains("Database connection OK"));
    assert!(stdout.contains("students: 0"));
    assert!(temp_dir.path().join("database/records.db").is_file());
}

#[test]
fn test_cli_mock_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // Unreachable Postgres; --mock must bypass it
    let config = write_config(temp_dir.path(), "postgresql://localhost:1/nonexistent");

    let output = run_academic_records(&["--config", &config, "--mock", "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
        eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
    }
    assert!(
        output.status.success(),
        "Should succeed with mock database even if PostgreSQL config is invalid"
    );
}

#[test]
fn test_cli_seed_is_repeatable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "sqlite://records.db");

    let first = run_academic_records(&["--config", &config, "seed"]);
    assert!(first.status.success(), "First seed should succeed");
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.contains("5 students"), "Unexpected output: {stdout}");
    assert!(stdout.contains("0 skipped"), "Unexpected output: {stdout}");

    let second = run_academic_records(&["--config", &config, "seed"]);
    assert!(second.status.success(), "Second seed should succeed");
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("20 skipped"), "Unexpected output: {stdout}");
}

#[test]
fn test_cli_run_exits_on_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "sqlite://records.db");

    let output = run_with_stdin(&["--config", &config, "--mock", "run"], "0\n");

    assert!(output.status.success(), "Menu should exit cleanly");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Academic Records ==="));
    assert!(stdout.contains("Goodbye"));
}

#[test]
fn test_cli_run_exits_on_closed_stdin() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "sqlite://records.db");

    // No subcommand defaults to run
    let output = run_academic_records(&["--config", &config, "--mock"]);

    assert!(output.status.success(), "EOF should end the menu");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Goodbye"));
}

#[test]
fn test_cli_print_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(temp_dir.path(), "sqlite://records.db");

    let output = run_academic_records(&["--config", &config, "-vv", "--print-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sqlite://records.db"));
    assert!(stdout.contains("console_level: trace"));
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_academic_records(&["seed", "--help"]);

    assert!(output.status.success(), "Seed subcommand help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("demo data"));

    let output = run_academic_records(&["check", "--help"]);
    assert!(output.status.success(), "Check subcommand help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("connectivity"));
}
