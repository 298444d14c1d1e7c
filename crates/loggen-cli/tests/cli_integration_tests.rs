//! CLI integration tests
//!
//! These tests run the `loggen` binary and inspect its console output and
//! the log files it leaves behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn loggen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loggen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn log_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("log"))
        .collect()
}

#[test]
fn test_emit_writes_auto_named_file() {
    let temp_dir = TempDir::new().unwrap();
    let folder = temp_dir.path().to_str().unwrap();

    let output = loggen(
        temp_dir.path(),
        &["emit", "--folder", folder, "--no-print", "hello", "world"],
    );

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());

    let files = log_files(temp_dir.path());
    assert_eq!(files.len(), 1, "Expected one log file");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(PathBuf::from(stderr.trim()), files[0]);

    let contents = fs::read_to_string(&files[0]).unwrap();
    assert!(
        contents.trim_end().ends_with(" - INFO (emit.rs) : hello world"),
        "unexpected contents: {}",
        contents
    );
}

#[test]
fn test_emit_console_only_with_template() {
    let temp_dir = TempDir::new().unwrap();

    let output = loggen(
        temp_dir.path(),
        &[
            "emit",
            "--no-file",
            "--format",
            "{level}:{name}:{message}",
            "--name",
            "cli",
            "--at",
            "WARNING",
            "careful",
        ],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "WARNING:cli:careful\n");
    assert!(log_files(temp_dir.path()).is_empty());
}

#[test]
fn test_emit_below_level_is_dropped() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("quiet.log");

    let output = loggen(
        temp_dir.path(),
        &[
            "emit",
            "--filename",
            log_path.to_str().unwrap(),
            "--level",
            "ERROR",
            "--at",
            "WARNING",
            "ignored",
        ],
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
}

#[test]
fn test_emit_missing_folder_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = loggen(
        temp_dir.path(),
        &["emit", "--folder", "does-not-exist", "message"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: log folder does not exist"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_emit_rejects_unknown_level() {
    let temp_dir = TempDir::new().unwrap();

    let output = loggen(temp_dir.path(), &["emit", "--at", "LOUD", "message"]);

    assert!(!output.status.success());
    assert!(log_files(temp_dir.path()).is_empty());
}

#[test]
fn test_config_file_with_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("loggen.toml");
    fs::write(
        &config_path,
        r#"
name = "from-config"
format = "{name} {level} {message}"
file = false
level = "WARNING"
"#,
    )
    .unwrap();

    let output = loggen(
        temp_dir.path(),
        &[
            "emit",
            "--config",
            config_path.to_str().unwrap(),
            "--name",
            "from-flag",
            "--at",
            "ERROR",
            "failed",
        ],
    );

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "from-flag ERROR failed\n"
    );
}

#[test]
fn test_check_reports_valid_settings() {
    let temp_dir = TempDir::new().unwrap();

    let output = loggen(temp_dir.path(), &["check", "--no-file", "--level", "INFO"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("file:   disabled"));
    assert!(stdout.contains("level:  INFO"));
    assert!(stdout.contains("Settings are valid"));
    assert!(log_files(temp_dir.path()).is_empty());
}

#[test]
fn test_check_rejects_bad_template() {
    let temp_dir = TempDir::new().unwrap();

    let output = loggen(temp_dir.path(), &["check", "--format", "{asctime}"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid format template"), "stderr: {}", stderr);
}
