//! Tests for error handling and global flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("migrate").and(predicate::str::contains("scan")));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "envault");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "_envault");
}

#[test]
fn test_malformed_config() {
    let t = Test::with_env(SIMPLE_ENV);
    let config = t.home.path().join("config.toml");
    std::fs::write(&config, "this is not valid toml { [ }").unwrap();

    let output = t
        .cmd()
        .env("ENVAULT_CONFIG", &config)
        .args(["scan"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_env(SIMPLE_ENV);

    let output = t.run(&["--verbose", "migrate", ".env", "--vault", "V", "--item", "I", "--dry-run"]);
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_output_excludes(&output, "secret123");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::with_env(SIMPLE_ENV);

    let output = t.migrate_dry_run(".env", "V", "I");
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG") && !err.contains("INFO"), "got: {err}");
}
