//! Tests for `envault scan`.

use crate::support::*;

#[test]
fn test_scan_skips_templates() {
    let t = Test::new();
    t.write(".env", SIMPLE_ENV);
    t.write(".env.tpl", SIMPLE_ENV);
    t.write(".env.example", SIMPLE_ENV);

    let output = t.scan(&[]);
    assert_success(&output);

    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 1, "got: {out}");
    assert!(lines[0].ends_with("/.env"));
    assert!(std::path::Path::new(lines[0]).is_absolute());
}

#[test]
fn test_scan_nested_sorted() {
    let t = Test::new();
    t.write("web/.env.local", "");
    t.write("api/.env", "");
    t.write("node_modules/x/.env", "");
    t.write(".venv/.env", "");

    let output = t.scan(&["--json"]);
    assert_success(&output);

    let paths: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("api/.env"));
    assert!(paths[1].ends_with("web/.env.local"));
}

#[test]
fn test_scan_to_file() {
    let t = Test::new();
    t.write("a/.env", "");

    let output = t.scan(&[".", "--output", "found.txt"]);
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 1 path");
    assert!(t.read("found.txt").trim_end().ends_with("a/.env"));
}

#[test]
fn test_scan_not_a_directory() {
    let t = Test::with_env(SIMPLE_ENV);

    let output = t.scan(&[".env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not a directory");
}

#[test]
fn test_scan_missing_directory() {
    let t = Test::new();

    let output = t.scan(&["nope"]);
    assert_failure(&output);
}

#[test]
fn test_scan_config_excludes() {
    let t = Test::new();
    t.write("keep/.env", "");
    t.write("fixtures/.env", "");
    let config = t.home.path().join("config.toml");
    std::fs::write(&config, "exclude_dirs = [\"fixtures\"]\n").unwrap();

    let output = t
        .cmd()
        .env("ENVAULT_CONFIG", &config)
        .arg("scan")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keep/.env");
    assert_output_excludes(&output, "fixtures");
}
