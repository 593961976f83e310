//! Tests for `envault template`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_template_to_stdout() {
    let t = Test::with_env(SIMPLE_ENV);

    let output = t.run(&["template", ".env", "--vault", "V", "--item", "I", "-o", "-"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "DB_PASSWORD=\"op://V/I/db_password\"\nAPP_NAME=MyApp\n"
    );
    assert!(!t.exists(".env.tpl"));
    assert!(!t.exists(".gitignore"));
}

#[test]
fn test_template_default_path() {
    let t = Test::new();
    t.write("svc/.env", MIXED_ENV);

    let output = t.run(&["template", "svc/.env", "--vault", "V", "--item", "I"]);
    assert_success(&output);
    assert!(t.read("svc/.env.tpl").contains("GITHUB_TOKEN=\"op://V/I/github_token\""));
}

#[test]
fn test_template_requires_target() {
    let t = Test::with_env(SIMPLE_ENV);

    t.cmd()
        .args(["template", ".env"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--vault and --item"));
}

#[test]
fn test_template_custom_output() {
    let t = Test::with_env(SIMPLE_ENV);

    let output = t.run(&[
        "template", ".env", "--vault", "V", "--item", "I", "--output", "out.tpl",
    ]);
    assert_success(&output);
    assert!(t.read("out.tpl").starts_with("DB_PASSWORD=\"op://V/I/"));
}

#[test]
fn test_template_rejects_directory() {
    let t = Test::new();
    t.write("svc/.env", SIMPLE_ENV);

    t.cmd()
        .args(["template", "svc", "--vault", "V", "--item", "I"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("svc is a directory"))
        .stderr(predicate::str::contains("io error").not());
    assert!(!t.exists(".env.tpl"));
}
