//! Test fixtures and constants.

use super::Test;

/// The example from the migration walkthrough.
pub const SIMPLE_ENV: &str = "DB_PASSWORD=secret123\nAPP_NAME=MyApp\n";

/// A .env with comments, quoting and lines that must pass through untouched.
pub const MIXED_ENV: &str = r#"# Database
DB_HOST=localhost
DB_PASSWORD="p@ss word"

# Third parties
STRIPE_SECRET_KEY='sk_test_123'
export LEGACY=1
GITHUB_TOKEN=ghp_abc
PORT=8080
"#;

/// A .env with nothing secret in it.
pub const PLAIN_ENV: &str = "APP_NAME=MyApp\nPORT=8080\n";

/// GitHub remote used for automatic naming tests.
pub const REMOTE_HTTPS: &str = "https://github.com/testuser/myproject.git";

impl Test {
    /// Install a fake `op` in the home dir.
    ///
    /// Every invocation appends its arguments to `op.log`. `whoami` fails
    /// unless `signed_in`; `item get` succeeds only if `item_exists`.
    #[cfg(unix)]
    pub fn fake_op(&self, signed_in: bool, item_exists: bool) {
        use std::os::unix::fs::PermissionsExt;

        let log = self.home.path().join("op.log");
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> '{log}'
case "$1" in
  --version) echo 2.30.0 ;;
  whoami) {whoami} ;;
  item)
    case "$2" in
      get) {get} ;;
      edit|create) exit 0 ;;
    esac ;;
esac
"#,
            log = log.display(),
            whoami = if signed_in {
                "echo user@example.com"
            } else {
                "echo '[ERROR] account is not signed in' >&2; exit 1"
            },
            get = if item_exists { "exit 0" } else { "exit 1" },
        );

        let path = self.home.path().join("op");
        std::fs::write(&path, script).expect("failed to write fake op");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake op");
    }

    /// Lines logged by the fake `op`.
    pub fn op_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.home.path().join("op.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
