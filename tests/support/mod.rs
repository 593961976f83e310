//! Test support utilities for envault integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir. Child
/// processes use `.current_dir()`, so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory (also holds fake tools and their logs)
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with a `.env` at the project root.
    pub fn with_env(content: &str) -> Self {
        let t = Self::new();
        t.write(".env", content);
        t
    }

    /// Absolute path inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a project file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().expect("no parent")).expect("failed to create dirs");
        fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Read a project file.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    /// Whether a project file exists.
    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Run `git` in `dir` and require success.
    pub fn git(&self, dir: &Path, args: &[&str]) {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("HOME", self.home.path())
            .output()
            .expect("failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Initialize a git repository at `rel` with an optional origin remote.
    pub fn git_init(&self, rel: &str, remote: Option<&str>) {
        let dir = self.path(rel);
        fs::create_dir_all(&dir).expect("failed to create repo dir");
        self.git(&dir, &["init", "--quiet"]);
        if let Some(url) = remote {
            self.git(&dir, &["remote", "add", "origin", url]);
        }
    }
}
