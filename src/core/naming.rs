//! Vault and item naming.
//!
//! Automatic naming derives `gh-projects / owner__repo__pattern` from the
//! nearest git repository and its GitHub remote. Manual naming uses the
//! names given on the command line and never touches git.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::constants::{
    AUTO_VAULT, ENV_FILE, GITHUB_HOST, PATH_SEPARATOR_TOKEN, REPO_MARKER, ROOT_PATTERN,
};
use crate::core::domain::Naming;
use crate::core::process;
use crate::error::{NamingError, Result, ValidationError};

static HTTPS_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/([^/\s]+)/([^/\s]+?)(?:\.git)?$")
        .expect("invalid https url regex")
});

static SSH_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s/]+@github\.com:([^/\s]+)/([^/\s]+?)(?:\.git)?$")
        .expect("invalid ssh url regex")
});

/// How a migration picks its vault and item.
pub trait NamingStrategy {
    /// Naming for the .env file at `env_file`.
    fn resolve(&self, env_file: &Path) -> Result<Naming>;
}

/// Fixed names from the command line.
#[derive(Debug, Clone)]
pub struct ManualNaming {
    naming: Naming,
}

impl ManualNaming {
    pub fn new(vault: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            naming: Naming::new(vault, item),
        }
    }
}

impl NamingStrategy for ManualNaming {
    fn resolve(&self, _env_file: &Path) -> Result<Naming> {
        Ok(self.naming.clone())
    }
}

/// Names derived from the enclosing git repository.
#[derive(Debug, Clone)]
pub struct AutoNaming {
    git_bin: String,
    remote: String,
    timeout: Duration,
}

impl AutoNaming {
    pub fn new(git_bin: impl Into<String>, remote: impl Into<String>, timeout: Duration) -> Self {
        Self {
            git_bin: git_bin.into(),
            remote: remote.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.git_bin, &config.remote, config.timeout())
    }
}

impl NamingStrategy for AutoNaming {
    fn resolve(&self, env_file: &Path) -> Result<Naming> {
        let path = env_file
            .canonicalize()
            .map_err(|_| ValidationError::FileNotFound(env_file.to_path_buf()))?;

        let root = find_repo_root(&path).ok_or_else(|| {
            NamingError::NoRepository(path.parent().unwrap_or(&path).to_path_buf())
        })?;
        debug!(root = %root.display(), "found repository root");

        let url = remote_url(&self.git_bin, &root, &self.remote, self.timeout).ok_or_else(
            || NamingError::NoRemote {
                root: root.clone(),
                remote: self.remote.clone(),
            },
        )?;

        if !url.contains(GITHUB_HOST) {
            return Err(NamingError::UnsupportedHost(url).into());
        }

        let (owner, project) = parse_github_url(&url)?;
        let pattern = path_pattern(&path, &root)?;
        let item = [owner.as_str(), project.as_str(), pattern.as_str()].join(PATH_SEPARATOR_TOKEN);

        info!(vault = AUTO_VAULT, item = %item, "resolved naming");
        Ok(Naming::new(AUTO_VAULT, item))
    }
}

/// Nearest ancestor of `start` (inclusive) containing `.git`.
///
/// A file path starts the walk at its parent directory. `.git` may be a
/// directory or a submodule's gitdir file; the innermost one wins.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let start = absolute(start);
    let mut dir = if start.is_dir() {
        start.as_path()
    } else {
        start.parent()?
    };

    loop {
        if dir.join(REPO_MARKER).exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// URL of `remote` in the repository at `repo_root`.
///
/// Any failure (no such remote, git missing, timeout) yields `None`.
pub fn remote_url(git_bin: &str, repo_root: &Path, remote: &str, timeout: Duration) -> Option<String> {
    let root = repo_root.to_string_lossy();
    let key = format!("remote.{}.url", remote);

    match process::run(git_bin, &["-C", &*root, "config", "--get", key.as_str()], timeout) {
        Ok(out) if out.success => {
            let url = out.stdout.trim();
            (!url.is_empty()).then(|| url.to_string())
        }
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "could not read remote url");
            None
        }
    }
}

/// Split a GitHub remote URL into `(owner, repo)`.
///
/// Accepts `https://github.com/owner/repo[.git]` and
/// `user@github.com:owner/repo[.git]`.
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let url = url.trim();
    let caps = HTTPS_URL
        .captures(url)
        .or_else(|| SSH_URL.captures(url))
        .ok_or_else(|| NamingError::InvalidUrl(url.to_string()))?;

    Ok((caps[1].to_string(), caps[2].to_string()))
}

/// Location-derived suffix of the item name.
///
/// `.env` at the root is `root`; otherwise parent directories are joined
/// with `__` and a leading `.env` in the file name becomes `env`, so
/// `backend/api/.env.local` is `backend__api__env.local`.
pub fn path_pattern(env_file: &Path, repo_root: &Path) -> Result<String> {
    let rel = env_file
        .strip_prefix(repo_root)
        .map_err(|_| NamingError::OutsideRepository {
            path: env_file.to_path_buf(),
            root: repo_root.to_path_buf(),
        })?;

    if rel == Path::new(ENV_FILE) {
        return Ok(ROOT_PATTERN.to_string());
    }

    let filename = rel
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let filename = match filename.strip_prefix(ENV_FILE) {
        Some(suffix) => format!("env{}", suffix),
        None => filename,
    };

    let parents: Vec<String> = rel
        .parent()
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();

    if parents.is_empty() {
        Ok(filename)
    } else {
        Ok(format!(
            "{}{}{}",
            parents.join(PATH_SEPARATOR_TOKEN),
            PATH_SEPARATOR_TOKEN,
            filename
        ))
    }
}

fn absolute(path: &Path) -> PathBuf {
    if let Ok(path) = path.canonicalize() {
        return path;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
