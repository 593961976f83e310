//! Error types for envault.
//!
//! Errors are grouped by the stage that produces them so the CLI can
//! attach a remediation hint to each family.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A follow-up command or action for the operator, when one exists.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::Naming(NamingError::NoRepository(_)) => {
                Some("run: git init && git remote add origin <url>, or pass --vault and --item".into())
            }
            Error::Naming(NamingError::NoRemote { remote, .. }) => Some(format!(
                "run: git remote add {} https://github.com/<owner>/<repo>.git",
                remote
            )),
            Error::Naming(NamingError::UnsupportedHost(_)) => {
                Some("use --vault and --item to name the item manually".into())
            }
            Error::Tool(ToolError::NotInstalled(_)) => {
                Some("install the 1Password CLI: https://developer.1password.com/docs/cli/get-started/".into())
            }
            Error::Tool(ToolError::NotAuthenticated(_)) => Some("run: op signin".into()),
            Error::Validation(ValidationError::NamingRequired) => {
                Some("pass --auto, or both --vault and --item".into())
            }
            _ => None,
        }
    }
}

/// Failures while deriving the vault and item name from a file location.
#[derive(Error, Debug)]
pub enum NamingError {
    #[error("not inside a git repository: {0} (projects without git are not supported for automatic naming)")]
    NoRepository(PathBuf),

    #[error("git repository at {root} has no '{remote}' remote configured (add one with: git remote add {remote} <url>)")]
    NoRemote { root: PathBuf, remote: String },

    #[error("remote is not hosted on github.com: {0}")]
    UnsupportedHost(String),

    #[error("invalid GitHub URL: {0}")]
    InvalidUrl(String),

    #[error("{path} is not inside repository {root}")]
    OutsideRepository { path: PathBuf, root: PathBuf },
}

/// Failures from external command-line tools.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0} not found on PATH")]
    NotInstalled(String),

    #[error("not signed in to 1Password: {0}")]
    NotAuthenticated(String),

    #[error("`{command}` failed: {stderr}")]
    Failed { command: String, stderr: String },

    #[error("`{command}` timed out after {secs}s")]
    Timeout { command: String, secs: u64 },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Invalid operator input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("{0} is a directory (list its .env files with: envault scan)")]
    IsDirectory(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("not valid UTF-8: {0}")]
    NotUtf8(PathBuf),

    #[error("either --auto or both --vault and --item are required")]
    NamingRequired,

    #[error("{0} requires --auto")]
    AutoRequired(String),
}

pub type Result<T> = std::result::Result<T, Error>;
