//! Configuration file management.
//!
//! Reads the optional `config.toml` that overrides tool locations and
//! discovery settings. Every field has a default, so a missing file is
//! the same as an empty one.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "ENVAULT_CONFIG";

/// User configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 1Password CLI executable
    pub op_bin: String,
    /// git executable
    pub git_bin: String,
    /// Remote whose URL names automatically migrated items
    pub remote: String,
    /// Timeout for each `op` / `git` invocation, in seconds
    pub timeout_secs: u64,
    /// Extra directory names skipped while scanning
    pub exclude_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            op_bin: "op".to_string(),
            git_bin: "git".to_string(),
            remote: constants::DEFAULT_REMOTE.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            exclude_dirs: Vec::new(),
        }
    }
}

impl Config {
    /// Default location: `$ENVAULT_CONFIG`, else `<config dir>/envault/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("envault").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if self.op_bin.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "op_bin",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        if self.git_bin.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "git_bin",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
