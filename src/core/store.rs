//! Secret store backends.
//!
//! The migration writes through the [`SecretStore`] trait; [`OpCli`] drives
//! the 1Password CLI (`op`) as a blocking subprocess.

use std::time::Duration;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::process;
use crate::error::{Result, ToolError};

/// Trait for vault backends.
pub trait SecretStore {
    /// Confirm the backend is installed and signed in.
    fn check(&self) -> Result<()>;

    /// Whether `item` exists in `vault`.
    fn item_exists(&self, vault: &str, item: &str) -> Result<bool>;

    /// Set one concealed field on an existing item.
    fn update_field(&self, vault: &str, item: &str, field: &str, value: &str) -> Result<()>;

    /// Create `item` in `vault` with all `fields` at once.
    fn create_item(&self, vault: &str, item: &str, fields: &[(String, &str)]) -> Result<()>;
}

/// 1Password CLI backend
#[derive(Debug, Clone)]
pub struct OpCli {
    bin: String,
    timeout: Duration,
}

impl OpCli {
    pub fn new(bin: impl Into<String>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.op_bin, config.timeout())
    }

    fn assignment(field: &str, value: &str) -> String {
        format!("{}[password]={}", field, value)
    }
}

impl SecretStore for OpCli {
    fn check(&self) -> Result<()> {
        if which::which(&self.bin).is_err() {
            return Err(ToolError::NotInstalled(self.bin.clone()).into());
        }

        let version = process::run(&self.bin, &["--version"], self.timeout)?;
        if !version.success {
            return Err(ToolError::NotInstalled(self.bin.clone()).into());
        }
        debug!(version = %version.stdout.trim(), "op found");

        let whoami = process::run(&self.bin, &["whoami"], self.timeout)?;
        if !whoami.success {
            return Err(ToolError::NotAuthenticated(whoami.stderr.trim().to_string()).into());
        }

        info!("1Password CLI ready");
        Ok(())
    }

    fn item_exists(&self, vault: &str, item: &str) -> Result<bool> {
        let out = process::run(&self.bin, &["item", "get", item, "--vault", vault], self.timeout)?;
        debug!(vault = %vault, item = %item, exists = out.success, "looked up item");
        Ok(out.success)
    }

    fn update_field(&self, vault: &str, item: &str, field: &str, value: &str) -> Result<()> {
        let assignment = Self::assignment(field, value);
        process::run_checked(
            &self.bin,
            &["item", "edit", item, "--vault", vault, assignment.as_str()],
            self.timeout,
        )?;
        debug!(field = %field, "updated field");
        Ok(())
    }

    fn create_item(&self, vault: &str, item: &str, fields: &[(String, &str)]) -> Result<()> {
        let title = format!("--title={}", item);
        let vault_arg = format!("--vault={}", vault);
        let assignments: Vec<String> = fields
            .iter()
            .map(|(field, value)| Self::assignment(field, value))
            .collect();

        let mut args = vec![
            "item",
            "create",
            "--category=password",
            title.as_str(),
            vault_arg.as_str(),
        ];
        args.extend(assignments.iter().map(String::as_str));

        process::run_checked(&self.bin, &args, self.timeout)?;
        info!(vault = %vault, item = %item, fields = fields.len(), "created item");
        Ok(())
    }
}
