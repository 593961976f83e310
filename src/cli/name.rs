//! Name command.
//!
//! Prints the vault and item a .env file would be migrated to.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::naming::{AutoNaming, NamingStrategy};
use crate::error::Result;

/// Resolve and print the automatic naming for `file`.
pub fn execute(config: &Config, file: &Path, json: bool) -> Result<()> {
    let naming = AutoNaming::from_config(config).resolve(file)?;

    if json {
        let mut value = serde_json::to_value(&naming).map_err(std::io::Error::other)?;
        value["reference"] = naming.to_string().into();
        println!(
            "{}",
            serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?
        );
        return Ok(());
    }

    output::kv("vault:    ", &naming.vault);
    output::kv("item:     ", &naming.item);
    output::kv("reference:", naming.to_string());
    Ok(())
}
