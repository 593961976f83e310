//! Vault naming and reference types.

use serde::Serialize;
use std::fmt;

/// Target vault and item for a migrated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Naming {
    pub vault: String,
    pub item: String,
}

impl Naming {
    pub fn new(vault: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            vault: vault.into(),
            item: item.into(),
        }
    }

    /// Reference to one field of this item.
    pub fn reference(&self, field: impl Into<String>) -> VaultReference {
        VaultReference {
            vault: self.vault.clone(),
            item: self.item.clone(),
            field: field.into(),
        }
    }
}

impl fmt::Display for Naming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op://{}/{}/", self.vault, self.item)
    }
}

/// A secret reference resolved at runtime by `op run` / `op inject`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultReference {
    pub vault: String,
    pub item: String,
    pub field: String,
}

impl fmt::Display for VaultReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op://{}/{}/{}", self.vault, self.item, self.field)
    }
}
