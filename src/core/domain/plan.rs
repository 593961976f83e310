//! Migration plan.
//!
//! The secret / non-secret split of one .env file and where the secrets go.

use crate::core::classify::{field_name, Classifier};
use crate::core::domain::{Env, Naming};

/// Variables of one file split by classification.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    pub naming: Naming,
    pub secrets: Vec<(String, String)>,
    pub plain: Vec<(String, String)>,
}

impl MigrationPlan {
    /// Partition the variables of `env`.
    pub fn build(env: &Env, naming: Naming, classifier: &Classifier) -> Self {
        let (secrets, plain): (Vec<_>, Vec<_>) = env
            .entries()
            .iter()
            .cloned()
            .partition(|(key, _)| classifier.is_secret(key));

        Self {
            naming,
            secrets,
            plain,
        }
    }

    /// Whether there is nothing to migrate.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Secrets keyed by vault field name.
    pub fn fields(&self) -> Vec<(String, &str)> {
        self.secrets
            .iter()
            .map(|(key, value)| (field_name(key), value.as_str()))
            .collect()
    }
}
