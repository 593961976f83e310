//! Secret classification.
//!
//! Decides which variables hold secrets by keyword substring match.

use crate::core::constants::SECRET_KEYWORDS;

/// Keyword-based secret classifier.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    keywords: &'static [&'static str],
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            keywords: SECRET_KEYWORDS,
        }
    }
}

impl Classifier {
    /// Classifier over a custom upper-case keyword set.
    pub fn with_keywords(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    /// Whether `key` names a secret.
    ///
    /// Case-insensitive: any keyword appearing anywhere in the key matches.
    pub fn is_secret(&self, key: &str) -> bool {
        let upper = key.to_uppercase();
        self.keywords.iter().any(|kw| upper.contains(kw))
    }
}

/// Whether `key` names a secret, using the built-in keyword set.
pub fn is_secret(key: &str) -> bool {
    Classifier::default().is_secret(key)
}

/// Field name used in the vault item: the key lower-cased, nothing else.
pub fn field_name(key: &str) -> String {
    key.to_lowercase()
}
