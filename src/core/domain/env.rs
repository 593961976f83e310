//! Env type.
//!
//! Represents a parsed .env file: its raw content plus the variables it
//! assigns, in first-seen order.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::domain::line::{split_lines_inclusive, EnvLine};
use crate::error::{Result, ValidationError};

/// A parsed .env file
#[derive(Debug, Clone)]
pub struct Env {
    content: String,
    entries: Vec<(String, String)>,
    path: PathBuf,
}

impl Env {
    /// Read and parse an .env file from disk
    ///
    /// Comments, blank lines and unrecognized lines are left out of the
    /// variable list; they stay in [`Env::content`] for template rendering.
    /// A repeated key keeps its first position and takes the last value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::FileNotFound` if the file is missing,
    /// `ValidationError::NotUtf8` if it is not text.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ValidationError::FileNotFound(path.to_path_buf()).into())
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(ValidationError::NotUtf8(path.to_path_buf()).into())
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self::parse(content, path.to_path_buf()))
    }

    /// Parse in-memory content
    pub fn parse(content: String, path: PathBuf) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();

        for line in split_lines_inclusive(&content) {
            let line = EnvLine::parse(line);
            let (Some(key), Some(raw)) = (line.key(), line.raw_value()) else {
                continue;
            };
            let value = unquote(raw).to_string();

            match entries.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key.to_string(), value)),
            }
        }

        Self {
            content,
            entries,
            path,
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries as key-value pairs, values unquoted
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Raw file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Strip one matching pair of outer quotes.
///
/// Inner content is returned as written; escapes are not interpreted.
pub fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}
