//! EnvLine type.
//!
//! Classifies one line of a .env file without altering it.

use once_cell::sync::Lazy;
use regex::Regex;

static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("invalid assignment regex")
});

/// What a line of a .env file contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Blank or whitespace only.
    Empty,
    /// Starts with `#` after trimming.
    Comment,
    /// `KEY=VALUE` assignment.
    Variable {
        key: String,
        /// Right-hand side as written, quotes retained.
        raw_value: String,
    },
    /// Anything else; passed through untouched.
    Unknown,
}

/// A single source line and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLine<'a> {
    kind: LineKind,
    original: &'a str,
}

impl<'a> EnvLine<'a> {
    /// Classify a line.
    ///
    /// `original` may carry its line terminator; it is kept verbatim and
    /// ignored for classification. Never fails: unrecognized input is
    /// `LineKind::Unknown`.
    pub fn parse(original: &'a str) -> Self {
        let trimmed = original.trim();

        let kind = if trimmed.is_empty() {
            LineKind::Empty
        } else if trimmed.starts_with('#') {
            LineKind::Comment
        } else if let Some(caps) = ASSIGNMENT.captures(trimmed) {
            LineKind::Variable {
                key: caps[1].to_string(),
                raw_value: caps[2].to_string(),
            }
        } else {
            LineKind::Unknown
        };

        Self { kind, original }
    }

    pub fn kind(&self) -> &LineKind {
        &self.kind
    }

    /// The line exactly as read, terminator included.
    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Key for assignments, `None` otherwise.
    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Variable { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Unparsed value for assignments, `None` otherwise.
    pub fn raw_value(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Variable { raw_value, .. } => Some(raw_value),
            _ => None,
        }
    }
}

/// Split content into lines, keeping each line's terminator.
pub fn split_lines_inclusive(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}
