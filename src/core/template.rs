//! Template generation.
//!
//! Rewrites .env content so secret values become `op://` references.
//! Every other line is copied byte-for-byte.

use tracing::trace;

use crate::core::classify::{field_name, Classifier};
use crate::core::domain::line::split_lines_inclusive;
use crate::core::domain::{EnvLine, Naming};

/// Render a template using the built-in secret keywords.
pub fn render(content: &str, naming: &Naming) -> String {
    render_with(content, naming, &Classifier::default())
}

/// Render a template with a specific classifier.
///
/// Secret lines are always emitted as `KEY="op://vault/item/field"` plus a
/// single `\n`, whatever their original quoting or terminator.
pub fn render_with(content: &str, naming: &Naming, classifier: &Classifier) -> String {
    let mut output = String::with_capacity(content.len());

    for raw in split_lines_inclusive(content) {
        let line = EnvLine::parse(raw);

        match line.key() {
            Some(key) if classifier.is_secret(key) => {
                trace!(key = %key, "replacing secret value");
                let reference = naming.reference(field_name(key));
                output.push_str(&format!("{}=\"{}\"\n", key, reference));
            }
            _ => output.push_str(line.original()),
        }
    }

    output
}
