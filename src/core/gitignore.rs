//! `.gitignore` maintenance.

use std::path::Path;
use tracing::debug;

use crate::core::constants::{ENV_FILE, GITIGNORE_BLOCK, GITIGNORE_FILE};
use crate::error::Result;

/// Append the envault ignore block to `dir/.gitignore`.
///
/// Creates the file if needed. Does nothing if the file already mentions
/// `.env`. Returns whether the file changed.
pub fn update(dir: &Path) -> Result<bool> {
    let path = dir.join(GITIGNORE_FILE);
    let existing = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    if existing.contains(ENV_FILE) {
        debug!(path = %path.display(), "gitignore already covers .env");
        return Ok(false);
    }

    let mut contents = existing;
    if !contents.is_empty() {
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        contents.push('\n');
    }
    for line in GITIGNORE_BLOCK {
        contents.push_str(line);
        contents.push('\n');
    }

    std::fs::write(&path, contents)?;
    debug!(path = %path.display(), "gitignore updated");
    Ok(true)
}
