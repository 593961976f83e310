//! .env file discovery.
//!
//! Walks a directory tree for `.env` and `.env.*` files, skipping hidden
//! and dependency/build directories and committed templates.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::constants::{ENV_FILE, NOISE_DIRS, TEMPLATE_SUFFIXES};
use crate::error::{Result, ValidationError};

/// Result of a scan.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Absolute paths, sorted.
    pub files: Vec<PathBuf>,
    /// Paths that could not be read; the scan carried on without them.
    pub warnings: Vec<String>,
}

/// Whether a file name is a migratable .env file.
pub fn is_env_file(name: &str) -> bool {
    if name == ENV_FILE {
        return true;
    }
    name.strip_prefix(ENV_FILE)
        .is_some_and(|rest| rest.starts_with('.'))
        && !TEMPLATE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Find .env files under `root` with the built-in exclusions.
pub fn find(root: &Path) -> Result<Discovery> {
    find_excluding(root, &[])
}

/// Find .env files under `root`, also skipping directories named in `extra`.
///
/// # Errors
///
/// `ValidationError` if `root` is missing or not a directory. Permission
/// errors below `root` become warnings; any other walk error aborts.
pub fn find_excluding(root: &Path, extra: &[String]) -> Result<Discovery> {
    if !root.exists() {
        return Err(ValidationError::FileNotFound(root.to_path_buf()).into());
    }
    if !root.is_dir() {
        return Err(ValidationError::NotADirectory(root.to_path_buf()).into());
    }
    let root = root.canonicalize()?;
    debug!(root = %root.display(), "scanning for .env files");

    let mut discovery = Discovery::default();
    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_pruned(e, extra));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let denied = err
                    .io_error()
                    .is_some_and(|e| e.kind() == ErrorKind::PermissionDenied);
                if !denied {
                    return Err(err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop"))
                        .into());
                }
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!(path = %path, "permission denied");
                discovery.warnings.push(format!("permission denied: {}", path));
                continue;
            }
        };

        // links are not followed into directories, but a linked file counts
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        if is_env_file(&entry.file_name().to_string_lossy()) {
            trace!(path = %entry.path().display(), "found");
            discovery.files.push(entry.into_path());
        }
    }

    discovery.files.sort();
    debug!(count = discovery.files.len(), "scan complete");
    Ok(discovery)
}

fn is_pruned(entry: &DirEntry, extra: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || NOISE_DIRS.iter().any(|dir| *dir == name)
        || extra.iter().any(|dir| *dir == name)
}
