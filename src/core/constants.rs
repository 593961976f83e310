//! Constants used throughout envault.
//!
//! Centralizes magic strings and configuration values.

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Generated template file name, written next to the source file.
pub const TEMPLATE_FILE: &str = ".env.tpl";

/// Backup copy of the source file.
pub const BACKUP_FILE: &str = ".env.backup";

/// Git ignore file updated after a migration.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Version-control metadata directory marking a repository root.
pub const REPO_MARKER: &str = ".git";

/// Vault used for automatically named items.
pub const AUTO_VAULT: &str = "gh-projects";

/// Hosting provider accepted for automatic naming.
pub const GITHUB_HOST: &str = "github.com";

/// Remote read when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Timeout for `op` and `git` invocations, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Separator joining path components in item names.
pub const PATH_SEPARATOR_TOKEN: &str = "__";

/// Path pattern for the `.env` at the repository top level.
pub const ROOT_PATTERN: &str = "root";

/// Substrings marking a variable name as secret (matched case-insensitively).
pub const SECRET_KEYWORDS: &[&str] = &[
    "PASSWORD",
    "SECRET",
    "KEY",
    "TOKEN",
    "CREDENTIAL",
    "PRIVATE",
    "AUTH",
];

/// Directories never descended into while scanning.
pub const NOISE_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    "venv",
    "env",
    "target",
    "dist",
    "build",
    "vendor",
];

/// Suffixes of committed template/example files, skipped while scanning.
pub const TEMPLATE_SUFFIXES: &[&str] = &[".tpl", ".example", ".template", ".sample"];

/// Block appended to `.gitignore` after a migration.
///
/// The block itself mentions `.env`, so appending it twice is impossible.
pub const GITIGNORE_BLOCK: &[&str] = &[
    "# Environment files (managed by envault)",
    ".env",
    ".env.local",
    ".env.*.local",
    "*.backup",
    "!.env.tpl",
    "!.env.example",
    "!.env.*.example",
];
