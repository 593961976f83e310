//! Envault - move .env secrets into 1Password.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── migrate       # Upsert secrets, write .env.tpl, backup, .gitignore
//! │   ├── template      # Write .env.tpl only
//! │   ├── name          # Show automatic vault/item naming
//! │   ├── scan          # Find .env files
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── domain/       # EnvLine, Env, Naming, VaultReference, MigrationPlan
//!     ├── classify      # Secret keyword matching
//!     ├── naming        # Repo root, GitHub remote, path patterns
//!     ├── template      # op:// template rendering
//!     ├── migrate       # Migration workflow
//!     ├── store         # SecretStore trait, 1Password CLI backend
//!     ├── discover      # Directory scan
//!     ├── gitignore     # .gitignore block
//!     ├── process       # Subprocesses with timeouts
//!     └── config        # config.toml
//! ```
//!
//! # Example
//!
//! ```
//! use envault::core::domain::Naming;
//! use envault::core::template;
//!
//! let naming = Naming::new("gh-projects", "acme__shop__root");
//! let out = template::render("DB_PASSWORD=hunter2\nPORT=80\n", &naming);
//! assert_eq!(
//!     out,
//!     "DB_PASSWORD=\"op://gh-projects/acme__shop__root/db_password\"\nPORT=80\n"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod error;
