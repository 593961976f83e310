//! Core library components.
//!
//! Parsing, classification, naming, template rendering and the migration
//! workflow. Nothing here prints; the CLI layer reports results.

pub mod classify;
pub mod config;
pub mod constants;
pub mod discover;
pub mod domain;
pub mod gitignore;
pub mod migrate;
pub mod naming;
pub mod process;
pub mod store;
pub mod template;
