//! Terminal output for envault commands.
//!
//! Results go to stdout, diagnostics (errors, warnings, hints) to stderr.
//! Styling is done by `console`, which already drops colors when the stream
//! is not a terminal; [`init`] also turns them off when `NO_COLOR` is set.

use console::style;
use std::fmt::Display;

/// Apply `NO_COLOR` to both output streams. Call once at startup.
pub fn init() {
    if std::env::var_os("NO_COLOR").is_some() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

/// `✓ wrote .env.tpl`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// `✗ file not found: .env`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().for_stderr(), msg);
}

/// `⚠ no secrets found in .env, nothing to migrate`
pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().for_stderr(), msg);
}

/// `→ run: op signin`
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan().for_stderr(), style(msg).cyan().for_stderr());
}

/// Bold line naming the file a report is about.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Indented `label  value` pair, e.g. `  vault:  gh-projects`.
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Secondary line, e.g. the dry-run notice.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

pub fn blank() {
    println!();
}

/// Path styled for inline use in a message.
pub fn path(p: impl Display) -> String {
    style(p).cyan().to_string()
}

/// Variable name styled for inline use in a message.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}
