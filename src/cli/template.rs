//! Template command.
//!
//! Writes a `.env.tpl` without touching 1Password.

use std::io::Write;
use std::path::Path;

use crate::cli::{output, Target};
use crate::core::config::Config;
use crate::core::constants::TEMPLATE_FILE;
use crate::core::domain::Env;
use crate::core::template;
use crate::error::Result;

/// Render `file` as a template to `out` (default `.env.tpl` beside it, `-` for stdout).
pub fn execute(config: &Config, file: &Path, target: &Target, out: Option<&Path>) -> Result<()> {
    super::check_input(file)?;
    let naming = target.strategy(config)?.resolve(file)?;
    let env = Env::load(file)?;
    let rendered = template::render(env.content(), &naming);

    match out {
        Some(path) if path == Path::new("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
        _ => {
            let path = match out {
                Some(path) => path.to_path_buf(),
                None => file
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(TEMPLATE_FILE),
            };
            std::fs::write(&path, rendered)?;
            output::success(&format!("wrote {}", output::path(path.display())));
        }
    }

    Ok(())
}
