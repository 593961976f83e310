//! Scan command.
//!
//! Lists .env files under a directory.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::discover;
use crate::error::Result;

/// Scan `dir` and print or save the absolute paths found.
pub fn execute(config: &Config, dir: &Path, out: Option<&Path>, json: bool) -> Result<()> {
    let discovery = discover::find_excluding(dir, &config.exclude_dirs)?;

    for warning in &discovery.warnings {
        output::warn(warning);
    }

    let paths: Vec<String> = discovery
        .files
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    let rendered = if json {
        let mut json = serde_json::to_string_pretty(&paths).map_err(std::io::Error::other)?;
        json.push('\n');
        json
    } else {
        paths.iter().map(|p| format!("{}\n", p)).collect()
    };

    match out {
        Some(path) => {
            std::fs::write(path, rendered)?;
            output::success(&format!(
                "wrote {} path{} to {}",
                paths.len(),
                if paths.len() == 1 { "" } else { "s" },
                output::path(path.display())
            ));
        }
        None if paths.is_empty() && !json => {
            output::warn(&format!("no .env files found under {}", dir.display()));
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
