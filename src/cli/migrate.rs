//! Migrate command.
//!
//! Moves secrets from .env files into 1Password and writes `.env.tpl`.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::{output, Target};
use crate::core::config::Config;
use crate::core::migrate::{Migration, Options, Outcome, Report, Upsert};
use crate::core::store::OpCli;
use crate::error::{Result, ValidationError};

/// Migrate each file in turn, stopping at the first failure.
pub fn execute(
    config: &Config,
    files: &[PathBuf],
    target: &Target,
    backup: bool,
    dry_run: bool,
) -> Result<()> {
    if files.len() > 1 && !target.auto {
        return Err(ValidationError::AutoRequired("migrating several files".to_string()).into());
    }

    for file in files {
        super::check_input(file)?;
    }

    let naming = target.strategy(config)?;
    let store = OpCli::from_config(config);
    let migration = Migration::new(&store, &*naming, Options { backup, dry_run });

    for file in files {
        info!(path = %file.display(), dry_run, "migrating");

        match migration.run(file)? {
            Outcome::NoSecrets => {
                output::warn(&format!(
                    "no secrets found in {}, nothing to migrate",
                    output::path(file.display())
                ));
            }
            Outcome::Migrated(report) => print_report(file, &report),
        }
    }

    Ok(())
}

fn print_report(file: &Path, report: &Report) {
    output::blank();
    output::header(&file.display().to_string());
    output::kv("vault:", &report.naming.vault);
    output::kv("item: ", &report.naming.item);

    match report.upsert {
        Upsert::Skipped => {
            output::dimmed("dry run: would write these fields to 1Password");
            for (key, reference) in &report.references {
                output::list_item(&format!("{} → {}", output::key(key), reference));
            }
        }
        Upsert::Created => output::success(&format!(
            "created item with {} field{}",
            report.references.len(),
            plural(report.references.len())
        )),
        Upsert::Updated => output::success(&format!(
            "updated {} field{}",
            report.references.len(),
            plural(report.references.len())
        )),
    }

    output::success(&format!(
        "wrote {} ({} secret{}, {} plain)",
        output::path(report.template.display()),
        report.references.len(),
        plural(report.references.len()),
        report.plain
    ));

    if let Some(backup) = &report.backup {
        output::success(&format!("backed up to {}", output::path(backup.display())));
    }
    if report.gitignore_updated {
        output::success("updated .gitignore");
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
