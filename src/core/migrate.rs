//! Migration of one .env file into the vault.
//!
//! Stages run strictly in order: resolve naming, parse, partition, check
//! the vault CLI, upsert the item, write the template, back up, update
//! `.gitignore`. Dry-run skips the vault side (check and upsert) only;
//! local files are still written.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::classify::Classifier;
use crate::core::constants::{BACKUP_FILE, TEMPLATE_FILE};
use crate::core::domain::{Env, MigrationPlan, Naming};
use crate::core::gitignore;
use crate::core::naming::NamingStrategy;
use crate::core::store::SecretStore;
use crate::core::template;
use crate::error::Result;

/// Flags for a migration run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub backup: bool,
    pub dry_run: bool,
}

/// What the vault side did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
    /// Dry run: nothing written.
    Skipped,
}

/// Summary of a completed migration.
#[derive(Debug, Clone)]
pub struct Report {
    pub naming: Naming,
    /// `(KEY, op://...)` for every migrated secret.
    pub references: Vec<(String, String)>,
    pub plain: usize,
    pub upsert: Upsert,
    pub template: PathBuf,
    pub backup: Option<PathBuf>,
    pub gitignore_updated: bool,
}

/// Outcome of a run that did not fail.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// No secret variables; nothing was touched.
    NoSecrets,
    Migrated(Report),
}

/// A configured migration.
pub struct Migration<'a> {
    store: &'a dyn SecretStore,
    naming: &'a dyn NamingStrategy,
    classifier: Classifier,
    options: Options,
}

impl<'a> Migration<'a> {
    pub fn new(store: &'a dyn SecretStore, naming: &'a dyn NamingStrategy, options: Options) -> Self {
        Self {
            store,
            naming,
            classifier: Classifier::default(),
            options,
        }
    }

    /// Migrate the .env file at `path`.
    ///
    /// # Errors
    ///
    /// Naming, parsing and vault CLI errors abort before anything is written.
    /// An upsert failure aborts before the template is written; fields
    /// updated before the failure stay updated.
    pub fn run(&self, path: &Path) -> Result<Outcome> {
        let naming = self.naming.resolve(path)?;
        debug!(vault = %naming.vault, item = %naming.item, "naming resolved");

        let env = Env::load(path)?;
        let plan = MigrationPlan::build(&env, naming, &self.classifier);
        info!(
            path = %path.display(),
            secrets = plan.secrets.len(),
            plain = plan.plain.len(),
            "parsed"
        );

        if plan.is_empty() {
            return Ok(Outcome::NoSecrets);
        }

        let upsert = if self.options.dry_run {
            Upsert::Skipped
        } else {
            self.store.check()?;
            self.upsert(&plan)?
        };

        let dir = path.parent().unwrap_or_else(|| Path::new(""));

        let template_path = dir.join(TEMPLATE_FILE);
        let rendered = template::render_with(env.content(), &plan.naming, &self.classifier);
        fs::write(&template_path, rendered)?;
        debug!(path = %template_path.display(), "template written");

        let backup = if self.options.backup {
            let backup_path = dir.join(BACKUP_FILE);
            backup_file(path, &backup_path)?;
            Some(backup_path)
        } else {
            None
        };

        let gitignore_updated = gitignore::update(dir)?;

        let references = plan
            .fields()
            .into_iter()
            .zip(plan.secrets.iter())
            .map(|((field, _), (key, _))| (key.clone(), plan.naming.reference(field).to_string()))
            .collect();

        Ok(Outcome::Migrated(Report {
            naming: plan.naming.clone(),
            references,
            plain: plan.plain.len(),
            upsert,
            template: template_path,
            backup,
            gitignore_updated,
        }))
    }

    fn upsert(&self, plan: &MigrationPlan) -> Result<Upsert> {
        let Naming { vault, item } = &plan.naming;
        let fields = plan.fields();

        if self.store.item_exists(vault, item)? {
            for (field, value) in &fields {
                self.store.update_field(vault, item, field, value)?;
            }
            info!(vault = %vault, item = %item, fields = fields.len(), "item updated");
            Ok(Upsert::Updated)
        } else {
            self.store.create_item(vault, item, &fields)?;
            Ok(Upsert::Created)
        }
    }
}

/// Copy `src` to `dest`, keeping permissions and modification time.
fn backup_file(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest)?;

    let modified = fs::metadata(src)?.modified()?;
    let applied = fs::File::options()
        .write(true)
        .open(dest)
        .and_then(|file| file.set_modified(modified));
    if let Err(e) = applied {
        warn!(path = %dest.display(), error = %e, "could not preserve modification time");
    }

    debug!(path = %dest.display(), "backup written");
    Ok(())
}
