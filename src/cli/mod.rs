//! Command-line interface.

pub mod completions;
pub mod migrate;
pub mod name;
pub mod output;
pub mod scan;
pub mod template;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::naming::{AutoNaming, ManualNaming, NamingStrategy};
use crate::error::{Result, ValidationError};

/// Envault - move .env secrets into 1Password.
#[derive(Parser)]
#[command(
    name = "envault",
    about = "Move .env secrets into 1Password and commit op:// templates instead",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: <config dir>/envault/config.toml)
    #[arg(long, global = true, env = "ENVAULT_CONFIG")]
    pub config: Option<PathBuf>,

    /// 1Password CLI executable
    #[arg(long, global = true, env = "ENVAULT_OP_BIN")]
    pub op_bin: Option<String>,

    /// git executable
    #[arg(long, global = true, env = "ENVAULT_GIT_BIN")]
    pub git_bin: Option<String>,

    /// Remote used for automatic naming
    #[arg(long, global = true)]
    pub remote: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Move secrets from .env files into 1Password and write .env.tpl
    Migrate {
        /// .env files to migrate
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        target: Target,
        /// Copy the original file to .env.backup
        #[arg(long)]
        backup: bool,
        /// Show what would be written to 1Password without writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Write a .env.tpl with op:// references, without touching 1Password
    Template {
        /// .env file to convert
        file: PathBuf,
        #[command(flatten)]
        target: Target,
        /// Output path, or - for stdout (default: .env.tpl next to the file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the vault and item a .env file maps to
    Name {
        /// .env file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find .env files under a directory
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Write the list to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where migrated secrets go.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Name the item from the git remote and file location
    #[arg(long, conflicts_with_all = ["vault", "item"])]
    pub auto: bool,
    /// 1Password vault
    #[arg(long, requires = "item")]
    pub vault: Option<String>,
    /// 1Password item title
    #[arg(long, requires = "vault")]
    pub item: Option<String>,
}

impl Target {
    /// Naming strategy selected by the flags.
    pub fn strategy(&self, config: &Config) -> Result<Box<dyn NamingStrategy>> {
        if self.auto {
            return Ok(Box::new(AutoNaming::from_config(config)));
        }
        match (&self.vault, &self.item) {
            (Some(vault), Some(item)) => Ok(Box::new(ManualNaming::new(vault, item))),
            _ => Err(ValidationError::NamingRequired.into()),
        }
    }
}

/// Reject a missing path or a directory before anything is written.
fn check_input(file: &Path) -> Result<()> {
    if file.is_dir() {
        return Err(ValidationError::IsDirectory(file.to_path_buf()).into());
    }
    if !file.exists() {
        return Err(ValidationError::FileNotFound(file.to_path_buf()).into());
    }
    Ok(())
}

/// Load the config file and apply command-line overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(op_bin) = &cli.op_bin {
        config.op_bin = op_bin.clone();
    }
    if let Some(git_bin) = &cli.git_bin {
        config.git_bin = git_bin.clone();
    }
    if let Some(remote) = &cli.remote {
        config.remote = remote.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Migrate {
            files,
            target,
            backup,
            dry_run,
        } => migrate::execute(&config, &files, &target, backup, dry_run),
        Command::Template {
            file,
            target,
            output,
        } => template::execute(&config, &file, &target, output.as_deref()),
        Command::Name { file, json } => name::execute(&config, &file, json),
        Command::Scan { dir, output, json } => scan::execute(&config, &dir, output.as_deref(), json),
        Command::Completions { shell } => completions::execute(shell),
    }
}
