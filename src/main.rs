//! Envault - move .env secrets into 1Password.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envault::cli::output;
use envault::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();
    output::init();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ENVAULT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envault=debug")
        } else {
            EnvFilter::new("envault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
