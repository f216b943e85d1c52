//! Gantry - Fly.io deploy orchestrator for the avatar-crew backend.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gantry::cli::output;
use gantry::cli::{execute, Cli};
use gantry::error::GantryError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GANTRY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gantry=debug")
        } else {
            EnvFilter::new("gantry=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            GantryError::ToolMissing => {
                Some("install flyctl: https://fly.io/docs/flyctl/install/")
            }
            GantryError::EnvFileMissing(_) => {
                Some("create the file or pass --env-file <path>")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
