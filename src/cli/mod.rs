//! Command-line interface.

pub mod check;
pub mod completions;
pub mod deploy;
pub mod output;
pub mod secrets;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::ENV_FILE;
use crate::core::flyctl::Flyctl;

/// Gantry - Fly.io deploy orchestrator for the avatar-crew backend.
#[derive(Parser)]
#[command(
    name = "gantry",
    about = "Fly.io deploy orchestrator for the avatar-crew backend",
    version,
    after_help = "Check twice. Launch once. 🚀"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the app if needed, push secrets, and deploy (the default)
    Deploy {
        /// Env file with secrets pushed on first launch
        #[arg(long, default_value = ENV_FILE)]
        env_file: PathBuf,
    },

    /// Manage application secrets
    Secrets {
        #[command(subcommand)]
        action: SecretsAction,
    },

    /// Run local preflight checks
    Check {
        /// Env file to look for
        #[arg(long, default_value = ENV_FILE)]
        env_file: PathBuf,
    },

    /// Show remote application overview
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Secrets subcommands.
#[derive(Subcommand)]
pub enum SecretsAction {
    /// Push every entry of an env file to the application
    Sync {
        /// Path to the env file
        #[arg(long, default_value = ENV_FILE)]
        env_file: PathBuf,
    },

    /// Set a single secret value
    Set {
        /// Secret key (e.g., DATABASE_URL)
        key: String,
        /// Secret value
        value: String,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command. Invocation without a subcommand runs the full
/// deploy flow against the default env file.
pub fn execute(command: Option<Command>) -> crate::error::Result<()> {
    use Command::*;

    let tool = Flyctl::new();
    let command = command.unwrap_or(Deploy {
        env_file: PathBuf::from(ENV_FILE),
    });

    match command {
        Deploy { env_file } => deploy::execute(&tool, &env_file),
        Secrets { action } => match action {
            SecretsAction::Sync { env_file } => secrets::sync(&tool, &env_file),
            SecretsAction::Set { key, value } => secrets::set(&tool, &key, &value),
        },
        Check { env_file } => check::execute(&tool, &env_file),
        Status { json } => status::execute(&tool, json),
        Completions { shell } => completions::execute(shell),
    }
}
