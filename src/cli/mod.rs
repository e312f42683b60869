//! CLI module for the content timer
//!
//! Provides the commands:
//! - `run`: start the reminder loop (default)
//! - `init`: write a default settings file
//! - `contents`: list tracked contents and their options

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod contents;
pub mod init;
pub mod run;
pub mod settings_file;

/// Aion 2 content timer CLI
#[derive(Parser, Debug)]
#[command(name = "aion-timer")]
#[command(about = "Recurring in-game event reminders for Aion 2")]
#[command(version)]
pub struct Cli {
    /// Settings file path (default: <config dir>/aion-timer/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the reminder loop (default)
    Run,
    /// Write a default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// List tracked contents and their selectable options
    Contents,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let path = settings_file::resolve_path(cli.config)?;

    match cli.command {
        Some(Commands::Init { force }) => init::run(&path, force),
        Some(Commands::Contents) => contents::run(),
        Some(Commands::Run) | None => run::run(&path).await,
    }
}
