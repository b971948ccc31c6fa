//! Command-line interface for the Neutrino driver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Neutrino - play the Neutrino board game in the terminal
#[derive(Parser, Debug)]
#[command(name = "neutrino")]
#[command(about = "Play or replay games of Neutrino", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Replay the moves of a scenario file and print each outcome
    Replay {
        /// Path to the scenario TOML file
        scenario: PathBuf,
    },
}
