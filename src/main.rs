//! Neutrino - terminal driver
//!
//! Plays or replays Neutrino games on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use neutrino_games::{NeutrinoConfig, Scenario, TerminalSession};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = NeutrinoConfig::load(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { scenario } => run_replay(&config, &scenario),
    }
}

/// Installs the log subscriber; `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &NeutrinoConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game
#[instrument(skip(config))]
fn run_play(config: &NeutrinoConfig) -> Result<()> {
    info!("Starting interactive game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = TerminalSession::new(config, stdin.lock(), stdout.lock());
    let turn = session.run().context("Terminal I/O failed")?;

    info!(?turn, "Game finished");
    Ok(())
}

/// Replay a scenario file
#[instrument(skip(config))]
fn run_replay(config: &NeutrinoConfig, path: &Path) -> Result<()> {
    let scenario = Scenario::from_file(path)?;
    let replay = scenario.replay(config)?;

    for (index, step) in replay.steps.iter().enumerate() {
        match &step.result {
            Ok(()) => println!("{:>3}. {}  ok  ({})", index + 1, step.mov, step.turn),
            Err(reason) => println!("{:>3}. {}  rejected: {}", index + 1, step.mov, reason),
        }
    }

    print!("{}", replay.game.board());
    println!("{}", replay.game.turn());
    Ok(())
}
