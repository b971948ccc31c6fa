//! Neutrino games - terminal driver for the Neutrino rules engine
//!
//! The rules themselves live in [`strictly_neutrino`]; this crate supplies
//! the collaborator around them.
//!
//! # Architecture
//!
//! - **Config**: TOML driver settings
//! - **Scenario**: seeded positions and move lists for replay
//! - **Session**: line-oriented interactive play
//!
//! # Example
//!
//! ```
//! use neutrino_games::{NeutrinoConfig, Scenario};
//!
//! let scenario = Scenario::from_toml("moves = [[2, 2, 2, 1]]").unwrap();
//! let replay = scenario.replay(&NeutrinoConfig::default()).unwrap();
//! assert!(replay.steps[0].result.is_ok());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod scenario;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, NeutrinoConfig};

// Crate-level exports - Scenario replay
pub use scenario::{Replay, ReplayStep, Scenario, ScenarioError};

// Crate-level exports - Interactive play
pub use session::{Command, CommandError, TerminalSession};

// Crate-level exports - Game types
pub use strictly_neutrino::{Board, Game, Move, MoveError, Piece, Player, TurnState};
