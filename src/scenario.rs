//! Scenario files: a seeded position plus a list of moves to replay.
//!
//! ```toml
//! turn = "PlayerOneMovePiece"
//! rows = ["11111", ".....", "..N..", ".....", "22222"]
//! moves = [[0, 0, 0, 3]]
//! ```

use crate::config::NeutrinoConfig;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_neutrino::invariants::{InvariantSet, NeutrinoInvariants};
use strictly_neutrino::{Board, BoardError, Game, Move, MoveResult, TurnState};
use tracing::{debug, info, instrument, warn};

/// A position to start from and the moves to play on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Board rows in text notation, row 0 first. The starting layout when absent.
    #[serde(default)]
    pub rows: Option<Vec<String>>,

    /// Turn phase to start in. `PlayerOneMoveNeutrino` when absent.
    #[serde(default)]
    pub turn: Option<TurnState>,

    /// Moves as `[from_x, from_y, to_x, to_y]`.
    #[serde(default)]
    pub moves: Vec<[i32; 4]>,
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScenarioError::new(format!("Failed to read scenario: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses a scenario from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ScenarioError> {
        toml::from_str(content)
            .map_err(|e| ScenarioError::new(format!("Failed to parse scenario: {}", e)))
    }

    /// Builds the seeded game.
    ///
    /// Fails if the rows do not parse or the position breaks a board
    /// invariant (one neutrino, at most five pieces per player).
    #[instrument(skip(self, config))]
    pub fn game(&self, config: &NeutrinoConfig) -> Result<Game, ScenarioError> {
        let board = match &self.rows {
            Some(rows) => rows.join("\n").parse::<Board>()?,
            None => Board::starting(),
        };
        let turn = self.turn.unwrap_or(TurnState::PlayerOneMoveNeutrino);
        debug!(?turn, "Seeding scenario position");

        let game = Game::from_position(board, turn)
            .reject_moves_after_win(*config.reject_moves_after_win());

        if let Err(violations) = NeutrinoInvariants::check_all(game.state()) {
            let reasons = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%reasons, "Seeded position rejected");
            return Err(ScenarioError::new(format!("Invalid board: {}", reasons)));
        }
        Ok(game)
    }

    /// The scenario's moves.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves
            .iter()
            .map(|&[from_x, from_y, to_x, to_y]| Move::new(from_x, from_y, to_x, to_y))
    }

    /// Plays every move in order, recording each outcome.
    ///
    /// Rejected moves are recorded and skipped; replay continues with the
    /// next move.
    #[instrument(skip(self, config), fields(moves = self.moves.len()))]
    pub fn replay(&self, config: &NeutrinoConfig) -> Result<Replay, ScenarioError> {
        let mut game = self.game(config)?;
        let mut steps = Vec::with_capacity(self.moves.len());

        for mov in self.moves() {
            let result = game.apply_move(mov);
            if let Err(reason) = result {
                warn!(%mov, %reason, "Scenario move rejected");
            }
            steps.push(ReplayStep {
                mov,
                result,
                turn: game.turn(),
            });
        }

        info!(turn = ?game.turn(), "Scenario replayed");
        Ok(Replay { steps, game })
    }
}

/// Outcome of one replayed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    /// The move attempted.
    pub mov: Move,
    /// Whether it was applied.
    pub result: MoveResult,
    /// Turn phase after the attempt.
    pub turn: TurnState,
}

/// A replayed scenario.
#[derive(Debug, Clone)]
pub struct Replay {
    /// One entry per scenario move.
    pub steps: Vec<ReplayStep>,
    /// The game after the last move.
    pub game: Game,
}

/// Scenario loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Scenario error: {} at {}:{}", message, file, line)]
pub struct ScenarioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScenarioError {
    /// Creates a new scenario error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardError> for ScenarioError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(format!("Invalid board: {}", err))
    }
}
