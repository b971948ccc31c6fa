//! Game rules for Neutrino.
//!
//! This module contains pure functions for evaluating moves and game
//! state. Rules are separated from board storage and from the game
//! orchestrator so that alternate rule sets can be injected.

pub mod legal_moves;
pub mod legality;
pub mod next_state;

pub use legal_moves::legal_moves;
pub use legality::{
    ClearPath, LegalMove, MoveLegalityDecider, NeutrinoMoveDecider, NoHomeRowRebuild,
    PieceMayMove, Precondition, SourceOccupied, StopsAtObstacle, StraightLine, TargetFree,
    WithinBoard,
};
pub use next_state::{NeutrinoNextStateDecider, NextStateDecider, is_surrounded};

use super::types::Coord;

/// The eight compass directions as unit steps.
pub const DIRECTIONS: [Coord; 8] = [
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(1, 1),
    Coord::new(0, 1),
    Coord::new(-1, 1),
    Coord::new(-1, 0),
    Coord::new(-1, -1),
];
