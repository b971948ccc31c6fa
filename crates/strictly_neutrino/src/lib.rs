//! Pure Neutrino game logic.
//!
//! Neutrino is played on a 5x5 board by two players who each own a row of
//! pieces and share a single neutrino. Every turn a player first slides
//! the neutrino, then one of their own pieces; pieces always slide in a
//! straight line until blocked. Bringing the neutrino onto a home row
//! wins for the opponent of that row's owner, and boxing the neutrino in
//! with a piece move wins for the mover.
//!
//! # Example
//!
//! ```
//! use strictly_neutrino::{Game, MoveError, TurnState};
//!
//! let mut game = Game::new();
//! assert_eq!(game.turn(), TurnState::PlayerOneMoveNeutrino);
//!
//! // The neutrino must slide until it reaches an obstacle.
//! assert_eq!(game.make_move(2, 2, 3, 2), Err(MoveError::MustMoveToObstacle));
//! game.make_move(2, 2, 4, 2).unwrap();
//! assert_eq!(game.turn(), TurnState::PlayerOneMovePiece);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveResult};
pub use game::Game;
pub use rules::{
    MoveLegalityDecider, NeutrinoMoveDecider, NeutrinoNextStateDecider, NextStateDecider,
};
pub use types::{
    Board, BoardError, COLUMNS, Coord, GameState, PLAYER_ONE_HOME_ROW, PLAYER_TWO_HOME_ROW, Piece,
    Player, ROWS, TurnState,
};
