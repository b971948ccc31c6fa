//! Turn and win detection for Neutrino.

use super::super::types::{
    Board, Coord, GameState, PLAYER_ONE_HOME_ROW, PLAYER_TWO_HOME_ROW, Piece, TurnState,
};
use super::DIRECTIONS;
use tracing::{debug, error, instrument};

/// Computes the turn phase that follows an applied move.
///
/// The decider reads the board after the move and the turn phase that
/// was current when the move was made. Closures with the matching
/// signature implement this trait.
pub trait NextStateDecider {
    /// Returns the next turn phase or a win state.
    fn decide(&self, state: &GameState) -> TurnState;
}

impl<F> NextStateDecider for F
where
    F: Fn(&GameState) -> TurnState,
{
    fn decide(&self, state: &GameState) -> TurnState {
        self(state)
    }
}

/// Returns true if every on-board neighbour of `at` is occupied.
///
/// Squares off the board do not count as free.
#[instrument(skip(board))]
pub fn is_surrounded(board: &Board, at: Coord) -> bool {
    DIRECTIONS
        .iter()
        .filter_map(|&step| board.get(at + step))
        .all(Piece::is_occupied)
}

/// The standard Neutrino turn cycle and win conditions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutrinoNextStateDecider;

impl NextStateDecider for NeutrinoNextStateDecider {
    /// # Panics
    ///
    /// Panics if the board holds no neutrino. Moves only relocate pieces,
    /// so this means the board was corrupted.
    #[instrument(skip(self, state), fields(turn = ?state.turn()))]
    fn decide(&self, state: &GameState) -> TurnState {
        let board = state.board();
        let Some(neutrino) = board.find(Piece::Neutrino) else {
            error!("Board has no neutrino");
            panic!("Missing neutrino in game");
        };

        // Reaching a home row wins for the opponent of that row's owner,
        // whoever moved the neutrino there.
        if neutrino.y == PLAYER_ONE_HOME_ROW {
            debug!(%neutrino, "Neutrino on player one's home row");
            return TurnState::PlayerTwoWin;
        }
        if neutrino.y == PLAYER_TWO_HOME_ROW {
            debug!(%neutrino, "Neutrino on player two's home row");
            return TurnState::PlayerOneWin;
        }

        // Only checked after a piece move; a neutrino boxed in right after
        // a neutrino move goes undetected until the following piece move.
        if is_surrounded(board, neutrino) {
            match state.turn() {
                TurnState::PlayerOneMovePiece => return TurnState::PlayerOneWin,
                TurnState::PlayerTwoMovePiece => return TurnState::PlayerTwoWin,
                _ => debug!(%neutrino, "Neutrino surrounded outside a piece phase"),
            }
        }

        state.turn().next()
    }
}
