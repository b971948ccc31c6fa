//! Move legality for Neutrino.
//!
//! Every rule a move must satisfy is a named precondition. The composite
//! [`LegalMove`] evaluates them in a fixed order and stops at the first
//! failure; later checks rely on earlier ones (the path walk assumes both
//! endpoints are on the board and the move is straight).

use super::super::action::{Move, MoveError, MoveResult};
use super::super::types::{GameState, Piece};
use tracing::{debug, instrument};

/// A home row may hold at most this many of its owner's pieces before a
/// further piece is refused entry.
pub const HOME_ROW_REBUILD_THRESHOLD: usize = 4;

/// Decides whether a move is legal in a given state.
///
/// Closures with the matching signature implement this trait, so tests
/// can plug in stand-in rule sets.
pub trait MoveLegalityDecider {
    /// Validates `mov` against `state` without changing anything.
    fn decide(&self, mov: &Move, state: &GameState) -> MoveResult;
}

impl<F> MoveLegalityDecider for F
where
    F: Fn(&Move, &GameState) -> MoveResult,
{
    fn decide(&self, mov: &Move, state: &GameState) -> MoveResult {
        self(mov, state)
    }
}

/// A single rule checked before a move is applied.
pub trait Precondition {
    /// Returns the rejection reason if the rule does not hold.
    fn check(mov: &Move, state: &GameState) -> MoveResult;
}

/// Precondition: all four coordinates are on the board.
pub struct WithinBoard;

impl Precondition for WithinBoard {
    fn check(mov: &Move, _state: &GameState) -> MoveResult {
        if mov.from.is_on_board() && mov.to.is_on_board() {
            Ok(())
        } else {
            Err(MoveError::OutsideBoard)
        }
    }
}

/// Precondition: there is a piece on the source square.
pub struct SourceOccupied;

impl Precondition for SourceOccupied {
    fn check(mov: &Move, state: &GameState) -> MoveResult {
        if state.board().get(mov.from).is_some_and(Piece::is_occupied) {
            Ok(())
        } else {
            Err(MoveError::NoPieceMoved)
        }
    }
}

/// Precondition: the piece on the source square belongs to the current phase.
pub struct PieceMayMove;

impl Precondition for PieceMayMove {
    fn check(mov: &Move, state: &GameState) -> MoveResult {
        let piece = state.board().get(mov.from).unwrap_or_default();
        if state.turn().may_move(piece) {
            Ok(())
        } else {
            Err(MoveError::WrongPieceMoved)
        }
    }
}

/// Precondition: the move follows one of the eight compass directions.
pub struct StraightLine;

impl Precondition for StraightLine {
    fn check(mov: &Move, _state: &GameState) -> MoveResult {
        if mov.is_straight() {
            Ok(())
        } else {
            Err(MoveError::NotAStraightLine)
        }
    }
}

/// Precondition: the destination square is empty.
///
/// A zero-length move fails here, because the moving piece still
/// occupies its own destination.
pub struct TargetFree;

impl Precondition for TargetFree {
    fn check(mov: &Move, state: &GameState) -> MoveResult {
        if state.board().is_empty(mov.to) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied)
        }
    }
}

/// Precondition: a player may not bring all of their pieces back home.
///
/// The move is refused when it lands one of the player's pieces on their
/// home row while that row already holds four of them.
pub struct NoHomeRowRebuild;

impl Precondition for NoHomeRowRebuild {
    fn check(mov: &Move, state: &GameState) -> MoveResult {
        let piece = state.board().get(mov.from).unwrap_or_default();
        let Some(owner) = piece.owner() else {
            return Ok(());
        };

        let home_row = owner.home_row();
        if mov.to.y == home_row
            && state.board().count_on_row(piece, home_row) >= HOME_ROW_REBUILD_THRESHOLD
        {
            Err(MoveError::HomeRowRebuild)
        } else {
            Ok(())
        }
    }
}

/// Precondition: every square strictly between source and destination is empty.
pub struct ClearPath;

impl Precondition for ClearPath {
    fn check(mov: &Move, state: &GameState) -> MoveResult {
        if mov.path().all(|square| state.board().is_empty(square)) {
            Ok(())
        } else {
            Err(MoveError::CannotJumpPiece)
        }
    }
}

/// Precondition: the piece slides until blocked.
///
/// The square one step past the destination must be off the board or
/// occupied.
pub struct StopsAtObstacle;

impl Precondition for StopsAtObstacle {
    fn check(mov: &Move, state: &GameState) -> MoveResult {
        match state.board().get(mov.beyond()) {
            Some(Piece::None) => Err(MoveError::MustMoveToObstacle),
            Some(_) | None => Ok(()),
        }
    }
}

/// Composite precondition: all Neutrino movement rules, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state), fields(turn = ?state.turn()))]
    pub fn check(mov: &Move, state: &GameState) -> MoveResult {
        let result = WithinBoard::check(mov, state)
            .and_then(|()| SourceOccupied::check(mov, state))
            .and_then(|()| PieceMayMove::check(mov, state))
            .and_then(|()| StraightLine::check(mov, state))
            .and_then(|()| TargetFree::check(mov, state))
            .and_then(|()| NoHomeRowRebuild::check(mov, state))
            .and_then(|()| ClearPath::check(mov, state))
            .and_then(|()| StopsAtObstacle::check(mov, state));

        if let Err(reason) = result {
            debug!(?reason, "Move rejected");
        }
        result
    }
}

/// The standard Neutrino move rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutrinoMoveDecider;

impl MoveLegalityDecider for NeutrinoMoveDecider {
    fn decide(&self, mov: &Move, state: &GameState) -> MoveResult {
        LegalMove::check(mov, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Coord, TurnState};

    fn state_with(pieces: &[(i32, i32, Piece)], turn: TurnState) -> GameState {
        let mut board = Board::empty();
        for &(x, y, piece) in pieces {
            board.set(Coord::new(x, y), piece).unwrap();
        }
        GameState::new(board, turn)
    }

    #[test]
    fn test_within_board() {
        let state = GameState::default();
        assert!(WithinBoard::check(&Move::new(0, 0, 4, 4), &state).is_ok());
        assert_eq!(
            WithinBoard::check(&Move::new(0, 0, 0, -1), &state),
            Err(MoveError::OutsideBoard)
        );
        assert_eq!(
            WithinBoard::check(&Move::new(5, 0, 0, 0), &state),
            Err(MoveError::OutsideBoard)
        );
    }

    #[test]
    fn test_source_occupied() {
        let state = GameState::default();
        assert!(SourceOccupied::check(&Move::new(2, 2, 2, 3), &state).is_ok());
        assert_eq!(
            SourceOccupied::check(&Move::new(2, 3, 2, 1), &state),
            Err(MoveError::NoPieceMoved)
        );
    }

    #[test]
    fn test_piece_may_move_per_phase() {
        let state = state_with(&[(1, 1, Piece::Player2)], TurnState::PlayerOneMovePiece);
        assert_eq!(
            PieceMayMove::check(&Move::new(1, 1, 0, 0), &state),
            Err(MoveError::WrongPieceMoved)
        );

        let state = state_with(&[(1, 1, Piece::Neutrino)], TurnState::PlayerTwoMoveNeutrino);
        assert!(PieceMayMove::check(&Move::new(1, 1, 0, 0), &state).is_ok());
    }

    #[test]
    fn test_home_row_threshold_counts_only_own_pieces() {
        let state = state_with(
            &[
                (0, 0, Piece::Player1),
                (1, 0, Piece::Player2),
                (2, 0, Piece::Player1),
                (3, 0, Piece::Player1),
                (4, 4, Piece::Player1),
            ],
            TurnState::PlayerOneMovePiece,
        );
        assert!(NoHomeRowRebuild::check(&Move::new(4, 4, 4, 0), &state).is_ok());
    }

    #[test]
    fn test_home_row_guard_ignores_neutrino() {
        let state = state_with(
            &[
                (0, 0, Piece::Player1),
                (1, 0, Piece::Player1),
                (2, 0, Piece::Player1),
                (3, 0, Piece::Player1),
                (4, 4, Piece::Neutrino),
            ],
            TurnState::PlayerOneMoveNeutrino,
        );
        assert!(NoHomeRowRebuild::check(&Move::new(4, 4, 4, 0), &state).is_ok());
    }

    #[test]
    fn test_stops_at_obstacle_accepts_edge_and_piece() {
        let state = state_with(
            &[(3, 3, Piece::Player2), (1, 1, Piece::Player1)],
            TurnState::PlayerTwoMovePiece,
        );
        assert!(StopsAtObstacle::check(&Move::new(3, 3, 2, 2), &state).is_ok());
        assert!(StopsAtObstacle::check(&Move::new(3, 3, 4, 4), &state).is_ok());
        assert_eq!(
            StopsAtObstacle::check(&Move::new(3, 3, 3, 2), &state),
            Err(MoveError::MustMoveToObstacle)
        );
    }

    #[test]
    fn test_zero_length_move_is_square_occupied() {
        let state = state_with(&[(3, 3, Piece::Player1)], TurnState::PlayerOneMovePiece);
        assert_eq!(
            LegalMove::check(&Move::new(3, 3, 3, 3), &state),
            Err(MoveError::SquareOccupied)
        );
    }

    #[test]
    fn test_closure_is_a_decider() {
        let always = |_: &Move, _: &GameState| -> MoveResult { Err(MoveError::HomeRowRebuild) };
        assert_eq!(
            always.decide(&Move::new(0, 0, 1, 1), &GameState::default()),
            Err(MoveError::HomeRowRebuild)
        );
    }
}
