//! First-class action types for Neutrino.
//!
//! A move is the player's intent, expressed in raw coordinates. It can be
//! validated independently of execution and is only trusted after the
//! legality decider has accepted it.

use super::types::Coord;
use serde::{Deserialize, Serialize};

/// A request to slide the piece at `from` to `to`.
///
/// Coordinates are unconstrained: they may be negative or beyond the
/// board until validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the piece is taken from.
    pub from: Coord,
    /// Square the piece is put on.
    pub to: Coord,
}

impl Move {
    /// Creates a new move from raw coordinates.
    pub fn new(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> Self {
        Self {
            from: Coord::new(from_x, from_y),
            to: Coord::new(to_x, to_y),
        }
    }

    /// Creates a move between two coordinates.
    pub fn between(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Displacement from source to destination.
    pub fn delta(&self) -> Coord {
        Coord::new(self.to.x - self.from.x, self.to.y - self.from.y)
    }

    /// Unit step along the move's direction; each component is -1, 0 or 1.
    pub fn unit_step(&self) -> Coord {
        let delta = self.delta();
        Coord::new(delta.x.signum(), delta.y.signum())
    }

    /// Number of unit steps from source to destination.
    pub fn length(&self) -> i32 {
        let delta = self.delta();
        delta.x.abs().max(delta.y.abs())
    }

    /// Returns true for horizontal, vertical and exact diagonal moves.
    ///
    /// A zero-length move counts as straight.
    pub fn is_straight(&self) -> bool {
        let delta = self.delta();
        delta.x == 0 || delta.y == 0 || delta.x.abs() == delta.y.abs()
    }

    /// Squares strictly between source and destination, in travel order.
    ///
    /// Only meaningful for straight moves.
    pub fn path(&self) -> impl Iterator<Item = Coord> + use<> {
        let from = self.from;
        let step = self.unit_step();
        (1..self.length()).map(move |n| from + step * n)
    }

    /// The square one unit step past the destination.
    pub fn beyond(&self) -> Coord {
        self.to + self.unit_step()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Reason a move was rejected.
///
/// The display text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveError {
    /// A coordinate of the move lies outside the board.
    #[display("You must remain inside the board with your move")]
    OutsideBoard,

    /// The source square is empty.
    #[display("You are not allowed to move from an empty square")]
    NoPieceMoved,

    /// The piece on the source square may not move in this phase.
    #[display("You are not allowed to move this piece")]
    WrongPieceMoved,

    /// The move is not horizontal, vertical or diagonal.
    #[display("You must move the piece in a straight line")]
    NotAStraightLine,

    /// The destination square is occupied.
    #[display("You cannot move to a square that is occupied")]
    SquareOccupied,

    /// The move would put all of a player's pieces back on their home row.
    #[display("You are not allowed to have all five of your pieces back on your home row")]
    HomeRowRebuild,

    /// A piece stands between source and destination.
    #[display("You cannot jump over another piece")]
    CannotJumpPiece,

    /// The piece stopped before reaching a wall or another piece.
    #[display("You must move the piece until you reach an obstacle")]
    MustMoveToObstacle,

    /// The game has already been won.
    #[display("The game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

/// Outcome of validating or applying a move.
pub type MoveResult = Result<(), MoveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_step_and_length() {
        let mov = Move::new(4, 4, 1, 1);
        assert_eq!(mov.unit_step(), Coord::new(-1, -1));
        assert_eq!(mov.length(), 3);
        assert_eq!(mov.beyond(), Coord::new(0, 0));
    }

    #[test]
    fn test_path_excludes_endpoints() {
        let mov = Move::new(3, 2, 3, 0);
        assert_eq!(mov.path().collect::<Vec<_>>(), vec![Coord::new(3, 1)]);

        let adjacent = Move::new(0, 0, 1, 1);
        assert_eq!(adjacent.path().count(), 0);
    }

    #[test]
    fn test_straightness() {
        assert!(Move::new(0, 0, 4, 0).is_straight());
        assert!(Move::new(0, 0, 0, 3).is_straight());
        assert!(Move::new(4, 0, 0, 4).is_straight());
        assert!(Move::new(2, 2, 2, 2).is_straight());
        assert!(!Move::new(4, 4, 2, 0).is_straight());
        assert!(!Move::new(0, 1, 3, 0).is_straight());
    }

    #[test]
    fn test_zero_length_move_has_no_direction() {
        let mov = Move::new(3, 3, 3, 3);
        assert_eq!(mov.unit_step(), Coord::new(0, 0));
        assert_eq!(mov.beyond(), Coord::new(3, 3));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CannotJumpPiece.to_string(),
            "You cannot jump over another piece"
        );
        assert_eq!(
            MoveError::OutsideBoard.to_string(),
            "You must remain inside the board with your move"
        );
    }
}
