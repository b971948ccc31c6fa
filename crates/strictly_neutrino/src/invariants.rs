//! First-class invariants for Neutrino.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

use super::types::{COLUMNS, GameState, Piece};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: exactly one neutrino is on the board.
pub struct SingleNeutrinoInvariant;

impl Invariant<GameState> for SingleNeutrinoInvariant {
    fn holds(state: &GameState) -> bool {
        state.board().count(Piece::Neutrino) == 1
    }

    fn description() -> &'static str {
        "Exactly one neutrino is on the board"
    }
}

/// Invariant: no player has more pieces than fit on their home row.
pub struct PieceSupplyInvariant;

impl Invariant<GameState> for PieceSupplyInvariant {
    fn holds(state: &GameState) -> bool {
        let limit = COLUMNS as usize;
        state.board().count(Piece::Player1) <= limit && state.board().count(Piece::Player2) <= limit
    }

    fn description() -> &'static str {
        "Each player has at most five pieces"
    }
}

/// All Neutrino board invariants as a composable set.
pub type NeutrinoInvariants = (SingleNeutrinoInvariant, PieceSupplyInvariant);
