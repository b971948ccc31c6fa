//! Game orchestrator for Neutrino.
//!
//! The game owns the board and the turn phase. Rules are injected as two
//! deciders: one validates a move, the other computes the next phase once
//! a move has been applied. Rejected moves leave the game untouched.

use super::action::{Move, MoveError, MoveResult};
use super::invariants::{InvariantSet, NeutrinoInvariants};
use super::rules::{
    self, MoveLegalityDecider, NeutrinoMoveDecider, NeutrinoNextStateDecider, NextStateDecider,
};
use super::types::{Board, GameState, Piece, Player, TurnState};
use tracing::{debug, info, instrument, warn};

/// A Neutrino game driven by pluggable rules.
///
/// `Game` without type parameters uses the standard rules.
#[derive(Debug, Clone)]
pub struct Game<L = NeutrinoMoveDecider, N = NeutrinoNextStateDecider> {
    state: GameState,
    legality: L,
    next_state: N,
    history: Vec<Move>,
    reject_moves_after_win: bool,
}

impl Game {
    /// Creates a game with the starting layout, player one to move the neutrino.
    #[instrument]
    pub fn new() -> Self {
        Self::with_deciders(NeutrinoMoveDecider, NeutrinoNextStateDecider)
    }

    /// Creates a game from an explicit position.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, turn: TurnState) -> Self {
        Self::with_deciders_at(NeutrinoMoveDecider, NeutrinoNextStateDecider, board, turn)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, N> Game<L, N>
where
    L: MoveLegalityDecider,
    N: NextStateDecider,
{
    /// Creates a game with the starting layout and custom rules.
    pub fn with_deciders(legality: L, next_state: N) -> Self {
        Self::with_deciders_at(
            legality,
            next_state,
            Board::starting(),
            TurnState::PlayerOneMoveNeutrino,
        )
    }

    /// Creates a game from an explicit position with custom rules.
    pub fn with_deciders_at(legality: L, next_state: N, board: Board, turn: TurnState) -> Self {
        Self {
            state: GameState::new(board, turn),
            legality,
            next_state,
            history: Vec::new(),
            reject_moves_after_win: false,
        }
    }

    /// When enabled, moves made after a win are rejected with
    /// [`MoveError::GameAlreadyOver`] before the rules are consulted.
    pub fn reject_moves_after_win(mut self, reject: bool) -> Self {
        self.reject_moves_after_win = reject;
        self
    }

    /// Validates and applies a move.
    ///
    /// On rejection the board, turn phase and history are unchanged and
    /// the decider's reason is returned as is.
    #[instrument(skip(self), fields(turn = ?self.state.turn()))]
    pub fn apply_move(&mut self, mov: Move) -> MoveResult {
        if self.reject_moves_after_win && self.state.turn().is_terminal() {
            warn!("Move attempted after the game ended");
            return Err(MoveError::GameAlreadyOver);
        }

        self.legality.decide(&mov, &self.state)?;

        // Custom deciders may accept moves the board cannot represent.
        let piece = self
            .state
            .relocate(mov.from, mov.to)
            .map_err(|_| MoveError::OutsideBoard)?;
        assert_invariants(&self.state);

        let next = self.next_state.decide(&self.state);
        debug!(?piece, from = ?self.state.turn(), to = ?next, "Turn advanced");
        self.state.set_turn(next);
        self.history.push(mov);

        if let Some(winner) = next.winner() {
            info!(%winner, moves = self.history.len(), "Game won");
        }
        Ok(())
    }

    /// Validates and applies a move given as raw coordinates.
    pub fn make_move(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> MoveResult {
        self.apply_move(Move::new(from_x, from_y, to_x, to_y))
    }

    /// Lists the moves the game's rules accept in the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.legality, &self.state)
    }
}

impl<L, N> Game<L, N> {
    /// Returns the board and turn phase.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the current turn phase.
    pub fn turn(&self) -> TurnState {
        self.state.turn()
    }

    /// Returns the piece at an on-board coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below 5.
    pub fn piece_at(&self, x: usize, y: usize) -> Piece {
        self.state.board().piece_at(x, y)
    }

    /// Returns the successfully applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once a player has won.
    pub fn is_over(&self) -> bool {
        self.state.turn().is_terminal()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.state.turn().winner()
    }
}

/// Asserts that all board invariants hold (panics on violation in debug builds).
fn assert_invariants(state: &GameState) {
    let result = NeutrinoInvariants::check_all(state);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(description = %violation.description, "Invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Board invariants violated: {:?}", result);
}
