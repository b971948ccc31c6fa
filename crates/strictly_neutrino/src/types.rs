//! Core domain types for Neutrino.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};
use std::str::FromStr;
use tracing::instrument;

/// Number of columns on the board.
pub const COLUMNS: i32 = 5;
/// Number of rows on the board.
pub const ROWS: i32 = 5;
/// Row where player one starts and which player two must reach with the neutrino.
pub const PLAYER_ONE_HOME_ROW: i32 = 0;
/// Row where player two starts and which player one must reach with the neutrino.
pub const PLAYER_TWO_HOME_ROW: i32 = 4;

/// A pair of board coordinates.
///
/// Coordinates are signed so that unvalidated move requests and the
/// square beyond the board edge can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({x}, {y})")]
pub struct Coord {
    /// Column, 0 at the left.
    pub x: i32,
    /// Row, 0 is player one's home row.
    pub y: i32,
}

impl Coord {
    /// Creates a coordinate pair.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true if the coordinate lies on the 5x5 board.
    pub fn is_on_board(self) -> bool {
        (0..COLUMNS).contains(&self.x) && (0..ROWS).contains(&self.y)
    }

    /// Every on-board coordinate, column by column.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..COLUMNS).flat_map(|x| (0..ROWS).map(move |y| Coord::new(x, y)))
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player one (moves first, home row y=0).
    #[display("Player one")]
    One,
    /// Player two (home row y=4).
    #[display("Player two")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row this player starts on.
    pub fn home_row(self) -> i32 {
        match self {
            Player::One => PLAYER_ONE_HOME_ROW,
            Player::Two => PLAYER_TWO_HOME_ROW,
        }
    }

    /// The piece kind owned by this player.
    pub fn piece(self) -> Piece {
        match self {
            Player::One => Piece::Player1,
            Player::Two => Piece::Player2,
        }
    }

    /// The terminal state in which this player has won.
    pub fn win_state(self) -> TurnState {
        match self {
            Player::One => TurnState::PlayerOneWin,
            Player::Two => TurnState::PlayerTwoWin,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Piece {
    /// Empty square.
    #[default]
    None,
    /// The shared neutrino.
    Neutrino,
    /// A piece owned by player one.
    Player1,
    /// A piece owned by player two.
    Player2,
}

impl Piece {
    /// Returns the owning player, if the piece belongs to one.
    pub fn owner(self) -> Option<Player> {
        match self {
            Piece::Player1 => Some(Player::One),
            Piece::Player2 => Some(Player::Two),
            Piece::None | Piece::Neutrino => None,
        }
    }

    /// Returns true for anything but an empty square.
    pub fn is_occupied(self) -> bool {
        self != Piece::None
    }

    /// Single-character notation used by the board text format.
    pub fn symbol(self) -> char {
        match self {
            Piece::None => '.',
            Piece::Neutrino => 'N',
            Piece::Player1 => '1',
            Piece::Player2 => '2',
        }
    }

    /// Parses the single-character notation.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Piece::None),
            'N' | 'n' => Some(Piece::Neutrino),
            '1' => Some(Piece::Player1),
            '2' => Some(Piece::Player2),
            _ => None,
        }
    }
}

/// Turn phase of the game.
///
/// The first four states cycle in declaration order; the two win states
/// are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum TurnState {
    /// Player one must move the neutrino.
    #[display("Player one, move the neutrino")]
    PlayerOneMoveNeutrino,
    /// Player one must move one of their own pieces.
    #[display("Player one, move one of your pieces")]
    PlayerOneMovePiece,
    /// Player two must move the neutrino.
    #[display("Player two, move the neutrino")]
    PlayerTwoMoveNeutrino,
    /// Player two must move one of their own pieces.
    #[display("Player two, move one of your pieces")]
    PlayerTwoMovePiece,
    /// Player one has won.
    #[display("Player one wins!")]
    PlayerOneWin,
    /// Player two has won.
    #[display("Player two wins!")]
    PlayerTwoWin,
}

impl TurnState {
    /// Returns the following phase of the four-phase cycle.
    ///
    /// Win states map to themselves.
    pub fn next(self) -> Self {
        match self {
            TurnState::PlayerOneMoveNeutrino => TurnState::PlayerOneMovePiece,
            TurnState::PlayerOneMovePiece => TurnState::PlayerTwoMoveNeutrino,
            TurnState::PlayerTwoMoveNeutrino => TurnState::PlayerTwoMovePiece,
            TurnState::PlayerTwoMovePiece => TurnState::PlayerOneMoveNeutrino,
            TurnState::PlayerOneWin | TurnState::PlayerTwoWin => self,
        }
    }

    /// Returns true for the two win states.
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::PlayerOneWin | TurnState::PlayerTwoWin)
    }

    /// Returns the winner, if the game is over.
    pub fn winner(self) -> Option<Player> {
        match self {
            TurnState::PlayerOneWin => Some(Player::One),
            TurnState::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }

    /// Returns the player expected to move, if the game is still running.
    pub fn mover(self) -> Option<Player> {
        match self {
            TurnState::PlayerOneMoveNeutrino | TurnState::PlayerOneMovePiece => Some(Player::One),
            TurnState::PlayerTwoMoveNeutrino | TurnState::PlayerTwoMovePiece => Some(Player::Two),
            TurnState::PlayerOneWin | TurnState::PlayerTwoWin => None,
        }
    }

    /// Returns true if a piece of this kind may be moved in this phase.
    pub fn may_move(self, piece: Piece) -> bool {
        matches!(
            (piece, self),
            (Piece::Player1, TurnState::PlayerOneMovePiece)
                | (Piece::Player2, TurnState::PlayerTwoMovePiece)
                | (
                    Piece::Neutrino,
                    TurnState::PlayerOneMoveNeutrino | TurnState::PlayerTwoMoveNeutrino
                )
        )
    }
}

/// Error raised when building or editing a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// The coordinate is not on the board.
    #[display("Coordinate {} is outside the board", _0)]
    OutOfBounds(Coord),

    /// Board text did not contain exactly five rows.
    #[display("Expected {} rows, found {}", ROWS, _0)]
    RowCount(usize),

    /// A row of board text did not contain exactly five squares.
    #[display("Row {} has {} squares, expected {}", row, len, COLUMNS)]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of squares found.
        len: usize,
    },

    /// Board text contained a character that is not a piece symbol.
    #[display("Unknown piece symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for BoardError {}

/// 5x5 Neutrino board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed as `squares[x][y]`.
    squares: [[Piece; 5]; 5],
}

impl Board {
    /// Creates a board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            squares: [[Piece::None; 5]; 5],
        }
    }

    /// Creates the starting layout: player one fills row 0, player two
    /// fills row 4 and the neutrino sits in the centre.
    #[instrument]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for coord in Coord::all() {
            let piece = if coord.y == PLAYER_ONE_HOME_ROW {
                Piece::Player1
            } else if coord.y == PLAYER_TWO_HOME_ROW {
                Piece::Player2
            } else if coord == Coord::new(2, 2) {
                Piece::Neutrino
            } else {
                Piece::None
            };
            board.squares[coord.x as usize][coord.y as usize] = piece;
        }
        board
    }

    /// Returns the piece at an on-board coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below 5. Use [`Board::get`] for
    /// unvalidated coordinates.
    pub fn piece_at(&self, x: usize, y: usize) -> Piece {
        self.squares[x][y]
    }

    /// Returns the piece at `coord`, or `None` if it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Piece> {
        if coord.is_on_board() {
            Some(self.squares[coord.x as usize][coord.y as usize])
        } else {
            None
        }
    }

    /// Places a piece (or `Piece::None`) at `coord`.
    pub fn set(&mut self, coord: Coord, piece: Piece) -> Result<(), BoardError> {
        if !coord.is_on_board() {
            return Err(BoardError::OutOfBounds(coord));
        }
        self.squares[coord.x as usize][coord.y as usize] = piece;
        Ok(())
    }

    /// Checks if the square at `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Piece::None)
    }

    /// Finds the first square holding `piece`.
    pub fn find(&self, piece: Piece) -> Option<Coord> {
        Coord::all().find(|&coord| self.get(coord) == Some(piece))
    }

    /// Counts squares holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&square| square == piece)
            .count()
    }

    /// Counts squares on row `y` holding `piece`.
    pub fn count_on_row(&self, piece: Piece, y: i32) -> usize {
        (0..COLUMNS)
            .filter(|&x| self.get(Coord::new(x, y)) == Some(piece))
            .count()
    }

    /// Formats the board as a human-readable grid with coordinates.
    ///
    /// Row 0 is printed first so player one's home row is at the top.
    pub fn display(&self) -> String {
        let mut result = String::from("  0 1 2 3 4\n");
        for y in 0..ROWS {
            result.push_str(&y.to_string());
            for x in 0..COLUMNS {
                result.push(' ');
                result.push(self.squares[x as usize][y as usize].symbol());
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Parses five rows of piece symbols (`.`, `N`, `1`, `2`), row 0 first.
///
/// Whitespace inside a row and blank lines are ignored, so both
/// `"11111"` and `"1 1 1 1 1"` describe a full home row.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != ROWS as usize {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != COLUMNS as usize {
                return Err(BoardError::RowLength { row: y, len: row.len() });
            }
            for (x, &symbol) in row.iter().enumerate() {
                let piece = Piece::from_symbol(symbol).ok_or(BoardError::UnknownSymbol(symbol))?;
                board.squares[x][y] = piece;
            }
        }
        Ok(board)
    }
}

/// Board plus current turn phase: everything the rules read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current turn phase.
    turn: TurnState,
}

impl GameState {
    /// Creates a state from an explicit position.
    pub fn new(board: Board, turn: TurnState) -> Self {
        Self { board, turn }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current turn phase.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Moves the piece at `from` to `to`, leaving `from` empty
    /// (unchecked - use `Game::apply_move` for validation).
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) -> Result<Piece, BoardError> {
        if !to.is_on_board() {
            return Err(BoardError::OutOfBounds(to));
        }
        let piece = self.board.get(from).ok_or(BoardError::OutOfBounds(from))?;
        self.board.set(from, Piece::None)?;
        self.board.set(to, piece)?;
        Ok(piece)
    }

    /// Sets the turn phase.
    pub(crate) fn set_turn(&mut self, turn: TurnState) {
        self.turn = turn;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::starting(), TurnState::PlayerOneMoveNeutrino)
    }
}
