//! Line-oriented play session.
//!
//! The session is the game's outer collaborator: it turns text lines into
//! move requests, prints the board and turn status after every accepted
//! move, prints the rejection reason otherwise, and stops taking moves
//! once a player has won.

use crate::config::NeutrinoConfig;
use derive_more::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strictly_neutrino::{Game, Move, TurnState};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands:
  fx fy tx ty   move the piece at (fx, fy) to (tx, ty)
  board         show the board
  hint          list the moves available
  help          show this help
  quit          leave the game";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Attempt a move.
    Move(Move),
    /// Print the board and status.
    Board,
    /// List available moves.
    Hint,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unrecognised input {:?}; type \"help\" for commands", _0)]
pub struct CommandError(String);

impl std::error::Error for CommandError {}

/// Parses `board`, `hint`, `help`, `quit`, or four integers separated by
/// whitespace and/or commas.
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line.to_lowercase().as_str() {
            "board" | "b" => return Ok(Command::Board),
            "hint" | "moves" => return Ok(Command::Hint),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        let numbers = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse::<i32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| CommandError(line.to_string()))?;

        match numbers.as_slice() {
            &[from_x, from_y, to_x, to_y] => {
                Ok(Command::Move(Move::new(from_x, from_y, to_x, to_y)))
            }
            _ => Err(CommandError(line.to_string())),
        }
    }
}

/// An interactive game reading commands from `input` and writing to `output`.
pub struct TerminalSession<R, W> {
    game: Game,
    input: R,
    output: W,
    show_hints: bool,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    /// Creates a session on a fresh game.
    #[instrument(skip_all)]
    pub fn new(config: &NeutrinoConfig, input: R, output: W) -> Self {
        Self::with_game(
            Game::new().reject_moves_after_win(*config.reject_moves_after_win()),
            config,
            input,
            output,
        )
    }

    /// Creates a session on an existing game.
    pub fn with_game(game: Game, config: &NeutrinoConfig, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
            show_hints: *config.show_hints(),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until a player wins, the user quits, or input ends.
    ///
    /// Returns the final turn phase.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<TurnState> {
        info!("Session started");
        self.print_position()?;

        let mut line = String::new();
        while !self.game.is_over() {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }

        let turn = self.game.turn();
        info!(?turn, moves = self.game.history().len(), "Session ended");
        Ok(turn)
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Move(mov) => match self.game.apply_move(mov) {
                Ok(()) => {
                    self.print_position()?;
                    if self.show_hints && !self.game.is_over() {
                        let count = self.game.legal_moves().len();
                        writeln!(self.output, "{} moves available", count)?;
                    }
                }
                Err(reason) => {
                    warn!(%mov, %reason, "Move rejected");
                    writeln!(self.output, "{}", reason)?;
                }
            },
            Command::Board => self.print_position()?,
            Command::Hint => {
                let moves = self.game.legal_moves();
                if moves.is_empty() {
                    writeln!(self.output, "No moves available")?;
                }
                for mov in moves {
                    writeln!(
                        self.output,
                        "{} {} {} {}",
                        mov.from.x, mov.from.y, mov.to.x, mov.to.y
                    )?;
                }
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn print_position(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.game.board())?;
        writeln!(self.output, "{}", self.game.turn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_separators() {
        let expected = Command::Move(Move::new(2, 2, 2, 1));
        assert_eq!("2 2 2 1".parse::<Command>(), Ok(expected));
        assert_eq!("2,2,2,1".parse::<Command>(), Ok(expected));
        assert_eq!(" 2, 2  2,1 ".parse::<Command>(), Ok(expected));
    }

    #[test]
    fn test_parse_negative_coordinates() {
        assert_eq!(
            "1 1 -1 1".parse::<Command>(),
            Ok(Command::Move(Move::new(1, 1, -1, 1)))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("QUIT".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("hint".parse::<Command>(), Ok(Command::Hint));
        assert_eq!("board".parse::<Command>(), Ok(Command::Board));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("2 2 2".parse::<Command>().is_err());
        assert!("move north".parse::<Command>().is_err());
    }
}
