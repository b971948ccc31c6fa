//! Enumeration of the moves available in a position.

use super::super::action::Move;
use super::super::types::{COLUMNS, Coord, GameState, Piece};
use super::DIRECTIONS;
use super::legality::MoveLegalityDecider;
use tracing::instrument;

/// Lists every straight-line move from an occupied square that `decider`
/// accepts in `state`.
///
/// Candidates are ordered by source square (column by column), then by
/// direction, then by distance.
#[instrument(skip(decider, state), fields(turn = ?state.turn()))]
pub fn legal_moves<L>(decider: &L, state: &GameState) -> Vec<Move>
where
    L: MoveLegalityDecider + ?Sized,
{
    Coord::all()
        .filter(|&from| state.board().get(from).is_some_and(Piece::is_occupied))
        .flat_map(|from| {
            DIRECTIONS.iter().flat_map(move |&step| {
                (1..COLUMNS)
                    .map(move |distance| from + step * distance)
                    .take_while(|to| to.is_on_board())
                    .map(move |to| Move::between(from, to))
            })
        })
        .filter(|mov| decider.decide(mov, state).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::NeutrinoMoveDecider;
    use crate::types::{Board, TurnState};

    #[test]
    fn test_opening_neutrino_moves() {
        let state = GameState::default();
        let moves = legal_moves(&NeutrinoMoveDecider, &state);

        // The neutrino slides to the wall or stops next to a home row.
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.from == Coord::new(2, 2)));
        assert!(moves.contains(&Move::new(2, 2, 2, 1)));
        assert!(moves.contains(&Move::new(2, 2, 0, 2)));
        assert!(moves.contains(&Move::new(2, 2, 1, 1)));
    }

    #[test]
    fn test_no_moves_in_terminal_state() {
        let state = GameState::new(Board::starting(), TurnState::PlayerOneWin);
        assert!(legal_moves(&NeutrinoMoveDecider, &state).is_empty());
    }
}
