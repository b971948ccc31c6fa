//! Tests for replaying scenario files.

use neutrino_games::{Move, MoveError, NeutrinoConfig, Piece, Scenario, TurnState};
use std::io::Write;
use tempfile::NamedTempFile;

/// Neutrino one step from player one's home row, player one to move it.
const NEAR_HOME_ROW: &str = r#"
turn = "PlayerOneMoveNeutrino"
rows = ["11.11", "..N..", "..1..", ".....", "22222"]
moves = [[2, 1, 2, 0], [2, 2, 2, 3]]
"#;

#[test]
fn test_replay_opening_moves() {
    let scenario = Scenario::from_toml("moves = [[2, 2, 2, 1], [0, 0, 0, 3]]").unwrap();
    let replay = scenario.replay(&NeutrinoConfig::default()).unwrap();

    assert_eq!(replay.steps.len(), 2);
    assert_eq!(replay.steps[0].result, Ok(()));
    assert_eq!(replay.steps[0].turn, TurnState::PlayerOneMovePiece);
    assert_eq!(replay.steps[1].result, Ok(()));
    assert_eq!(replay.steps[1].turn, TurnState::PlayerTwoMoveNeutrino);
    assert_eq!(replay.game.piece_at(0, 3), Piece::Player1);
    assert_eq!(replay.game.history().len(), 2);
}

#[test]
fn test_rejected_move_is_recorded_and_skipped() {
    let scenario = Scenario::from_toml("moves = [[2, 2, 1, 2], [2, 2, 2, 1]]").unwrap();
    let replay = scenario.replay(&NeutrinoConfig::default()).unwrap();

    assert_eq!(replay.steps[0].mov, Move::new(2, 2, 1, 2));
    assert_eq!(replay.steps[0].result, Err(MoveError::MustMoveToObstacle));
    assert_eq!(replay.steps[0].turn, TurnState::PlayerOneMoveNeutrino);
    assert_eq!(replay.steps[1].result, Ok(()));
    assert_eq!(replay.game.history(), &[Move::new(2, 2, 2, 1)]);
}

#[test]
fn test_moves_after_win_reach_the_rules_by_default() {
    let scenario = Scenario::from_toml(NEAR_HOME_ROW).unwrap();
    let replay = scenario.replay(&NeutrinoConfig::default()).unwrap();

    assert_eq!(replay.steps[0].turn, TurnState::PlayerTwoWin);
    assert_eq!(replay.steps[1].result, Err(MoveError::WrongPieceMoved));
    assert_eq!(replay.game.turn(), TurnState::PlayerTwoWin);
}

#[test]
fn test_moves_after_win_rejected_when_configured() {
    let config = NeutrinoConfig::from_toml("reject_moves_after_win = true").unwrap();
    let scenario = Scenario::from_toml(NEAR_HOME_ROW).unwrap();
    let replay = scenario.replay(&config).unwrap();

    assert_eq!(replay.steps[1].result, Err(MoveError::GameAlreadyOver));
    assert_eq!(replay.game.history().len(), 1);
}

#[test]
fn test_short_row_is_a_scenario_error() {
    let scenario =
        Scenario::from_toml(r#"rows = ["1111", "..N..", ".....", ".....", "22222"]"#).unwrap();
    let err = scenario.game(&NeutrinoConfig::default()).unwrap_err();
    assert!(err.message.starts_with("Invalid board"));
}

#[test]
fn test_seeded_board_needs_exactly_one_neutrino() {
    let config = NeutrinoConfig::default();
    let two = Scenario::from_toml(
        r#"
rows = ["11111", ".....", "..N..", "N....", "22222"]
moves = [[2, 2, 2, 1]]
"#,
    )
    .unwrap();
    let none =
        Scenario::from_toml(r#"rows = ["11111", ".....", ".....", ".....", "22222"]"#).unwrap();

    let err = two.game(&config).unwrap_err();
    assert_eq!(err.message, "Invalid board: Exactly one neutrino is on the board");
    assert!(two.replay(&config).is_err());
    assert!(none.game(&config).is_err());
}

#[test]
fn test_seeded_board_caps_pieces_per_player() {
    let scenario =
        Scenario::from_toml(r#"rows = ["11111", "1....", "..N..", ".....", "22222"]"#).unwrap();
    let err = scenario.game(&NeutrinoConfig::default()).unwrap_err();
    assert_eq!(err.message, "Invalid board: Each player has at most five pieces");
}

#[test]
fn test_unknown_turn_is_a_parse_error() {
    let err = Scenario::from_toml("turn = \"PlayerThreeMovePiece\"").unwrap_err();
    assert!(err.message.starts_with("Failed to parse scenario"));
}

#[test]
fn test_scenario_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", NEAR_HOME_ROW).unwrap();

    let scenario = Scenario::from_file(file.path()).unwrap();
    assert_eq!(scenario.turn, Some(TurnState::PlayerOneMoveNeutrino));
    assert_eq!(scenario.moves().count(), 2);
}
