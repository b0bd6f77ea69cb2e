//! Snapshot serialization tests

use tui_tictactoe::core::{GameEngine, GameSnapshot};
use tui_tictactoe::types::Symbol;

#[test]
fn test_snapshot_json_roundtrip() {
    let mut engine = GameEngine::new();
    engine.make_move(4, None);
    engine.make_move(0, None);

    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).expect("snapshot should serialize");
    let back: GameSnapshot = serde_json::from_str(&json).expect("snapshot should deserialize");

    assert_eq!(back, snapshot);
}

#[test]
fn test_snapshot_json_fields() {
    let mut engine = GameEngine::new();
    for pos in [0, 3, 1, 4, 2] {
        engine.make_move(pos, None);
    }

    let value: serde_json::Value =
        serde_json::to_value(engine.snapshot()).expect("snapshot should serialize");

    assert_eq!(value["board_size"], 3);
    assert_eq!(value["game_active"], false);
    assert_eq!(value["winner"], "X");
    assert_eq!(value["total_games"], 1);
    assert_eq!(value["winning_line"], serde_json::json!([0, 1, 2]));
}

#[test]
fn test_finished_game_snapshot_carries_winner() {
    let mut engine = GameEngine::new();
    engine.apply_misere_mode(true);
    for pos in [0, 3, 1, 4, 2] {
        engine.make_move(pos, None);
    }

    let snapshot = engine.snapshot();
    assert!(!snapshot.game_active);
    assert_eq!(snapshot.winner, Some(Symbol::O));
    assert_eq!(snapshot.scores[Symbol::O.index()], 1);
}
