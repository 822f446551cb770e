// Integration tests for the replay engine against recorded fixtures

use outwit::replay::ReplayEngine;
use outwit::types::{Coord, Team};
use std::path::PathBuf;

/// Helper function to get the path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[test]
fn test_load_short_game_fixture() {
    let engine = ReplayEngine::new(false);
    let entries = engine
        .load_log_file(fixture_path("short_game.jsonl"))
        .expect("Failed to load short_game.jsonl");
    assert_eq!(entries.len(), 4, "Expected setup plus 3 moves");
}

#[test]
fn test_replay_short_game_all_moves_legal() {
    let engine = ReplayEngine::new(false);
    let entries = engine.load_log_file(fixture_path("short_game.jsonl")).unwrap();
    let (turns, chips) = engine.replay_all(&entries).unwrap();

    assert_eq!(turns.len(), 3);
    for t in &turns {
        assert!(t.legal, "turn {} flagged illegal", t.turn);
    }

    let stats = engine.generate_stats(&turns, &chips);
    assert_eq!(stats.total_turns, 3);
    assert_eq!(stats.legal, 3);
    assert_eq!(stats.illegal, 0);
    assert!((stats.legality_rate - 100.0).abs() < f64::EPSILON);
    // the fixture fields one chip per team, so nobody can win
    assert_eq!(stats.winner, None);

    // final positions follow from the moves
    assert!(chips.iter().any(|c| c.pos() == Coord::new(2, 9) && c.team() == Team::Dark));
    assert!(chips.iter().any(|c| c.pos() == Coord::new(8, 0) && c.team() == Team::Light));
}

#[test]
fn test_replay_flags_the_diagonal_slide_of_a_regular_chip() {
    let engine = ReplayEngine::new(false);
    let entries = engine.load_log_file(fixture_path("illegal_move.jsonl")).unwrap();
    let (turns, chips) = engine.replay_all(&entries).unwrap();

    assert_eq!(turns.len(), 1);
    assert!(!turns[0].legal);

    let stats = engine.generate_stats(&turns, &chips);
    assert_eq!(stats.illegal, 1);
    // the move still executes so later entries stay in sync
    assert_eq!(chips[0].pos(), Coord::new(1, 1));
}

#[test]
fn test_validate_expected_moves_against_fixture() {
    let engine = ReplayEngine::new(false);
    let entries = engine.load_log_file(fixture_path("short_game.jsonl")).unwrap();
    let (turns, _) = engine.replay_all(&entries).unwrap();

    let ok = engine.validate_expected_moves(
        &turns,
        &[(0, Coord::new(0, 9)), (1, Coord::new(8, 0)), (2, Coord::new(2, 9))],
    );
    assert!(ok.is_empty(), "unexpected mismatches: {:?}", ok);

    let bad = engine.validate_expected_moves(&turns, &[(1, Coord::new(8, 1))]);
    assert_eq!(bad.len(), 1);
    assert!(bad[0].contains("Turn 1"));
}

#[test]
fn test_missing_fixture_is_an_error() {
    let engine = ReplayEngine::new(false);
    assert!(engine.load_log_file(fixture_path("does_not_exist.jsonl")).is_err());
}
