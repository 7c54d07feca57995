//! Tests for headless play.

use tictactoe_core::{Mark, Outcome};
use tictactoe_tui::{TuiConfig, run_play};
use unicode_width::UnicodeWidthStr;

fn play(moves: &[(usize, usize)], json: bool) -> (String, tictactoe_core::Snapshot) {
    let mut out = Vec::new();
    let snapshot = run_play(&TuiConfig::default(), moves, json, &mut out)
        .expect("play succeeds");
    (String::from_utf8(out).expect("utf-8 output"), snapshot)
}

#[test]
fn test_transcript_for_first_player_win() {
    let moves = [(0, 0), (2, 0), (1, 1), (2, 1), (0, 1), (1, 0), (0, 2)];
    let (text, snapshot) = play(&moves, false);

    assert_eq!(snapshot.outcome, Outcome::FirstWins);
    assert!(text.starts_with("X -> (0, 0)\nO -> (2, 0)\n"));
    assert!(text.contains("X|X|X\n-+-+-\nO|X|6\n-+-+-\nO|O|9"));
    assert!(text.trim_end().ends_with("Player X wins!"));
}

#[test]
fn test_rejected_moves_are_reported_and_skipped() {
    let (text, snapshot) = play(&[(1, 1), (1, 1), (5, 0), (0, 0)], false);

    assert!(text.contains("rejected (1, 1): Center (1, 1) is already occupied"));
    assert!(text.contains("rejected (5, 0): (5, 0) is off the board"));
    assert_eq!(snapshot.history.len(), 2);
    assert_eq!(snapshot.board.get_at(0, 0), Some(Mark::Second));
    assert!(text.trim_end().ends_with("Current Player: X"));
}

#[test]
fn test_moves_after_win_rejected() {
    let (text, snapshot) = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (2, 2)], false);

    assert!(text.contains("rejected (2, 2): Game is already over (First wins)"));
    assert_eq!(snapshot.history.len(), 5);
}

#[test]
fn test_json_output() {
    let (text, snapshot) = play(&[(1, 1)], true);

    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["outcome"], "InProgress");
    assert_eq!(value["turn"], "Second");
    assert_eq!(snapshot.turn, Mark::Second);
    assert!(!text.contains("->"));
}

#[test]
fn test_empty_script() {
    let (text, snapshot) = play(&[], false);
    assert!(snapshot.history.is_empty());
    assert!(text.contains("1|2|3"));
    assert!(text.trim_end().ends_with("Current Player: X"));
}

#[test]
fn test_wide_symbols_keep_grid_aligned() {
    let text = "first_symbol = \"❌\"\nsecond_symbol = \"⭕\"";
    let config = TuiConfig::from_toml_str(text).expect("valid config");
    let mut out = Vec::new();
    run_play(&config, &[(0, 0), (1, 1)], false, &mut out)
        .expect("play succeeds");
    let text = String::from_utf8(out).expect("utf-8 output");

    let grid: Vec<&str> = text.lines().skip(3).take(5).collect();
    assert_eq!(grid[0], "❌|2 |3 ");
    assert_eq!(grid[2], "4 |⭕|6 ");
    assert!(grid.iter().all(|line| line.width() == 8), "{grid:?}");
}
