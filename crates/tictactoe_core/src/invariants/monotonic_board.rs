//! Monotonic board invariant: marks are added one per turn.

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: First has played as often as Second, or once more.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let first = board.count(Mark::First);
        let second = board.count(Mark::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First has as many marks as Second, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 2)] {
            engine.attempt_move(row, col).unwrap();
            assert!(MonotonicBoardInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut engine = GameEngine::new();
        engine.corrupt_for_test(Position::Center, Mark::Second);
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
