//! History consistency invariant: the board is exactly the replayed history.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: each recorded move is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let history = engine.history();
        let occupied = 9 - board.count(crate::Mark::Empty);

        occupied == history.len() && history.iter().all(|m| board.get(m.position) == m.mark)
    }

    fn description() -> &'static str {
        "Board matches move history"
    }
}
