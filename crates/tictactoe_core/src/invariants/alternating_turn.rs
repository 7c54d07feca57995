//! Alternating turn invariant: First, Second, First, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: players alternate, First moves first, and the turn marker
/// agrees with the history while the game is running.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if history.first().is_some_and(|m| m.mark != Mark::First) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark != w[1].mark.opponent()) {
            return false;
        }

        if engine.current_outcome().is_terminal() {
            return true;
        }

        let expected = if history.len() % 2 == 0 {
            Mark::First
        } else {
            Mark::Second
        };
        engine.current_turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}
