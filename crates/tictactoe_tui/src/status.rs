//! Status text derived from engine state.

use crate::config::Symbols;
use tictactoe_core::{GameEngine, MoveError, Outcome};

/// One-line summary of the game: the winner, a draw, or whose turn it is.
pub fn status_line(engine: &GameEngine, symbols: &Symbols) -> String {
    match engine.current_outcome() {
        Outcome::FirstWins => format!("Player {} wins!", symbols.first),
        Outcome::SecondWins => format!("Player {} wins!", symbols.second),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => format!("Current Player: {}", symbols.of(engine.current_turn())),
    }
}

/// Short explanation of a rejected move.
pub(crate) fn rejection_notice(error: &MoveError) -> String {
    match error {
        MoveError::GameOver(_) => "The game is over. Press r to play again.".to_string(),
        MoveError::CellOccupied(pos) => format!("{} is already taken.", pos.label()),
        MoveError::OutOfBounds { .. } => format!("{}.", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Position;

    #[test]
    fn test_status_in_progress() {
        let symbols = Symbols::default();
        let mut engine = GameEngine::new();
        assert_eq!(status_line(&engine, &symbols), "Current Player: X");
        engine.attempt_move(0, 0).unwrap();
        assert_eq!(status_line(&engine, &symbols), "Current Player: O");
    }

    #[test]
    fn test_status_wins_and_draw() {
        let symbols = Symbols::default();

        let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
        let engine = GameEngine::replay(&moves).unwrap();
        assert_eq!(status_line(&engine, &symbols), "Player X wins!");

        let moves = [(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)];
        let engine = GameEngine::replay(&moves).unwrap();
        assert_eq!(status_line(&engine, &symbols), "Player O wins!");

        let moves = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ];
        let engine = GameEngine::replay(&moves).unwrap();
        assert_eq!(status_line(&engine, &symbols), "It's a draw!");
    }

    #[test]
    fn test_custom_symbols() {
        let symbols = Symbols {
            first: "#".to_string(),
            second: "@".to_string(),
        };
        let engine = GameEngine::new();
        assert_eq!(status_line(&engine, &symbols), "Current Player: #");
    }

    #[test]
    fn test_rejection_notice() {
        assert_eq!(
            rejection_notice(&MoveError::CellOccupied(Position::TopRight)),
            "Top-right is already taken."
        );
        assert_eq!(
            rejection_notice(&MoveError::GameOver(Outcome::Draw)),
            "The game is over. Press r to play again."
        );
    }
}
