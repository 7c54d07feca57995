//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// Three cells that win when they hold the same player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Short name for logs ("row 0", "diagonal ↘", ...).
    pub name: &'static str,
    /// The cells of the line.
    pub cells: [Position; 3],
}

const fn line(name: &'static str, cells: [Position; 3]) -> Line {
    Line { name, cells }
}

/// All eight lines, in scan order.
///
/// Each row is followed by the column of the same index, then the two
/// diagonals. When several lines are complete the first one here wins.
pub const LINES: [Line; 8] = {
    use Position::*;
    [
        line("row 0", [TopLeft, TopCenter, TopRight]),
        line("column 0", [TopLeft, MiddleLeft, BottomLeft]),
        line("row 1", [MiddleLeft, Center, MiddleRight]),
        line("column 1", [TopCenter, Center, BottomCenter]),
        line("row 2", [BottomLeft, BottomCenter, BottomRight]),
        line("column 2", [TopRight, MiddleRight, BottomRight]),
        line("diagonal ↘", [TopLeft, Center, BottomRight]),
        line("diagonal ↙", [TopRight, Center, BottomLeft]),
    ]
};

/// Returns the first completed line and the mark that completed it.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.cells;
        let mark = board.get(a);
        (mark.is_player() && mark == board.get(b) && mark == board.get(c))
            .then_some((mark, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a player has three in a row, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark::{Empty as E, First as F, Second as S};

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows([[F, F, F], [S, S, E], [E, E, E]]);
        assert_eq!(check_winner(&board), Some(Mark::First));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_rows([[F, F, S], [E, S, E], [S, E, F]]);
        let (mark, line) = winning_line(&board).unwrap();
        assert_eq!(mark, Mark::Second);
        assert_eq!(line.name, "diagonal ↙");
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows([[F, F, E], [S, S, E], [E, E, E]]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_row_before_its_column() {
        // Row 0 and column 0 both complete, for different marks.
        let board = Board::from_rows([[S, S, S], [S, E, E], [S, E, E]]);
        assert_eq!(winning_line(&board).unwrap().1.name, "row 0");

        let board = Board::from_rows([[F, S, S], [F, S, E], [F, E, E]]);
        assert_eq!(winning_line(&board).unwrap().1.name, "column 0");
    }

    #[test]
    fn test_earlier_column_beats_later_column() {
        let board = Board::from_rows([[F, S, E], [F, S, E], [F, S, E]]);
        assert_eq!(winning_line(&board).unwrap().1.name, "column 0");
        assert_eq!(check_winner(&board), Some(Mark::First));
    }

    #[test]
    fn test_rows_and_columns_before_diagonals() {
        let board = Board::from_rows([[F, E, F], [E, F, F], [E, E, F]]);
        assert_eq!(winning_line(&board).unwrap().1.name, "column 2");

        let board = Board::from_rows([[S, S, S], [E, S, E], [E, E, S]]);
        assert_eq!(winning_line(&board).unwrap().1.name, "row 0");
    }
}
