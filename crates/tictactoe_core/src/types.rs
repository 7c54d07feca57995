//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use unicode_width::UnicodeWidthStr;

/// Occupant of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// The player who moves first.
    First,
    /// The player who moves second.
    Second,
}

impl Mark {
    /// Returns the other player's mark. `Empty` has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Returns true for `First` and `Second`.
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }
}

/// 3x3 tic-tac-toe board, indexed by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    ///
    /// Any combination of marks is accepted, including ones no legal game
    /// can reach. Useful for evaluating arbitrary positions.
    pub fn from_rows(cells: [[Mark; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Returns the mark at a position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row()][pos.col()]
    }

    /// Returns the mark at `(row, col)`, or `None` off the board.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = mark;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Checks if every cell holds a player's mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|m| m.is_player())
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&m| m == mark).count()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Mark; 3]; 3] {
        &self.cells
    }

    /// Formats the board as text, using the given symbols for the two players.
    ///
    /// Empty cells show their 1-based cell number so the output doubles as a
    /// key map for numeric input. Cells are padded by terminal column width,
    /// so double-width symbols keep the grid aligned.
    #[instrument(skip(self))]
    pub fn render(&self, first: &str, second: &str) -> String {
        let width = first.width().max(second.width()).max(1);
        let mut out = String::new();
        for (row, marks) in self.cells.iter().enumerate() {
            let cells: Vec<String> = marks
                .iter()
                .enumerate()
                .map(|(col, mark)| {
                    let symbol = match mark {
                        Mark::Empty => (row * 3 + col + 1).to_string(),
                        Mark::First => first.to_string(),
                        Mark::Second => second.to_string(),
                    };
                    pad_center(&symbol, width)
                })
                .collect();
            out.push_str(&cells.join("|"));
            if row < 2 {
                out.push('\n');
                out.push_str(&vec!["-".repeat(width); 3].join("+"));
                out.push('\n');
            }
        }
        out
    }
}

/// Centres `text` in `width` terminal columns. Odd padding goes on the right.
fn pad_center(text: &str, width: usize) -> String {
    let slack = width.saturating_sub(text.width());
    let left = slack / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(slack - left))
}
