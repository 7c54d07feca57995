//! Keyboard bindings.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by a row and column offset.
    MoveCursor {
        /// Row offset.
        d_row: isize,
        /// Column offset.
        d_col: isize,
    },
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific cell.
    PlaceAt(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action. Unbound keys map to `None`.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    let cursor = |d_row, d_col| Some(Action::MoveCursor { d_row, d_col });

    match key {
        KeyCode::Up | KeyCode::Char('k') => cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Action::PlaceAt)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
