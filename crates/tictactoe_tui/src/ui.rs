//! Stateless UI rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Mark, Position, rules::winning_line};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "arrows/hjkl move · enter place · 1-9 cell · click · r restart · q quit";

fn chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(4),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = chunks(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, board_area(frame.area()), app);

    let mut lines = vec![Line::from(app.status_line())];
    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Screen area of the 3x3 grid, separators included.
pub fn board_area(area: Rect) -> Rect {
    center_rect(chunks(area)[1], BOARD_WIDTH, BOARD_HEIGHT)
}

/// Screen area of one cell inside `board`.
pub fn cell_rect(board: Rect, position: Position) -> Rect {
    let rect = Rect::new(
        board.x + position.col() as u16 * (CELL_WIDTH + 1),
        board.y + position.row() as u16 * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    );
    rect.intersection(board)
}

/// Cell under a screen coordinate, if any. Separators belong to no cell.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board = board_area(area);
    (0..9).filter_map(Position::from_index).find(|&pos| {
        let cell = cell_rect(board, pos);
        column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
    })
}

fn draw_board(frame: &mut Frame, board: Rect, app: &App) {
    let grid: Vec<Line> = (0..BOARD_HEIGHT)
        .map(|y| {
            let on_separator_row = (y + 1) % (CELL_HEIGHT + 1) == 0;
            let (fill, joint) = if on_separator_row {
                ("─", "┼")
            } else {
                (" ", "│")
            };
            let segment = fill.repeat(CELL_WIDTH as usize);
            let segment = segment.as_str();
            Line::from([segment, joint, segment, joint, segment].concat())
        })
        .collect();
    frame.render_widget(
        Paragraph::new(grid).style(Style::default().fg(Color::DarkGray)),
        board,
    );

    let winners = winning_line(app.engine().board())
        .map(|(_, line)| line.cells);
    for index in 0..9 {
        let Some(pos) = Position::from_index(index) else {
            continue;
        };
        let winning = winners.is_some_and(|cells| cells.contains(&pos));
        draw_cell(frame, cell_rect(board, pos), app, pos, winning);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let mark = app.engine().board().get(pos);
    let on_cursor = pos == app.cursor();

    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let base_style = match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::First => bold(Color::Blue),
        Mark::Second => bold(Color::Red),
    };
    let style = if winning {
        base_style.fg(Color::Green)
    } else {
        base_style
    };
    // The cursor only repaints the foreground when no winning colour is set.
    let style = match (on_cursor, winning) {
        (true, true) => style.bg(Color::White),
        (true, false) => style.bg(Color::White).fg(Color::Black),
        (false, _) => style,
    };

    let symbol = app.symbols().of(mark);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {symbol} "), style)),
        Line::from(""),
    ];
    let background = if on_cursor { style } else { Style::default() };
    let paragraph = Paragraph::new(lines)
        .style(background)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::input::Action;
    use ratatui::{Terminal, backend::TestBackend};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 24,
    };

    fn draw_app(app: &App) -> Terminal<TestBackend> {
        let backend = TestBackend::new(AREA.width, AREA.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
    }

    fn middle(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    fn render(app: &App) -> String {
        let terminal = draw_app(app);
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(AREA.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_board_is_centered() {
        let board = board_area(AREA);
        assert_eq!(board.width, BOARD_WIDTH);
        assert_eq!(board.height, BOARD_HEIGHT);
        assert_eq!(board.x, (AREA.width - BOARD_WIDTH) / 2);
    }

    #[test]
    fn test_cell_at_hits_each_cell_center() {
        let board = board_area(AREA);
        for index in 0..9 {
            let pos = Position::from_index(index).unwrap();
            let (column, row) = middle(cell_rect(board, pos));
            assert_eq!(cell_at(AREA, column, row), Some(pos));
        }
    }

    #[test]
    fn test_cell_at_misses_separators_and_outside() {
        let board = board_area(AREA);
        // Vertical separator between column 0 and column 1.
        assert_eq!(cell_at(AREA, board.x + CELL_WIDTH, board.y + 1), None);
        // Horizontal separator between row 0 and row 1.
        assert_eq!(cell_at(AREA, board.x + 1, board.y + CELL_HEIGHT), None);
        assert_eq!(cell_at(AREA, 0, 0), None);
    }

    #[test]
    fn test_renders_status_and_marks() {
        let mut app = App::new(&TuiConfig::default());
        app.handle_action(Action::PlaceAt(Position::TopLeft));

        let screen = render(&app);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Current Player: O"));
        assert!(screen.contains(" X "));
    }

    #[test]
    fn test_renders_notice() {
        let mut app = App::new(&TuiConfig::default());
        app.handle_action(Action::PlaceAt(Position::TopLeft));
        app.handle_action(Action::PlaceAt(Position::TopLeft));

        let screen = render(&app);
        assert!(screen.contains("Top-left is already taken."));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(&TuiConfig::default());
        for index in [0, 3, 1, 4, 2] {
            app.handle_action(Action::PlaceAt(Position::from_index(index).unwrap()));
        }
        assert!(render(&app).contains("Player X wins!"));
    }

    #[test]
    fn test_cursor_keeps_winning_colour() {
        let mut app = App::new(&TuiConfig::default());
        for index in [0, 3, 1, 4, 2] {
            app.handle_action(Action::PlaceAt(Position::from_index(index).unwrap()));
        }
        assert_eq!(app.cursor(), Position::TopRight);

        let terminal = draw_app(&app);
        let buffer = terminal.backend().buffer();
        let board = board_area(AREA);

        let cell = &buffer[middle(cell_rect(board, Position::TopRight))];
        assert_eq!(cell.symbol(), "X");
        assert_eq!(cell.fg, Color::Green);
        assert_eq!(cell.bg, Color::White);

        let cell = &buffer[middle(cell_rect(board, Position::TopLeft))];
        assert_eq!(cell.symbol(), "X");
        assert_eq!(cell.fg, Color::Green);
        assert_ne!(cell.bg, Color::White);
    }
}
