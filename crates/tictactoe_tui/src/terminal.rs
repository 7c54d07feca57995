//! Interactive terminal loop.

use crate::app::App;
use crate::config::TuiConfig;
use crate::input::{Action, action_for_key};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::{Backend, CrosstermBackend}, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Restores the terminal on drop, whichever way the loop ends.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")?;

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);
    let result = show_cursor_after(&mut terminal, result);

    info!(moves = app.engine().history().len(), "Leaving TUI");
    result
}

/// Makes the cursor visible again. A failure here is logged so it never hides
/// the loop's own result.
fn show_cursor_after<B: Backend>(terminal: &mut Terminal<B>, result: Result<()>) -> Result<()> {
    if let Err(e) = terminal.show_cursor() {
        warn!(error = %e, "Failed to show cursor");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = action_for_key(key.code) {
                    app.handle_action(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(position) = ui::cell_at(area, mouse.column, mouse.row) {
                    app.handle_action(Action::PlaceAt(position));
                }
            }
            _ => {}
        }
    }
    Ok(())
}
