//! Headless play: apply a scripted list of moves and report the result.

use crate::config::TuiConfig;
use crate::status::status_line;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{GameEngine, Snapshot};
use tracing::{debug, info, instrument, warn};

/// Parses a `row,col` pair such as `0,2`.
pub fn parse_coords(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got {:?}", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("bad coordinate {:?} in {:?}: {}", part, s, e))
    };
    Ok((parse(row)?, parse(col)?))
}

/// Plays `moves` on a fresh engine, writing one line per move and then the
/// final board and status (or the snapshot as JSON).
///
/// Rejected moves are reported and skipped; they do not stop the script.
#[instrument(skip(config, out))]
pub fn run_play(
    config: &TuiConfig,
    moves: &[(usize, usize)],
    json: bool,
    out: &mut impl Write,
) -> Result<Snapshot> {
    let symbols = config.symbols();
    let mut engine = GameEngine::new();

    for &(row, col) in moves {
        let mark = engine.current_turn();
        match engine.attempt_move(row, col) {
            Ok(outcome) => {
                debug!(row, col, %outcome, "Scripted move applied");
                if !json {
                    writeln!(out, "{} -> ({}, {})", symbols.of(mark), row, col)?;
                }
            }
            Err(e) => {
                warn!(row, col, error = %e, "Scripted move rejected");
                if !json {
                    writeln!(out, "rejected ({}, {}): {}", row, col, e)?;
                }
            }
        }
    }

    let snapshot = engine.snapshot();
    if json {
        let text = serde_json::to_string_pretty(&snapshot)
            .context("Failed to encode snapshot")?;
        writeln!(out, "{}", text)?;
    } else {
        let board = engine.board().render(&symbols.first, &symbols.second);
        writeln!(out)?;
        writeln!(out, "{}", board)?;
        writeln!(out)?;
        writeln!(out, "{}", status_line(&engine, &symbols))?;
    }

    info!(outcome = %snapshot.outcome, moves = snapshot.history.len(), "Script finished");
    Ok(snapshot)
}
