//! Tic-tac-toe with snapshot history and time travel.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tictactoe_rewind::{Board, GameSession, GameStatus, Position, WinningLine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run(),
        Command::Replay { cells, json } => replay(&cells, json),
    }
}

/// Summary of a replayed game, printed by `replay --json`.
#[derive(Debug, Serialize)]
struct ReplaySummary<'a> {
    board: &'a Board,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    moves_played: usize,
}

/// Replays a recorded cell sequence and prints the final position.
fn replay(cells: &[usize], json: bool) -> Result<()> {
    let positions = cells
        .iter()
        .map(|&index| {
            Position::from_index(index)
                .with_context(|| format!("cell index {index} out of range (0-8)"))
        })
        .collect::<Result<Vec<_>>>()?;

    let session = GameSession::replay(&positions).context("replay rejected")?;

    if json {
        let summary = ReplaySummary {
            board: session.board(),
            status: session.status(),
            winning_line: session.winning_line(),
            moves_played: session.history().cursor(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", session.board().render());
        println!("{}", session.status_line());
    }

    Ok(())
}
