//! Command-line interface.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with snapshot history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Tic-tac-toe with snapshot history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to `play`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a move sequence and print the final position
    Replay {
        /// Cell indices (0-8, row-major) in play order
        #[arg(required = true)]
        cells: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
