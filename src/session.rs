//! Interaction surface joining the rules engine to the history store.

use crate::action::{Move, MoveError};
use crate::history::History;
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::types::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One interactive game: a history of snapshots plus the state derived from
/// it for display.
///
/// The session stores nothing beyond the history. Turn, status, and the
/// winning line are recomputed from the active snapshot on every query, so
/// what the presentation layer renders can never desync from the cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    history: History,
}

impl GameSession {
    /// Creates a session at game start.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// The history store.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The active snapshot.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Mark to play from the active snapshot.
    pub fn next_mark(&self) -> Mark {
        self.history.next_mark()
    }

    /// Status of the active snapshot.
    pub fn status(&self) -> GameStatus {
        rules::status(self.history.current())
    }

    /// The completed line on the active snapshot, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::check_winner(self.history.current())
    }

    /// Status text for display.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(mark) => format!("Winner is: {mark}"),
            GameStatus::Drawn => "Game over. Draw!".to_string(),
            GameStatus::InProgress => format!("Next player is: {}", self.next_mark()),
        }
    }

    /// Attempts a move at the given position with the mark whose turn it is.
    ///
    /// On success the resulting snapshot is recorded and becomes active,
    /// discarding any stored future. The caller decides what to do with a
    /// rejection; the terminal UI drops it, so an illegal click changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the cell is taken or the active snapshot
    /// already has a winner.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) -> Result<(), MoveError> {
        let mov = Move::new(self.history.next_mark(), position);
        let next = rules::apply(self.history.current(), mov)?;
        debug!(%mov, move_number = self.history.cursor() + 1, "move recorded");
        self.history.record(next);
        Ok(())
    }

    /// Moves the active cursor to a recorded move number.
    ///
    /// # Panics
    ///
    /// Panics when `move_number` is out of range; see [`History::go_to`].
    #[instrument(skip(self))]
    pub fn select(&mut self, move_number: usize) {
        self.history.go_to(move_number);
    }

    /// Returns the session to game start: one empty snapshot, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.reset();
    }

    /// Rebuilds a session by clicking a sequence of cells in order.
    ///
    /// # Errors
    ///
    /// Propagates the first rejection.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut session = Self::new();
        for &position in positions {
            session.click(position)?;
        }
        Ok(session)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
