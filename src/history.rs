//! Append-only snapshot history with a cursor for time travel.

use crate::invariants;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ordered board snapshots plus the cursor selecting the active one.
///
/// `snapshots[0]` is always the empty starting board; each later snapshot is
/// its predecessor with exactly one mark added. The cursor may sit behind the
/// last snapshot after time travel, and recording from there discards the
/// stored future (branching).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl History {
    /// Creates a history holding only the empty starting snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// All stored snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The cursor: the move number of the active snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Mark to play from the active snapshot, derived from cursor parity.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.cursor)
    }

    /// Records a new snapshot after the cursor and advances onto it.
    ///
    /// Snapshots past the cursor are discarded first, so recording after
    /// time travel overwrites the previously stored future.
    #[instrument(skip(self, board))]
    pub fn record(&mut self, board: Board) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
        invariants::assert_invariants(self);
    }

    /// Moves the cursor to the given move number.
    ///
    /// # Panics
    ///
    /// Panics when `move_number` does not name a stored snapshot. Callers
    /// present only valid move numbers; an out-of-range value is a bug, not
    /// a recoverable condition.
    #[instrument(skip(self))]
    pub fn go_to(&mut self, move_number: usize) {
        assert!(
            move_number < self.snapshots.len(),
            "move number {move_number} out of range for {} snapshots",
            self.snapshots.len()
        );
        self.cursor = move_number;
    }

    /// Discards everything except the empty starting snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.snapshots.truncate(1);
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
