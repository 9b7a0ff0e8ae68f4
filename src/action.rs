//! Move events and rejection reasons.
//!
//! Moves are domain events, not side effects: they can be validated against
//! any snapshot, serialized, and logged independently of execution.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The target cell.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reasons a move is rejected.
///
/// Rejection is the entire error taxonomy: the interaction surface treats a
/// rejected click as a no-op, so nothing here is fatal or retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("cell {} is already taken", _0)]
    CellTaken(Position),
    /// The board already has a completed line.
    #[display("the game is already decided")]
    GameOver,
}

impl std::error::Error for MoveError {}
