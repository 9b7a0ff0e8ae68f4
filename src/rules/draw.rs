//! Draw detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks whether every cell is taken.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// A full board with no completed line is a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::check_winner(board).is_none()
}
