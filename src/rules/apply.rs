//! Move application.

use super::win::check_winner;
use crate::action::{Move, MoveError};
use crate::types::{Board, Cell};
use tracing::instrument;

/// Applies a move to a snapshot, producing the successor snapshot.
///
/// The input board is never mutated. A move is rejected when the target cell
/// is taken or the board already has a winner; rejection leaves the caller's
/// snapshot untouched.
///
/// # Errors
///
/// Returns [`MoveError::CellTaken`] or [`MoveError::GameOver`].
#[instrument]
pub fn apply(board: &Board, mov: Move) -> Result<Board, MoveError> {
    if !board.is_empty(mov.position) {
        return Err(MoveError::CellTaken(mov.position));
    }
    if check_winner(board).is_some() {
        return Err(MoveError::GameOver);
    }
    Ok(board.with(mov.position, Cell::Marked(mov.mark)))
}
