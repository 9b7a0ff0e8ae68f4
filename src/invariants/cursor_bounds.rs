//! Cursor bounds invariant: the cursor always names a stored snapshot.

use super::Invariant;
use crate::history::History;
use crate::types::Board;

/// Invariant: the cursor indexes a stored snapshot and the chain starts with
/// the empty board.
pub struct CursorBoundsInvariant;

impl Invariant<History> for CursorBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.snapshots().len()
            && history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "cursor names a stored snapshot and the chain starts empty"
    }
}
