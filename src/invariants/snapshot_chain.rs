//! Snapshot chain invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::history::History;
use crate::types::{Board, Cell};

/// Invariant: adjacent snapshots differ by exactly one cell going from empty
/// to marked.
///
/// Marks are never moved, removed, or overwritten between snapshots; the
/// chain replays the game one move at a time.
pub struct SnapshotChainInvariant;

impl Invariant<History> for SnapshotChainInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| one_mark_added(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "each snapshot is its predecessor plus exactly one mark"
    }
}

fn one_mark_added(before: &Board, after: &Board) -> bool {
    let mut added = 0;
    for (prev, next) in before.cells().iter().zip(after.cells()) {
        match (prev, next) {
            (Cell::Empty, Cell::Marked(_)) => added += 1,
            (prev, next) if prev == next => {}
            _ => return false,
        }
    }
    added == 1
}
