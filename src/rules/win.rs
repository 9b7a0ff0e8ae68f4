//! Win detection.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in evaluation order: rows, then columns, then
/// diagonals. The order is observable only when a board holds more than one
/// complete line and must stay fixed for determinism.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the mark that owns it and the three cells forming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// The winning mark.
    pub mark: Mark,
    /// The cells of the completed line, in line order.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Checks whether a cell belongs to this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Scans the eight lines in fixed order and returns the first complete one.
///
/// Returns `None` for boards with no complete line, whether still in
/// progress or drawn.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Marked(mark) = board.get(a)
            && board.get(b) == Cell::Marked(mark)
            && board.get(c) == Cell::Marked(mark)
        {
            return Some(WinningLine { mark, line });
        }
    }
    None
}
