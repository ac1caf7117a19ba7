//! Win detection.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// A winning triple of positions.
pub type Line = [Position; 3];

/// The eight ways to win: rows, then columns, then diagonals.
///
/// The scan order is part of the engine contract. After any single move at
/// most one line can newly complete, so ordering never changes whether a win
/// is detected, but boards built directly (as tests do) may satisfy several
/// lines at once and the first match in this array is the one reported.
pub const LINES: [Line; 8] = [
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

/// Finds the first completed line on the board.
///
/// Returns the owning side and the line itself so callers can highlight
/// the winning squares.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Some((mark, line));
        }
    }

    None
}
