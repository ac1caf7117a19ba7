//! Exhaustive minimax search for the engine's side.
//!
//! The tree is small enough (branching ≤ 9, depth ≤ 9) to search to the
//! bottom every time, so there is no pruning and no evaluation heuristic:
//! every leaf is a finished game.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Search was asked to move on a board with nowhere to go.
///
/// This is a caller-contract violation: the controller never invokes the
/// search once the game is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// No open square remains on the board.
    #[display("no open square to search")]
    NoOpenSquare,
}

impl std::error::Error for SearchError {}

/// Picks the engine's strongest move.
///
/// Open squares are tried in ascending index order and a candidate only
/// replaces the incumbent on a strictly greater score, so ties resolve to
/// the first move enumerated. Same board in, same move out.
#[instrument]
pub fn best_move(board: &Board) -> Result<Position, SearchError> {
    let mut best: Option<(i32, Position)> = None;

    for pos in Position::open_squares(board) {
        let mut child = board.clone();
        child.set(pos, Square::Occupied(Mark::Ai));
        let score = minimax(&child, 0, false);
        match best {
            Some((incumbent, _)) if score <= incumbent => {}
            _ => best = Some((score, pos)),
        }
    }

    best.map(|(_, pos)| pos).ok_or(SearchError::NoOpenSquare)
}

/// Scores a board for the engine's side.
///
/// Terminal positions score `10 - depth` for an engine win, `depth - 10`
/// for a human win, and `0` for a draw. The depth offset steers the engine
/// toward faster wins and slower losses, which is observable in which of
/// two winning moves it picks.
///
/// Every branch works on its own copy of the board, so no hypothetical
/// move ever leaks into a sibling branch or back to the caller.
pub fn minimax(board: &Board, depth: i32, maximizing: bool) -> i32 {
    if let Some((mark, _)) = rules::winning_line(board) {
        return match mark {
            Mark::Ai => 10 - depth,
            Mark::Player => depth - 10,
        };
    }
    if rules::is_full(board) {
        return 0;
    }

    let mark = if maximizing { Mark::Ai } else { Mark::Player };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::open_squares(board) {
        let mut child = board.clone();
        child.set(pos, Square::Occupied(mark));
        let score = minimax(&child, depth + 1, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, mark: Mark, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Square::Occupied(mark));
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O _ / X X _ / _ _ _: winning at TopRight beats blocking.
        let mut board = Board::new();
        occupy(
            &mut board,
            Mark::Ai,
            &[Position::TopLeft, Position::TopCenter],
        );
        occupy(
            &mut board,
            Mark::Player,
            &[Position::MiddleLeft, Position::Center],
        );
        assert_eq!(best_move(&board), Ok(Position::TopRight));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X X _ / _ O _ / _ _ O: no win available, must block TopRight.
        let mut board = Board::new();
        occupy(
            &mut board,
            Mark::Player,
            &[Position::TopLeft, Position::TopCenter],
        );
        occupy(
            &mut board,
            Mark::Ai,
            &[Position::Center, Position::BottomRight],
        );
        assert_eq!(best_move(&board), Ok(Position::TopRight));
    }

    #[test]
    fn test_single_open_square_is_chosen() {
        // Everything but BottomRight filled, no winner on the board.
        // X O X / X O O / O X _
        let mut board = Board::new();
        occupy(
            &mut board,
            Mark::Player,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomCenter,
            ],
        );
        occupy(
            &mut board,
            Mark::Ai,
            &[
                Position::TopCenter,
                Position::Center,
                Position::MiddleRight,
                Position::BottomLeft,
            ],
        );
        assert_eq!(best_move(&board), Ok(Position::BottomRight));
    }

    #[test]
    fn test_full_board_is_a_contract_violation() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Mark::Player));
        }
        assert_eq!(best_move(&board), Err(SearchError::NoOpenSquare));
    }
}
