//! Terminal-state classification.

use super::draw::is_full;
use super::win::{Line, winning_line};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of classifying a board.
///
/// Always derived from board contents; the controller caches the value but
/// never lets it drift from the board (see the debug invariant checks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one open square and no completed line.
    InProgress,
    /// The human completed the line.
    PlayerWins(Line),
    /// The engine completed the line.
    AiWins(Line),
    /// Full board, no winner.
    Draw,
}

impl Outcome {
    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the completed line, if any, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::PlayerWins(line) | Outcome::AiWins(line) => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Human-readable message for the rendering boundary.
    ///
    /// Empty while the game is in progress.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::InProgress => "",
            Outcome::PlayerWins(_) => "Player wins!",
            Outcome::AiWins(_) => "AI wins!",
            Outcome::Draw => "It's a tie!",
        }
    }
}

/// Classifies the board: completed line first, then a full-board draw,
/// otherwise still in progress.
#[instrument]
pub fn outcome(board: &Board) -> Outcome {
    match winning_line(board) {
        Some((Mark::Player, line)) => Outcome::PlayerWins(line),
        Some((Mark::Ai, line)) => Outcome::AiWins(line),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
