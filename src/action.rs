//! First-class move events.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// One mark placed at one position.
///
/// The controller keeps these in its history so finished games can be
/// reconstructed and the debug checks can cross-check the board against
/// what was actually played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that moved.
    pub mark: Mark,
    /// Where the mark was placed.
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
        write!(f, "{:?} -> {}", self.mark, self.position.label())
    }
}
