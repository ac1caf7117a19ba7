//! Cumulative match scoring.

use crate::rules::Outcome;
use serde::{Deserialize, Serialize};

/// Win/loss/tie counters carried across rematches.
///
/// Restarting a match leaves these untouched; only an explicit score reset
/// clears them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    player: u32,
    ai: u32,
    ties: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games the human has won.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// Games the engine has won.
    pub fn ai(&self) -> u32 {
        self.ai
    }

    /// Drawn games.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Bumps the counter matching a terminal outcome.
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::PlayerWins(_) => self.player += 1,
            Outcome::AiWins(_) => self.ai += 1,
            Outcome::Draw => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    /// Zeroes all three counters.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
