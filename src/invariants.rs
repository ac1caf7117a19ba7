//! Debug-build consistency checks for match state.
//!
//! The controller runs these after every applied move. Violations indicate
//! a bug in the engine itself, never bad input, so they assert rather than
//! return errors.

use crate::controller::Match;
use crate::rules;
use crate::types::{Mark, Square};
use tracing::warn;

/// The human opens every game, so the engine can never have placed more
/// marks than the human, and the human at most one more than the engine.
pub fn mark_balance_holds(game: &Match) -> bool {
    let player = count(game, Mark::Player);
    let ai = count(game, Mark::Ai);

    let valid = ai <= player && player <= ai + 1;
    if !valid {
        warn!(player, ai, "mark balance violated");
    }
    valid
}

/// Every occupied square was reached through the recorded history.
pub fn history_matches_board(game: &Match) -> bool {
    let occupied = game
        .board()
        .squares()
        .iter()
        .filter(|s| !matches!(s, Square::Empty))
        .count();
    let recorded = game.history().len();

    let valid = occupied == recorded;
    if !valid {
        warn!(occupied, recorded, "history out of sync with board");
    }
    valid
}

/// The cached outcome matches what the board actually says.
pub fn outcome_consistent(game: &Match) -> bool {
    let derived = rules::outcome(game.board());

    let valid = derived == game.outcome();
    if !valid {
        warn!(?derived, cached = ?game.outcome(), "cached outcome drifted from board");
    }
    valid
}

/// Asserts all match invariants in debug builds.
pub fn debug_assert_match(game: &Match) {
    debug_assert!(mark_balance_holds(game), "mark balance violated");
    debug_assert!(
        history_matches_board(game),
        "history out of sync with board"
    );
    debug_assert!(
        outcome_consistent(game),
        "cached outcome drifted from board"
    );
}

fn count(game: &Match, mark: Mark) -> usize {
    game.board()
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(mark))
        .count()
}
