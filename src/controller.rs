//! Match state machine: human move, engine reply, scoring across rematches.

use crate::action::Move;
use crate::invariants;
use crate::position::Position;
use crate::rules::{self, Line, Outcome};
use crate::score::Scoreboard;
use crate::search;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whose input the match is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a square.
    AwaitingPlayer,
    /// The human has moved; the embedder calls [`Match::play_ai_move`]
    /// once its own reveal delay has elapsed.
    AwaitingAi,
    /// Terminal until a restart.
    Finished,
}

/// Rejection reasons for a submitted move. All are no-op rejections: the
/// match is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Square index is outside 0-8.
    #[display("square index {} is out of range", _0)]
    OutOfRange(usize),
    /// The square is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
    /// The match is over; restart first.
    #[display("match is over")]
    MatchOver,
    /// The engine's reply is still pending.
    #[display("waiting on the AI's move")]
    NotPlayersTurn,
    /// The engine has no pending reply.
    #[display("not the AI's turn")]
    NotAisTurn,
}

impl std::error::Error for MoveError {}

/// The match state machine.
///
/// Sequences human move -> terminal check -> engine move -> terminal check,
/// and keeps cumulative scores across rematches. The engine's reply is a
/// separate transition ([`Match::play_ai_move`]) so the embedder can insert
/// whatever pacing delay it wants between the two; the engine itself
/// computes and applies in one synchronous step.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    phase: Phase,
    outcome: Outcome,
    scores: Scoreboard,
    history: Vec<Move>,
}

impl Match {
    /// Creates a fresh match: empty board, human to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        info!("starting new match");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingPlayer,
            outcome: Outcome::InProgress,
            scores: Scoreboard::new(),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the cumulative scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the moves played this game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whose move is next, or `None` once the match is finished.
    pub fn turn(&self) -> Option<Mark> {
        match self.phase {
            Phase::AwaitingPlayer => Some(Mark::Player),
            Phase::AwaitingAi => Some(Mark::Ai),
            Phase::Finished => None,
        }
    }

    /// The completed line, if the game ended with one.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.winning_line()
    }

    /// Submits the human's move at a raw square index (0-8).
    ///
    /// On success the match is either finished (the move ended the game)
    /// or waiting on the engine's reply.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn submit_player_move(&mut self, index: usize) -> Result<(), MoveError> {
        match self.phase {
            Phase::AwaitingPlayer => {}
            Phase::AwaitingAi => {
                warn!(index, "move submitted while the AI's reply is pending");
                return Err(MoveError::NotPlayersTurn);
            }
            Phase::Finished => {
                warn!(index, "move submitted after match end");
                return Err(MoveError::MatchOver);
            }
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            warn!(%pos, "square already occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.place(pos, Mark::Player);
        if !self.outcome.is_terminal() {
            self.phase = Phase::AwaitingAi;
        }
        Ok(())
    }

    /// Computes and applies the engine's reply.
    ///
    /// The second half of the two-phase turn: the embedder calls this after
    /// its reveal delay. Search and application happen as one atomic step.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_ai_move(&mut self) -> Result<(), MoveError> {
        if self.phase != Phase::AwaitingAi {
            return Err(MoveError::NotAisTurn);
        }

        // The pending-reply phase implies a non-terminal board.
        let pos = search::best_move(&self.board).expect("non-terminal board has an open square");
        debug!(%pos, "engine chose its move");

        self.place(pos, Mark::Ai);
        if !self.outcome.is_terminal() {
            self.phase = Phase::AwaitingPlayer;
        }
        Ok(())
    }

    /// Applies a mark, reclassifies the board, and finishes the match if
    /// the game just ended.
    fn place(&mut self, pos: Position, mark: Mark) {
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));
        self.outcome = rules::outcome(&self.board);
        debug!(%pos, ?mark, outcome = ?self.outcome, "applied move");

        if self.outcome.is_terminal() {
            self.scores.record(&self.outcome);
            self.phase = Phase::Finished;
            info!(message = self.outcome.message(), "match finished");
        }

        invariants::debug_assert_match(self);
    }

    /// Starts a rematch: board, outcome, and turn reset; scores kept.
    ///
    /// Idempotent and legal from any phase.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("restarting match");
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        self.phase = Phase::AwaitingPlayer;
        self.history.clear();
    }

    /// Zeroes all score counters and restarts.
    ///
    /// Idempotent and legal from any phase.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("resetting scores");
        self.scores.clear();
        self.restart();
    }

    /// Everything a frontend needs to render, as one serializable value.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            board: *self.board.squares(),
            turn: self.turn(),
            message: self.outcome.message().to_string(),
            winning_line: self
                .outcome
                .winning_line()
                .map(|line| line.map(Position::to_index)),
            player_score: self.scores.player(),
            ai_score: self.scores.ai(),
            ties: self.scores.ties(),
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of match state for a rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// The nine squares in row-major order.
    pub board: [Square; 9],
    /// Whose move is next, if the match is still running.
    pub turn: Option<Mark>,
    /// Outcome message; empty while the game is in progress.
    pub message: String,
    /// Indices (0-8) of the completed line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Games the human has won.
    pub player_score: u32,
    /// Games the engine has won.
    pub ai_score: u32,
    /// Drawn games.
    pub ties: u32,
}
