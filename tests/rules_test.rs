//! Tests for board classification rules.

use perfect_tictactoe::{Board, Mark, Outcome, Position, Square, outcome, winning_line};

fn occupy(board: &mut Board, mark: Mark, positions: &[Position]) {
    for pos in positions {
        board.set(*pos, Square::Occupied(mark));
    }
}

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_open_squares_ascending_order() {
    let mut board = Board::new();
    occupy(&mut board, Mark::Player, &[Position::TopLeft]);
    occupy(&mut board, Mark::Ai, &[Position::Center]);

    let open = Position::open_squares(&board);
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::TopLeft));
    assert!(!open.contains(&Position::Center));

    // Ascending by index, since ties in the search resolve to the first.
    let indices: Vec<_> = open.iter().map(|p| p.to_index()).collect();
    assert_eq!(indices, vec![1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_open_squares_empty_on_full_board() {
    let mut board = Board::new();
    occupy(&mut board, Mark::Player, &Position::ALL);
    assert!(Position::open_squares(&board).is_empty());
}

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(outcome(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_completing_the_top_row_wins() {
    // X X _ / O O _ / _ _ _, then the human takes the top-right square.
    let mut board = Board::new();
    occupy(
        &mut board,
        Mark::Player,
        &[Position::TopLeft, Position::TopCenter],
    );
    occupy(
        &mut board,
        Mark::Ai,
        &[Position::MiddleLeft, Position::Center],
    );
    assert_eq!(outcome(&board), Outcome::InProgress);

    board.set(Position::TopRight, Square::Occupied(Mark::Player));
    assert_eq!(
        outcome(&board),
        Outcome::PlayerWins([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_engine_diagonal_win() {
    let mut board = Board::new();
    occupy(
        &mut board,
        Mark::Ai,
        &[Position::TopRight, Position::Center, Position::BottomLeft],
    );
    occupy(
        &mut board,
        Mark::Player,
        &[Position::TopLeft, Position::TopCenter, Position::BottomRight],
    );

    let result = outcome(&board);
    assert_eq!(
        result,
        Outcome::AiWins([Position::TopRight, Position::Center, Position::BottomLeft])
    );
    assert_eq!(result.winning_line().map(|l| l.map(Position::to_index)), Some([2, 4, 6]));
}

#[test]
fn test_full_board_without_winner_is_a_draw() {
    // X O X / O X X / O X O
    let mut board = Board::new();
    occupy(
        &mut board,
        Mark::Player,
        &[
            Position::TopLeft,
            Position::TopRight,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
        ],
    );
    occupy(
        &mut board,
        Mark::Ai,
        &[
            Position::TopCenter,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(outcome(&board), Outcome::Draw);
}

#[test]
fn test_win_beats_draw_classification() {
    // Full board where the human's last move also completed a line.
    // X X X / O O X / O X O
    let mut board = Board::new();
    occupy(
        &mut board,
        Mark::Player,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomCenter,
        ],
    );
    occupy(
        &mut board,
        Mark::Ai,
        &[
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(
        outcome(&board),
        Outcome::PlayerWins([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_outcome_messages() {
    let line = [Position::TopLeft, Position::TopCenter, Position::TopRight];
    assert_eq!(Outcome::InProgress.message(), "");
    assert_eq!(Outcome::PlayerWins(line).message(), "Player wins!");
    assert_eq!(Outcome::AiWins(line).message(), "AI wins!");
    assert_eq!(Outcome::Draw.message(), "It's a tie!");
}

#[test]
fn test_winning_line_reports_first_canonical_match() {
    // Directly-built board satisfying both the top row and the left
    // column; the row comes first in the canonical scan.
    let mut board = Board::new();
    occupy(
        &mut board,
        Mark::Player,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
    );
    assert_eq!(
        winning_line(&board),
        Some((
            Mark::Player,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        ))
    );
}
