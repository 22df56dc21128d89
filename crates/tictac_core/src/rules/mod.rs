//! Outcome evaluation for tic-tac-toe.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use crate::types::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Evaluated state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    InProgress,
    /// A marker completed a line.
    Winner(Marker),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the round is decided.
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning marker, if any.
    pub fn winner(self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(marker),
            _ => None,
        }
    }
}

/// Evaluates a board snapshot.
///
/// The first completed line in scan order decides the winner. Without one,
/// a full board is a draw and anything else is still in progress.
#[instrument(level = "trace", skip(board), ret)]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(marker) = check_winner(board) {
        Outcome::Winner(marker)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_top_row_winner() {
        let board: Board = "XXX______".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Winner(Marker::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXXOOOXO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let board: Board = "XOXOXOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Winner(Marker::X));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board: Board = "XO_OX____".parse().unwrap();
        let before = board;
        let _ = evaluate(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::InProgress.is_decided());
        assert!(Outcome::Draw.is_decided());
        assert_eq!(Outcome::Winner(Marker::O).winner(), Some(Marker::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
