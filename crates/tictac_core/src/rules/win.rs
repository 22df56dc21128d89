//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Marker, Square};

/// The 8 winning lines in scan order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the marker that completed it.
pub fn completed_line(board: &Board) -> Option<([Position; 3], Marker)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(marker)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some((line, marker))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` for the first line (in scan order) holding
/// three equal markers, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Marker> {
    completed_line(board).map(|(_, marker)| marker)
}

/// Returns the board indices of the first completed line.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    completed_line(board).map(|(line, _)| line.map(Position::to_index))
}
