//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictac_core::Position;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::at(r, col)),
        KeyCode::Down => Position::at(row + 1, col),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::at(row, c)),
        KeyCode::Right => Position::at(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps digit keys 1-9 onto board positions, keypad order matching the board labels.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1)),
        _ => None,
    }
}
