//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::round::Round;
use crate::types::{Board, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must reproduce the
/// current board, with every move landing on an empty square.
pub struct MonotonicBoardInvariant;

impl Invariant<Round> for MonotonicBoardInvariant {
    fn holds(round: &Round) -> bool {
        let mut reconstructed = Board::new();

        for mov in round.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.marker));
        }

        reconstructed == *round.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
