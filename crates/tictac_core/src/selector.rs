//! Computer opponent move selection.
//!
//! The opponent looks a single ply ahead: take a winning square if one
//! exists, otherwise block the human's winning square, otherwise play a
//! random empty square. It does not see forks, so a careful human can beat it.

use crate::error::GameError;
use crate::position::Position;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Marker};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Heuristic tier that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tier {
    /// Completes one of the computer's lines.
    Win,
    /// Occupies the square the human needs to complete a line.
    Block,
    /// Uniform pick among empty squares.
    Random,
}

/// A chosen square and the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Square to play.
    pub position: Position,
    /// Tier that fired.
    pub tier: Tier,
}

impl Selection {
    /// Board index (0-8) of the chosen square.
    pub fn index(&self) -> usize {
        self.position.to_index()
    }
}

/// First empty square (ascending index) where `marker` would complete a line.
pub fn winning_move(board: &Board, marker: Marker) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|&pos| evaluate(&board.with(pos, marker)) == Outcome::Winner(marker))
}

/// Chooses the computer's next square.
///
/// # Errors
///
/// Returns [`GameError::BoardFull`] when no empty square is left.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Marker,
    human: Marker,
    rng: &mut R,
) -> Result<Selection, GameError> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return Err(GameError::BoardFull);
    }

    let selection = if let Some(position) = winning_move(board, computer) {
        Selection {
            position,
            tier: Tier::Win,
        }
    } else if let Some(position) = winning_move(board, human) {
        Selection {
            position,
            tier: Tier::Block,
        }
    } else {
        let position = *empty.choose(rng).ok_or(GameError::BoardFull)?;
        Selection {
            position,
            tier: Tier::Random,
        }
    };

    debug!(position = %selection.position, tier = %selection.tier, "Computer selected move");
    Ok(selection)
}
