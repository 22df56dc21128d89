//! Game error types.

use crate::position::Position;
use crate::types::Marker;
use derive_more::{Display, Error};

/// Reasons a game operation was refused.
///
/// A refused operation leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The round already has a winner or ended in a draw.
    #[display("Round is already over")]
    RoundOver,

    /// No game mode has been chosen for this session yet.
    #[display("No game mode selected")]
    ModeNotSelected,

    /// A move was attempted for a marker whose turn it is not.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Marker),

    /// A computer move was requested outside single-player mode.
    #[display("Computer moves are only available in single-player mode")]
    NotSinglePlayer,

    /// The move selector was asked to play on a full board.
    #[display("No empty square left to play")]
    BoardFull,

    /// A textual board could not be parsed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(#[error(not(source))] String),
}
