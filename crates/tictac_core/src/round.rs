//! A single round of tic-tac-toe: board, turn and move history.

use crate::error::GameError;
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::position::Position;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Marker, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// One round, from an empty board until a win or a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) first: Marker,
    pub(crate) to_move: Marker,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl Round {
    /// Starts a round on an empty board with `first` to move.
    pub fn new(first: Marker) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker that opened the round.
    pub fn first(&self) -> Marker {
        self.first
    }

    /// Marker whose turn it is.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Current outcome of the round.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the marker whose turn it is at `pos` and re-evaluates the board.
    ///
    /// # Errors
    ///
    /// [`GameError::RoundOver`] once the round is decided and
    /// [`GameError::SquareOccupied`] for a taken square. The round is
    /// unchanged on error.
    #[instrument(skip(self), fields(marker = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, GameError> {
        if self.outcome.is_decided() {
            return Err(GameError::RoundOver);
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::SquareOccupied(pos));
        }

        let marker = self.to_move;
        self.board.set(pos, Square::Occupied(marker));
        self.history.push(Move::new(marker, pos));
        self.to_move = marker.opponent();
        self.outcome = evaluate(&self.board);

        if let Err(violations) = RoundInvariants::check_all(self) {
            for violation in violations {
                warn!(description = %violation.description, "Round invariant violated");
            }
        }

        debug!(outcome = ?self.outcome, moves = self.history.len(), "Move applied");
        Ok(self.outcome)
    }
}
