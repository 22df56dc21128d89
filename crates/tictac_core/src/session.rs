//! Game session: mode, current round and cumulative statistics.
//!
//! The session is the only mutable state in the game. Every operation runs
//! to completion synchronously; in single-player mode the computer's reply
//! is applied in the same call as the human move that triggered it.

use crate::error::GameError;
use crate::position::Position;
use crate::round::{Move, Round};
use crate::rules::Outcome;
use crate::selector::{Selection, select_move};
use crate::stats::GameStats;
use crate::types::{Board, Marker};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Marker played by the human in single-player mode.
pub const HUMAN: Marker = Marker::X;

/// Marker played by the computer in single-player mode.
pub const COMPUTER: Marker = Marker::O;

/// How the session is played.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameMode {
    /// One human (X) against the computer (O).
    #[strum(to_string = "Single player")]
    SinglePlayer,
    /// Two humans sharing the board.
    #[strum(to_string = "Two players")]
    TwoPlayer,
}

/// What happened during one [`Session::play`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummary {
    /// The human move that was applied.
    pub human: Move,
    /// The computer's reply, if one was made.
    pub computer: Option<Selection>,
    /// Outcome after all moves of the turn.
    pub outcome: Outcome,
}

/// Marker that opens the next round.
///
/// In single-player mode the computer opens only after it won the previous
/// round; a human win or a draw gives the opening back to the human. In
/// two-player mode O opens whenever the most recent winner is X; draws do
/// not change the most recent winner.
pub fn opening_marker(
    mode: Option<GameMode>,
    last_result: Option<Outcome>,
    last_winner: Option<Marker>,
) -> Marker {
    match mode {
        Some(GameMode::SinglePlayer) if last_result == Some(Outcome::Winner(COMPUTER)) => COMPUTER,
        Some(GameMode::TwoPlayer) if last_winner == Some(Marker::X) => Marker::O,
        _ => Marker::X,
    }
}

/// Holds everything that lives for the duration of a session.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    round: Round,
    mode: Option<GameMode>,
    stats: GameStats,
    last_result: Option<Outcome>,
    last_winner: Option<Marker>,
    stats_visible: bool,
    rng: R,
}

impl Session<StdRng> {
    /// Creates a session whose computer opponent draws from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a session with a reproducible computer opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: rand::Rng> Session<R> {
    /// Creates a session using the given random source for the computer's fallback moves.
    pub fn with_rng(rng: R) -> Self {
        Self {
            round: Round::new(Marker::X),
            mode: None,
            stats: GameStats::new(),
            last_result: None,
            last_winner: None,
            stats_visible: false,
            rng,
        }
    }

    /// Selected mode, or `None` while the mode prompt is pending.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// The round being played.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Outcome of the current round.
    pub fn outcome(&self) -> Outcome {
        self.round.outcome()
    }

    /// Marker whose turn it is.
    pub fn to_move(&self) -> Marker {
        self.round.to_move()
    }

    /// Cumulative statistics.
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Outcome of the most recent decided round.
    pub fn last_result(&self) -> Option<Outcome> {
        self.last_result
    }

    /// Marker that won most recently. Draws leave it untouched.
    pub fn last_winner(&self) -> Option<Marker> {
        self.last_winner
    }

    /// Whether the stats panel is showing.
    pub fn stats_visible(&self) -> bool {
        self.stats_visible
    }

    /// Status line for display.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::Winner(marker) => format!("Winner: {marker}"),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Chooses how the session is played and starts a fresh round with X to move.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: GameMode) {
        info!(%mode, "Game mode selected");
        self.mode = Some(mode);
        self.round = Round::new(Marker::X);
    }

    /// Applies a human click on board index `index`.
    ///
    /// # Errors
    ///
    /// Refuses the move, leaving the session unchanged, when no mode is
    /// selected, the index is out of range, the round is over, the square is
    /// taken, or the computer is to move.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        let mode = self.mode.ok_or(GameError::ModeNotSelected)?;
        let pos = Position::from_index(index).ok_or(GameError::OutOfBounds(index))?;
        if self.round.outcome().is_decided() {
            return Err(GameError::RoundOver);
        }
        if mode == GameMode::SinglePlayer && self.round.to_move() == COMPUTER {
            return Err(GameError::NotYourTurn(HUMAN));
        }

        let outcome = self.round.place(pos)?;
        self.finish_if_decided(outcome);
        Ok(outcome)
    }

    /// Lets the computer play its move.
    ///
    /// # Errors
    ///
    /// Refused outside single-player mode, once the round is decided, or
    /// while it is the human's turn.
    #[instrument(skip(self))]
    pub fn apply_computer_move(&mut self) -> Result<Selection, GameError> {
        match self.mode {
            None => return Err(GameError::ModeNotSelected),
            Some(GameMode::TwoPlayer) => return Err(GameError::NotSinglePlayer),
            Some(GameMode::SinglePlayer) => {}
        }
        if self.round.outcome().is_decided() {
            return Err(GameError::RoundOver);
        }
        if self.round.to_move() != COMPUTER {
            return Err(GameError::NotYourTurn(COMPUTER));
        }

        let selection = select_move(self.round.board(), COMPUTER, HUMAN, &mut self.rng)?;
        let outcome = self.round.place(selection.position)?;
        self.finish_if_decided(outcome);
        Ok(selection)
    }

    /// Human click followed, in single-player mode, by the computer's reply.
    ///
    /// # Errors
    ///
    /// See [`Session::apply_human_move`]. A refused click changes nothing.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<TurnSummary, GameError> {
        let pos = Position::from_index(index).ok_or(GameError::OutOfBounds(index))?;
        let human = Move::new(self.round.to_move(), pos);
        let mut outcome = self.apply_human_move(index)?;

        let computer = if self.mode == Some(GameMode::SinglePlayer) && !outcome.is_decided() {
            let selection = self.apply_computer_move()?;
            outcome = self.round.outcome();
            Some(selection)
        } else {
            None
        };

        Ok(TurnSummary {
            human,
            computer,
            outcome,
        })
    }

    /// Clears the board for a new round, keeping the statistics.
    ///
    /// When the computer opens the round its first move is made here and returned.
    ///
    /// # Errors
    ///
    /// Only if the computer's opening move fails, which a fresh board rules out.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) -> Result<Option<Selection>, GameError> {
        let first = opening_marker(self.mode, self.last_result, self.last_winner);
        info!(
            %first,
            last_result = ?self.last_result,
            last_winner = ?self.last_winner,
            "Starting new round"
        );
        self.round = Round::new(first);

        if self.mode == Some(GameMode::SinglePlayer) && first == COMPUTER {
            return self.apply_computer_move().map(Some);
        }
        Ok(None)
    }

    /// Ends play and reveals the statistics.
    #[instrument(skip(self))]
    pub fn end_game(&mut self) -> &GameStats {
        info!(total = self.stats.total(), "Showing statistics");
        self.stats_visible = true;
        &self.stats
    }

    /// Closes the statistics and starts over: stats zeroed, board cleared, mode unselected.
    #[instrument(skip(self))]
    pub fn close_stats(&mut self) {
        info!("Closing statistics, session reset");
        self.stats_visible = false;
        self.stats = GameStats::new();
        self.round = Round::new(Marker::X);
        self.mode = None;
        self.last_result = None;
        self.last_winner = None;
    }

    fn finish_if_decided(&mut self, outcome: Outcome) {
        if outcome.is_decided() {
            info!(?outcome, moves = self.round.history().len(), "Round decided");
            self.stats.record(outcome);
            self.last_result = Some(outcome);
            if let Some(winner) = outcome.winner() {
                self.last_winner = Some(winner);
            }
        } else {
            debug!(to_move = %self.round.to_move(), "Round continues");
        }
    }
}
