//! Cumulative session statistics.

use crate::rules::Outcome;
use crate::types::Marker;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw tallies across the rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameStats {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl GameStats {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a decided round. In-progress outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Marker::X) => self.x_wins += 1,
            Outcome::Winner(Marker::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, draws = self.draws, "Stats updated");
    }

    /// Wins for the given marker.
    pub fn wins(&self, marker: Marker) -> u32 {
        match marker {
            Marker::X => self.x_wins,
            Marker::O => self.o_wins,
        }
    }

    /// Total decided rounds.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
