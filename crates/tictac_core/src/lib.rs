//! Tic-tac-toe game logic.
//!
//! Pure game rules with no I/O:
//!
//! - **Rules**: [`evaluate`] decides whether a board is won, drawn or still in play
//! - **Opponent**: [`select_move`] picks the computer's square with a one-ply heuristic
//! - **Session**: [`Session`] holds the mode, the current [`Round`] and the [`GameStats`]
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameMode, Outcome, Session};
//!
//! let mut session = Session::seeded(7);
//! session.select_mode(GameMode::TwoPlayer);
//! for idx in [0, 3, 1, 4, 2] {
//!     session.play(idx).unwrap();
//! }
//! assert_eq!(session.outcome(), Outcome::Winner(tictac_core::Marker::X));
//! assert_eq!(*session.stats().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod position;
mod round;
mod rules;
mod selector;
mod session;
mod stats;
mod types;

pub use error::GameError;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, MoveCountInvariant, RoundInvariants,
};
pub use position::Position;
pub use round::{Move, Round};
pub use rules::{LINES, Outcome, check_winner, evaluate, is_full, winning_line};
pub use selector::{Selection, Tier, select_move, winning_move};
pub use session::{COMPUTER, GameMode, HUMAN, Session, TurnSummary, opening_marker};
pub use stats::GameStats;
pub use types::{Board, Marker, Square};
