//! Move count invariant: one occupied square per move played.

use super::Invariant;
use crate::round::Round;

/// Invariant: occupied squares equal the number of moves played.
pub struct MoveCountInvariant;

impl Invariant<Round> for MoveCountInvariant {
    fn holds(round: &Round) -> bool {
        round.board().occupied_count() == round.history().len()
    }

    fn description() -> &'static str {
        "Occupied squares match the number of moves played"
    }
}
