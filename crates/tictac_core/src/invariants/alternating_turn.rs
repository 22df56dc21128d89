//! Alternating turn invariant.

use super::Invariant;
use crate::round::Round;

/// Invariant: markers alternate, starting with the round's opening marker.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();

        if let Some(first) = history.first()
            && first.marker != round.first()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].marker == w[1].marker) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            round.first()
        } else {
            round.first().opponent()
        };
        round.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Markers alternate turns from the opening marker"
    }
}
