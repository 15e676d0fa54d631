//! The master phase discriminator.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Phase of a game. Transitions only move forward, ending in `Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Sealed opening auction for the first placement.
    Bidding,
    /// Alternating stone placement.
    Placement,
    /// One player commits stats for their stones; White goes first.
    AssignStats(Player),
    /// Sealed auction for the move limit.
    MovementBidding,
    /// Alternating moves until a terminal condition.
    Movement,
    /// Terminal.
    Ended,
}

impl Phase {
    #[must_use]
    pub const fn is_ended(self) -> bool {
        matches!(self, Phase::Ended)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Bidding => write!(f, "BIDDING"),
            Phase::Placement => write!(f, "PLACEMENT"),
            Phase::AssignStats(Player::White) => write!(f, "ASSIGN_STATS_W"),
            Phase::AssignStats(Player::Black) => write!(f, "ASSIGN_STATS_B"),
            Phase::MovementBidding => write!(f, "MOVEMENT_BIDDING"),
            Phase::Movement => write!(f, "MOVEMENT"),
            Phase::Ended => write!(f, "ENDED"),
        }
    }
}
