//! Clock handling.
//!
//! An external timer dispatches `Action::Tick` with the elapsed time; the
//! engine never reads a wall clock. Which clocks run depends on the phase:
//!
//! | Phase                        | Ticking                                  |
//! |------------------------------|------------------------------------------|
//! | Bidding, MovementBidding     | both until one locks, then the other one |
//! | Placement, Movement          | player to move                           |
//! | AssignStats(p)               | p                                        |
//! | Ended, revealed auctions     | none                                     |
//!
//! A clock reaching zero ends the game for the other player, whatever the
//! phase.

use serde::{Deserialize, Serialize};

use super::engine::{end_game, EndReason};
use crate::core::{GameState, Phase, Player, SealedBids};

/// Which clocks a tick decrements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickingMode {
    None,
    Both,
    Only(Player),
}

impl TickingMode {
    /// Whether `player`'s clock runs in this mode.
    #[must_use]
    pub fn includes(self, player: Player) -> bool {
        match self {
            TickingMode::None => false,
            TickingMode::Both => true,
            TickingMode::Only(p) => p == player,
        }
    }
}

/// Ticking mode for the current phase.
#[must_use]
pub fn ticking_mode(state: &GameState) -> TickingMode {
    match state.phase {
        Phase::Bidding => sealed_bid_mode(&state.bids),
        Phase::MovementBidding => sealed_bid_mode(&state.movement.bids),
        Phase::Placement | Phase::Movement => state.turn.map_or(TickingMode::None, TickingMode::Only),
        Phase::AssignStats(player) => TickingMode::Only(player),
        Phase::Ended => TickingMode::None,
    }
}

fn sealed_bid_mode(bids: &SealedBids) -> TickingMode {
    if bids.revealed {
        return TickingMode::None;
    }
    match (bids.is_locked(Player::White), bids.is_locked(Player::Black)) {
        (false, false) => TickingMode::Both,
        (true, false) => TickingMode::Only(Player::Black),
        (false, true) => TickingMode::Only(Player::White),
        (true, true) => TickingMode::None,
    }
}

/// Decrement running clocks by `dt_ms`.
pub(crate) fn tick(state: &GameState, dt_ms: u64) -> Option<GameState> {
    let mode = ticking_mode(state);
    if dt_ms == 0 || mode == TickingMode::None {
        return None;
    }

    let mut next = state.clone();
    for player in Player::ALL {
        if mode.includes(player) {
            next.clocks[player] = next.clocks[player].saturating_sub(dt_ms);
        }
    }

    // White is checked first when both run out on the same tick.
    if let Some(flagged) = Player::ALL.into_iter().find(|&p| mode.includes(p) && next.clocks[p] == 0) {
        end_game(&mut next, flagged.opponent(), EndReason::Timeout);
    }

    Some(next)
}
