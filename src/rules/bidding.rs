//! Sealed-bid auctions.
//!
//! Two auctions share one protocol: each player locks a single bid, clamped
//! to `[0, own credits]`, and the bids reveal together once both are in.
//! The higher bid wins and White wins ties.
//!
//! - Opening auction: both players pay their own bid; the winner places
//!   first.
//! - Movement auction: only the winner pays; the winning bid becomes the
//!   move limit and the winner chooses who moves first.

use super::engine::{end_by_score, EndReason};
use crate::core::{GameState, Phase, Player, SealedBids};

/// Winner of a revealed auction. Ties go to White.
#[must_use]
pub fn auction_winner(white: i64, black: i64) -> Player {
    if white >= black {
        Player::White
    } else {
        Player::Black
    }
}

/// Lock `player`'s bid into `bids`, or `None` if the auction is closed to
/// them.
fn lock(bids: &SealedBids, player: Player, amount: i64, credits: i64) -> Option<SealedBids> {
    if bids.revealed || bids.is_locked(player) {
        return None;
    }
    let mut bids = bids.clone();
    bids.amounts[player] = Some(amount.clamp(0, credits.max(0)));
    Some(bids)
}

pub(crate) fn lock_bid(state: &GameState, player: Player, amount: i64) -> Option<GameState> {
    if state.phase != Phase::Bidding {
        return None;
    }
    let mut next = state.clone();
    next.bids = lock(&state.bids, player, amount, state.credits[player])?;

    if let Some((white, black)) = next.bids.both() {
        let winner = auction_winner(white, black);
        next.credits[Player::White] -= white;
        next.credits[Player::Black] -= black;
        next.bids.revealed = true;
        next.bids.winner = Some(winner);
        next.refresh_scores();
        tracing::info!(white, black, %winner, "opening bids revealed");
    }
    Some(next)
}

pub(crate) fn start_placement(state: &GameState) -> Option<GameState> {
    if state.phase != Phase::Bidding || !state.bids.revealed {
        return None;
    }
    let mut next = state.clone();
    next.phase = Phase::Placement;
    next.turn = Some(next.bids.winner.unwrap_or(Player::White));
    next.passes_in_a_row = 0;
    Some(next)
}

pub(crate) fn movement_bid(state: &GameState, player: Player, amount: i64) -> Option<GameState> {
    if state.phase != Phase::MovementBidding {
        return None;
    }
    let mut next = state.clone();
    next.movement.bids = lock(&state.movement.bids, player, amount, state.credits[player])?;

    if let Some((white, black)) = next.movement.bids.both() {
        let winner = auction_winner(white, black);
        let winning_bid = if winner == Player::White { white } else { black };
        next.credits[winner] -= winning_bid;
        next.movement.bids.revealed = true;
        next.movement.bids.winner = Some(winner);
        next.movement.decider = Some(winner);
        next.movement.move_limit = Some(u32::try_from(winning_bid).unwrap_or(u32::MAX));
        next.refresh_scores();
        tracing::info!(white, black, %winner, move_limit = winning_bid, "movement bids revealed");
    }
    Some(next)
}

pub(crate) fn movement_plan(state: &GameState, player: Player, starting_player: Player) -> Option<GameState> {
    if state.phase != Phase::MovementBidding || !state.movement.bids.revealed {
        return None;
    }
    if state.movement.decider != Some(player) {
        return None;
    }
    let move_limit = state.movement.move_limit?;

    let mut next = state.clone();
    next.movement.starting_player = Some(starting_player);
    if move_limit == 0 {
        end_by_score(&mut next, EndReason::ZeroMoveLimit);
        return Some(next);
    }

    next.phase = Phase::Movement;
    next.turn = Some(starting_player);
    next.movement.move_count = 0;
    next.passes_in_a_row = 0;
    Some(next)
}
