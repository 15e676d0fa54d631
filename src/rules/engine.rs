//! The reducer: a single pure entry point from (state, action) to state.
//!
//! Every precondition failure (wrong phase, wrong turn, insufficient
//! credits, illegal destination, double lock, placement cap) produces an
//! unchanged copy of the input. Callers can dispatch any action at any
//! time, and duplicated or reordered deliveries are harmless.
//!
//! ## Implementation Notes
//!
//! - Phase handlers return `Option<GameState>`: `None` means rejected.
//!   The option never escapes `reduce`.
//! - Handlers work on a clone of the input; `im` structures make that cheap.
//! - Accepted actions other than ticks are appended to the action log.

use serde::{Deserialize, Serialize};

use super::{assign, bidding, clock, movement, placement, scoring};
use crate::core::{Action, ActionRecord, GameState, Phase, Player};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// One side has no stones left.
    Elimination,
    /// The move counter reached the move limit.
    MoveLimit,
    /// Neither side has a legal move after a move.
    NoLegalMoves,
    /// Two consecutive passes during Movement.
    DoublePass,
    /// The movement auction was won with a bid of zero.
    ZeroMoveLimit,
    /// A clock reached zero.
    Timeout,
    /// A player resigned.
    Resignation,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Player,
    pub reason: EndReason,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}

/// Apply an action to a state.
///
/// Returns the next state, or an unchanged copy of `state` if the action
/// does not apply.
///
/// ```
/// use stonebid::core::{Action, GameState, Phase, Player, RulesConfig};
/// use stonebid::rules::reduce;
///
/// let state = GameState::new(RulesConfig::default(), 42);
/// let state = reduce(&state, &Action::LockBid { player: Player::White, amount: 10 });
/// let state = reduce(&state, &Action::LockBid { player: Player::Black, amount: 4 });
///
/// assert!(state.bids.revealed);
/// assert_eq!(state.bids.winner, Some(Player::White));
///
/// // Locking twice is a no-op.
/// let again = reduce(&state, &Action::LockBid { player: Player::White, amount: 50 });
/// assert_eq!(again, state);
///
/// let state = reduce(&state, &Action::StartPlacement);
/// assert_eq!(state.phase, Phase::Placement);
/// ```
#[must_use]
pub fn reduce(state: &GameState, action: &Action) -> GameState {
    let next = match action {
        Action::Reset { seed } => Some(GameState::new(state.config.clone(), *seed)),
        Action::Tick { dt_ms } => clock::tick(state, *dt_ms),
        Action::LockBid { player, amount } => bidding::lock_bid(state, *player, *amount),
        Action::StartPlacement => bidding::start_placement(state),
        Action::PlacementSquare { row, col } => placement::place(state, *row, *col),
        Action::PlacementPass => placement::pass(state),
        Action::AssignStats {
            player,
            assignments,
        } => assign::assign_stats(state, *player, assignments),
        Action::MovementBid { player, amount } => bidding::movement_bid(state, *player, *amount),
        Action::MovementPlan {
            player,
            starting_player,
        } => bidding::movement_plan(state, *player, *starting_player),
        Action::MovementMove { stone, row, col } => movement::move_stone(state, *stone, *row, *col),
        Action::MovementPass => movement::pass(state),
        Action::Resign { player } => resign(state, *player),
    };

    let Some(mut next) = next else {
        if action.is_logged() {
            tracing::debug!(?action, phase = %state.phase, turn = ?state.turn, "action rejected");
        }
        return state.clone();
    };

    if next.phase != state.phase {
        tracing::info!(from = %state.phase, to = %next.phase, "phase transition");
    }

    if action.is_logged() && !matches!(action, Action::Reset { .. }) {
        let record = ActionRecord::new(
            next.log.len() as u32,
            state.phase,
            action.actor().or(state.turn),
            action.clone(),
        );
        next.log.push_back(record);
    }

    next
}

fn resign(state: &GameState, player: Player) -> Option<GameState> {
    if state.phase.is_ended() {
        return None;
    }
    let mut next = state.clone();
    end_game(&mut next, player.opponent(), EndReason::Resignation);
    Some(next)
}

/// Move a state to `Ended` with a winner.
pub(crate) fn end_game(state: &mut GameState, winner: Player, reason: EndReason) {
    state.phase = Phase::Ended;
    state.turn = None;
    state.winner = Some(winner);
    state.end_reason = Some(reason);
    tracing::info!(%winner, ?reason, white = state.scores[Player::White], black = state.scores[Player::Black], "game ended");
}

/// End the game in favour of the score leader (Black on ties).
pub(crate) fn end_by_score(state: &mut GameState, reason: EndReason) {
    let winner = scoring::score_leader(state);
    end_game(state, winner, reason);
}
