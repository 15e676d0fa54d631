//! Stat assignment.
//!
//! White, then Black, commits stats for their stones in one action. Each
//! stone costs `distance × (directions + persistence)` credits, counting
//! all eight compass directions. An assignment is all-or-nothing: a single
//! bad entry or a total above the player's credits rejects the whole
//! submission. Stones left out of the map keep no stats and never move.

use crate::core::{AssignmentMap, GameState, MovementState, Phase, Player};

/// Total credits charged for an assignment.
///
/// ```
/// use stonebid::board::{Direction, DirectionMask};
/// use stonebid::core::{AssignmentMap, StoneId, StoneStats};
/// use stonebid::rules::assignment_cost;
///
/// let mut assignments = AssignmentMap::default();
/// let rook = DirectionMask::ORTHOGONAL;
/// let hopper = DirectionMask::from_directions(&[Direction::UpRight]);
/// assignments.insert(StoneId::new(1), StoneStats::new(2, rook, false));
/// assignments.insert(StoneId::new(2), StoneStats::new(5, hopper, true));
///
/// assert_eq!(assignment_cost(&assignments), 2 * 4 + 5 * 2);
/// ```
#[must_use]
pub fn assignment_cost(assignments: &AssignmentMap) -> i64 {
    assignments.values().map(|stats| stats.cost()).sum()
}

pub(crate) fn assign_stats(state: &GameState, player: Player, assignments: &AssignmentMap) -> Option<GameState> {
    if state.phase != Phase::AssignStats(player) {
        return None;
    }

    let max_distance = state.config.max_distance;
    let valid = assignments.iter().all(|(id, stats)| {
        let owned = state
            .stones
            .get(id)
            .is_some_and(|stone| stone.owner == player && stone.stats.is_none());
        owned && (1..=max_distance).contains(&stats.distance)
    });
    if !valid {
        return None;
    }

    let cost = assignment_cost(assignments);
    if cost > state.credits[player] {
        return None;
    }

    let mut next = state.clone();
    for (id, stats) in assignments {
        if let Some(stone) = next.stones.get_mut(id) {
            stone.stats = Some(*stats);
        }
    }
    next.credits[player] -= cost;
    next.assignments[player] = assignments.clone();

    match player {
        Player::White => {
            next.phase = Phase::AssignStats(Player::Black);
            next.turn = Some(Player::Black);
        }
        Player::Black => {
            next.phase = Phase::MovementBidding;
            next.turn = None;
            next.movement = MovementState::default();
            next.passes_in_a_row = 0;
        }
    }
    next.refresh_scores();
    tracing::debug!(%player, stones = assignments.len(), cost, "stats assigned");
    Some(next)
}
