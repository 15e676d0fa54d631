//! Placement phase.
//!
//! Players alternate placing stones, paying the square's label in credits.
//! A square is available to a player when:
//! - it lies in their home half (cost: their own label there), or
//! - it lies across the midline and the player's own label on the mirrored
//!   square has been unlocked for them (cost: that label).
//!
//! Every placement on label `v` unlocks `v` for the opponent. Two
//! consecutive passes end the phase; a player who has placed nothing may
//! not pass while a placement is still available to them.

use crate::board::Square;
use crate::core::{GameState, Phase, Player, Stone};

/// Credits `player` would pay to place on `square`; zero when the square
/// is not available to them (off-board, wrong half and still locked).
///
/// Occupancy, credits and the placement cap are not considered here; see
/// `can_place`.
#[must_use]
pub fn square_cost(state: &GameState, player: Player, square: Square) -> u32 {
    if !state.board.contains(square) {
        return 0;
    }
    if player.is_home_row(square.row, state.config.rows) {
        return state.labels.own_half_label(player, square);
    }
    let mirrored = state.labels.own_half_label(player, square.mirrored(state.config.rows));
    if mirrored > 0 && state.unlocked_labels[player].contains(&mirrored) {
        mirrored
    } else {
        0
    }
}

/// Whether `player` could place on `square` right now, ignoring whose turn
/// it is.
#[must_use]
pub fn can_place(state: &GameState, player: Player, square: Square) -> bool {
    if !state.board.is_empty_at(square) {
        return false;
    }
    if state.placement_counts[player] >= state.config.max_stones {
        return false;
    }
    let cost = square_cost(state, player, square);
    cost > 0 && i64::from(cost) <= state.credits[player]
}

/// Every square `player` could place on right now.
#[must_use]
pub fn legal_placements(state: &GameState, player: Player) -> Vec<Square> {
    let (rows, cols) = (state.board.rows(), state.board.cols());
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Square::new(row, col)))
        .filter(|&sq| can_place(state, player, sq))
        .collect()
}

pub(crate) fn place(state: &GameState, row: usize, col: usize) -> Option<GameState> {
    if state.phase != Phase::Placement {
        return None;
    }
    let player = state.turn?;
    let square = Square::new(row, col);
    if !can_place(state, player, square) {
        return None;
    }
    let cost = square_cost(state, player, square);
    let id = state.id_allocator().alloc()?;

    let mut next = state.clone();
    next.insert_stone(Stone::new(id, player, square));
    next.credits[player] -= i64::from(cost);
    next.placement_counts[player] += 1;
    next.unlocked_labels[player.opponent()].insert(cost);
    next.last_placement_by = Some(player);
    next.passes_in_a_row = 0;
    next.turn = Some(player.opponent());
    next.refresh_scores();
    tracing::debug!(%player, %id, %square, cost, "stone placed");
    Some(next)
}

pub(crate) fn pass(state: &GameState) -> Option<GameState> {
    if state.phase != Phase::Placement {
        return None;
    }
    let player = state.turn?;
    if state.placement_counts[player] == 0 && !legal_placements(state, player).is_empty() {
        return None;
    }

    let mut next = state.clone();
    next.passes_in_a_row += 1;
    if next.passes_in_a_row >= 2 {
        next.phase = Phase::AssignStats(Player::White);
        next.turn = Some(Player::White);
        next.passes_in_a_row = 0;
    } else {
        next.turn = Some(player.opponent());
    }
    Some(next)
}
