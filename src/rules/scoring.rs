//! Scoring.
//!
//! A player's score is their remaining credits plus a positional bonus for
//! every stone standing on a labelled cell of the opposing half. The bonus
//! for label `L` is `half_size + 1 - L`, so the cheapest squares to defend
//! are the most valuable to invade.

use crate::core::{GameState, Player, PlayerMap, ScoreDetail};

/// Per-player credits, positional bonus and total for a state.
#[must_use]
pub fn compute_score_details(state: &GameState) -> PlayerMap<ScoreDetail> {
    let mut position: PlayerMap<i64> = PlayerMap::default();
    for stone in state.stones.values() {
        let label = state.labels.opponent_half_label(stone.owner, stone.square);
        position[stone.owner] += state.config.positional_value(label);
    }

    PlayerMap::new(|p| ScoreDetail {
        credits: state.credits[p],
        position: position[p],
        total: state.credits[p] + position[p],
    })
}

/// Player with the higher stored total. Ties go to Black.
#[must_use]
pub fn score_leader(state: &GameState) -> Player {
    if state.scores[Player::White] > state.scores[Player::Black] {
        Player::White
    } else {
        Player::Black
    }
}
