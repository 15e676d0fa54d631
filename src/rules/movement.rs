//! Movement phase.
//!
//! Players alternate single-stone moves. Capturing removes the victim and,
//! unless it is persistent, the capturing stone as well. After each move
//! the game ends, in this order, when:
//! 1. a side has no stones left (the other side wins);
//! 2. the move counter reached the move limit (score decides);
//! 3. neither side has a legal move (score decides).
//!
//! A player may only pass with no legal move; two passes in a row end the
//! game on score. Score decisions go to Black on ties.

use super::engine::{end_by_score, end_game, EndReason};
use crate::board::{legal_moves, MoveList, Square};
use crate::core::{GameState, Phase, Player, Stone, StoneId};

/// Legal destinations for a stone in the current position.
#[must_use]
pub fn stone_moves(state: &GameState, stone: &Stone) -> MoveList {
    legal_moves(&state.board, &state.stones, stone)
}

/// Whether any of `player`'s stones can move.
#[must_use]
pub fn has_any_legal_move(state: &GameState, player: Player) -> bool {
    state.stones_of(player).any(|stone| !stone_moves(state, stone).is_empty())
}

pub(crate) fn move_stone(state: &GameState, id: StoneId, row: usize, col: usize) -> Option<GameState> {
    if state.phase != Phase::Movement {
        return None;
    }
    let player = state.turn?;
    let stone = state.stones.get(&id)?;
    if stone.owner != player {
        return None;
    }
    let target = Square::new(row, col);
    if !stone_moves(state, stone).contains(&target) {
        return None;
    }

    let mut next = state.clone();
    let mover = next.remove_stone(id)?;
    match next.board.get(target) {
        Some(victim) => {
            next.remove_stone(victim);
            let survives = mover.is_persistent();
            if survives {
                next.insert_stone(Stone { square: target, ..mover });
            }
            tracing::debug!(%player, %id, %victim, %target, survives, "capture");
        }
        None => next.insert_stone(Stone { square: target, ..mover }),
    }

    next.turn = Some(player.opponent());
    next.movement.move_count += 1;
    next.passes_in_a_row = 0;
    next.refresh_scores();

    check_end_after_move(&mut next);
    Some(next)
}

fn check_end_after_move(state: &mut GameState) {
    let white = state.stone_count(Player::White);
    let black = state.stone_count(Player::Black);
    match (white, black) {
        (0, 0) => return end_by_score(state, EndReason::Elimination),
        (0, _) => return end_game(state, Player::Black, EndReason::Elimination),
        (_, 0) => return end_game(state, Player::White, EndReason::Elimination),
        _ => {}
    }

    if state
        .movement
        .move_limit
        .is_some_and(|limit| state.movement.move_count >= limit)
    {
        return end_by_score(state, EndReason::MoveLimit);
    }

    if !has_any_legal_move(state, Player::White) && !has_any_legal_move(state, Player::Black) {
        end_by_score(state, EndReason::NoLegalMoves);
    }
}

pub(crate) fn pass(state: &GameState) -> Option<GameState> {
    if state.phase != Phase::Movement {
        return None;
    }
    let player = state.turn?;
    if has_any_legal_move(state, player) {
        return None;
    }

    let mut next = state.clone();
    next.passes_in_a_row += 1;
    next.turn = Some(player.opponent());
    if next.passes_in_a_row >= 2 {
        end_by_score(&mut next, EndReason::DoublePass);
    }
    Some(next)
}
