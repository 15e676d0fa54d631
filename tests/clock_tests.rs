//! Clock tests.
//!
//! The engine only sees elapsed time through `Action::Tick`; these tests
//! drive it with explicit deltas.

use stonebid::core::{Action, AssignmentMap, GameState, Phase, Player, RulesConfig};
use stonebid::rules::{reduce, ticking_mode, EndReason, TickingMode};

fn tick(state: &GameState, dt_ms: u64) -> GameState {
    reduce(state, &Action::Tick { dt_ms })
}

fn game(clock_ms: u64) -> GameState {
    GameState::new(RulesConfig::default().with_clock_ms(clock_ms), 11)
}

#[test]
fn test_both_clocks_run_before_any_bid() {
    let state = tick(&game(5_000), 1_200);
    assert_eq!(state.clocks[Player::White], 3_800);
    assert_eq!(state.clocks[Player::Black], 3_800);
}

#[test]
fn test_locked_bidder_clock_stops() {
    let state = reduce(&game(5_000), &Action::LockBid { player: Player::White, amount: 5 });
    assert_eq!(ticking_mode(&state), TickingMode::Only(Player::Black));

    let state = tick(&state, 1_000);
    assert_eq!(state.clocks[Player::White], 5_000);
    assert_eq!(state.clocks[Player::Black], 4_000);
}

#[test]
fn test_no_clock_runs_between_reveal_and_placement() {
    let state = reduce(&game(5_000), &Action::LockBid { player: Player::White, amount: 5 });
    let state = reduce(&state, &Action::LockBid { player: Player::Black, amount: 5 });
    assert_eq!(ticking_mode(&state), TickingMode::None);
    assert_eq!(tick(&state, 1_000), state);
}

#[test]
fn test_only_mover_ticks_in_placement() {
    let state = reduce(&game(5_000), &Action::LockBid { player: Player::White, amount: 1 });
    let state = reduce(&state, &Action::LockBid { player: Player::Black, amount: 2 });
    let state = reduce(&state, &Action::StartPlacement);
    assert_eq!(state.turn, Some(Player::Black));

    let state = tick(&state, 700);
    assert_eq!(state.clocks[Player::Black], 4_300);
    assert_eq!(state.clocks[Player::White], 5_000);
}

/// Play the cheapest placements and empty assignments up to the movement
/// auction.
fn to_movement_bidding(clock_ms: u64) -> GameState {
    let state = reduce(&game(clock_ms), &Action::LockBid { player: Player::White, amount: 0 });
    let state = reduce(&state, &Action::LockBid { player: Player::Black, amount: 0 });
    let state = reduce(&state, &Action::StartPlacement);

    let white = state.labels.white_half.find(1).unwrap();
    let black = state.labels.black_half.find(1).unwrap();
    let state = reduce(&state, &Action::PlacementSquare { row: white.row, col: white.col });
    let state = reduce(&state, &Action::PlacementSquare { row: black.row, col: black.col });
    let state = reduce(&state, &Action::PlacementPass);
    let state = reduce(&state, &Action::PlacementPass);

    let empty = AssignmentMap::default();
    let state = reduce(&state, &Action::AssignStats { player: Player::White, assignments: empty.clone() });
    let state = reduce(&state, &Action::AssignStats { player: Player::Black, assignments: empty });
    assert_eq!(state.phase, Phase::MovementBidding);
    state
}

#[test]
fn test_movement_bidding_clocks_follow_locks() {
    let state = to_movement_bidding(60_000);
    assert_eq!(ticking_mode(&state), TickingMode::Both);
    let (white, black) = (state.clocks[Player::White], state.clocks[Player::Black]);

    let state = reduce(&state, &Action::MovementBid { player: Player::Black, amount: 3 });
    assert_eq!(ticking_mode(&state), TickingMode::Only(Player::White));
    let state = tick(&state, 1_500);
    assert_eq!(state.clocks[Player::White], white - 1_500);
    assert_eq!(state.clocks[Player::Black], black);

    let state = reduce(&state, &Action::MovementBid { player: Player::White, amount: 2 });
    assert!(state.movement.bids.revealed);
    assert_eq!(state.phase, Phase::MovementBidding);
    assert_eq!(ticking_mode(&state), TickingMode::None);
    assert_eq!(tick(&state, 1_000), state);
}

#[test]
fn test_timeout_ends_game() {
    let state = reduce(&game(5_000), &Action::LockBid { player: Player::Black, amount: 1 });
    let state = tick(&state, 9_999);

    assert_eq!(state.clocks[Player::White], 0);
    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.winner, Some(Player::Black));
    assert_eq!(state.end_reason, Some(EndReason::Timeout));
}

#[test]
fn test_clocks_frozen_after_end() {
    let state = reduce(&game(5_000), &Action::Resign { player: Player::Black });
    assert_eq!(ticking_mode(&state), TickingMode::None);
    assert_eq!(tick(&state, 1_000), state);
}

#[test]
fn test_ticks_are_not_logged() {
    let state = tick(&game(5_000), 10);
    let state = tick(&state, 10);
    assert!(state.log.is_empty());
}
