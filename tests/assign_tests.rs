//! Stat assignment tests.

use stonebid::board::{Direction, DirectionMask, LabelGrid, Labels, Square};
use stonebid::core::{Action, AssignmentMap, GameState, Phase, Player, RulesConfig, StoneId, StoneStats};
use stonebid::rules::{assignment_cost, reduce, ticking_mode, TickingMode};

/// A 4×2 game after placement: White owns S1 on (3, 0), Black owns S2 on
/// (0, 1). Both paid 1 credit.
fn assigning() -> GameState {
    let mut white = LabelGrid::zeros(4, 2);
    let mut black = LabelGrid::zeros(4, 2);
    for (label, (row, col)) in [(3, 0), (3, 1), (2, 0), (2, 1)].into_iter().enumerate() {
        white.set(Square::new(row, col), label as u32 + 1);
    }
    for (label, (row, col)) in [(0, 1), (0, 0), (1, 1), (1, 0)].into_iter().enumerate() {
        black.set(Square::new(row, col), label as u32 + 1);
    }
    let config = RulesConfig::default().with_board(4, 2);
    let state = GameState::with_labels(config, 0, Labels::from_halves(white, black));

    [
        Action::LockBid { player: Player::White, amount: 0 },
        Action::LockBid { player: Player::Black, amount: 0 },
        Action::StartPlacement,
        Action::PlacementSquare { row: 3, col: 0 },
        Action::PlacementSquare { row: 0, col: 1 },
        Action::PlacementPass,
        Action::PlacementPass,
    ]
    .iter()
    .fold(state, |state, action| reduce(&state, action))
}

fn assign(state: &GameState, player: Player, entries: &[(u32, StoneStats)]) -> GameState {
    let assignments: AssignmentMap = entries.iter().map(|&(id, stats)| (StoneId::new(id), stats)).collect();
    reduce(state, &Action::AssignStats { player, assignments })
}

#[test]
fn test_assignment_order_white_then_black() {
    let state = assigning();
    assert_eq!(state.phase, Phase::AssignStats(Player::White));
    assert_eq!(ticking_mode(&state), TickingMode::Only(Player::White));

    let stats = StoneStats::new(1, DirectionMask::NONE.with(Direction::Down), false);
    assert_eq!(assign(&state, Player::Black, &[(2, stats)]), state);

    let state = assign(&state, Player::White, &[]);
    assert_eq!(state.phase, Phase::AssignStats(Player::Black));
    assert_eq!(ticking_mode(&state), TickingMode::Only(Player::Black));

    let state = assign(&state, Player::Black, &[(2, stats)]);
    assert_eq!(state.phase, Phase::MovementBidding);
    assert_eq!(ticking_mode(&state), TickingMode::Both);
}

#[test]
fn test_cost_counts_directions_and_persistence() {
    let state = assigning();
    let rook = StoneStats::new(3, DirectionMask::ORTHOGONAL, true);
    assert_eq!(rook.cost(), 15);

    let state = assign(&state, Player::White, &[(1, rook)]);
    assert_eq!(state.credits[Player::White], 99 - 15);
    assert_eq!(state.stones[&StoneId::new(1)].stats, Some(rook));
    assert_eq!(assignment_cost(&state.assignments[Player::White]), 15);
}

#[test]
fn test_over_budget_rejected_whole() {
    let mut state = assigning();
    state.credits[Player::White] = 10;
    let expensive = StoneStats::new(5, DirectionMask::ALL, true);
    assert_eq!(assign(&state, Player::White, &[(1, expensive)]), state);
}

#[test]
fn test_foreign_or_unknown_stone_rejected() {
    let state = assigning();
    let stats = StoneStats::new(1, DirectionMask::ORTHOGONAL, false);
    assert_eq!(assign(&state, Player::White, &[(2, stats)]), state);
    assert_eq!(assign(&state, Player::White, &[(1, stats), (9, stats)]), state);
}

#[test]
fn test_distance_bounds() {
    let state = assigning();
    let zero = StoneStats::new(0, DirectionMask::ORTHOGONAL, false);
    let far = StoneStats::new(6, DirectionMask::ORTHOGONAL, false);
    assert_eq!(assign(&state, Player::White, &[(1, zero)]), state);
    assert_eq!(assign(&state, Player::White, &[(1, far)]), state);

    let max = StoneStats::new(5, DirectionMask::ORTHOGONAL, false);
    let next = assign(&state, Player::White, &[(1, max)]);
    assert_eq!(next.phase, Phase::AssignStats(Player::Black));
}

#[test]
fn test_unassigned_stones_cannot_move() {
    let state = assigning();
    let state = assign(&state, Player::White, &[]);
    let state = assign(&state, Player::Black, &[]);

    assert!(state.stones.values().all(|stone| stone.stats.is_none()));
    assert_eq!(state.credits[Player::White], 99);
    assert_eq!(state.credits[Player::Black], 99);
}
