//! # stonebid
//!
//! A deterministic rules engine for a two-player bidding and capture game
//! on a labelled grid.
//!
//! ## Game Flow
//!
//! 1. **Bidding**: sealed opening bids; both pay, the higher bidder places
//!    first.
//! 2. **Placement**: players alternate placing stones on labelled squares,
//!    paying the label. Placing on label `v` unlocks `v` across the midline
//!    for the opponent.
//! 3. **Assign stats**: White, then Black, buy move distance, directions and
//!    persistence for their stones.
//! 4. **Movement bidding**: sealed bids for the move limit; only the winner
//!    pays and chooses who moves first.
//! 5. **Movement**: alternating sliding moves with captures until a side is
//!    eliminated, the limit is reached, or nobody can move.
//!
//! Clocks run throughout and resignation is always available.
//!
//! ## Design Principles
//!
//! - **One Transition**: `rules::reduce` maps `(state, action)` to the next
//!   state. Invalid actions are silent no-ops that return the input.
//! - **Self-Contained State**: the seed, clocks and action log live in
//!   `GameState`; there is no hidden global. Persist it with `snapshot`.
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: players, stones, state, actions, RNG, configuration, errors
//! - `board`: the grid, label matrices and move generation
//! - `rules`: the reducer and per-phase rules and queries
//! - `snapshot`: JSON and binary state encoding

pub mod board;
pub mod core;
pub mod rules;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, AssignmentMap, ConfigError, GameRng, GameState, Phase, Player, PlayerMap, RulesConfig,
    SnapshotError, Stone, StoneId, StoneStats,
};

pub use crate::board::{Board, Direction, DirectionMask, Labels, Square};

pub use crate::rules::{reduce, EndReason, Outcome, TickingMode};
