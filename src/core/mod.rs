//! Core engine types: players, stones, state, actions, RNG, configuration.
//!
//! These are the values the reducer consumes and produces. Rules live in
//! `crate::rules`; this module only describes the data.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;
pub mod stone;

pub use action::{Action, ActionRecord, AssignmentMap};
pub use config::RulesConfig;
pub use error::{ConfigError, ParseStoneIdError, SnapshotError};
pub use phase::Phase;
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, MovementState, ScoreDetail, SealedBids};
pub use stone::{IdAllocator, Stone, StoneId, StoneStats, StoneTable};
