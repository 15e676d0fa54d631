//! Actions consumed by the reducer.
//!
//! Every input from a driver (UI, network relay, timer) is an `Action`.
//! Actions carry everything the reducer needs, including randomness seeds
//! and elapsed time, so applying one is a pure function of the state.
//!
//! ## Example
//!
//! ```
//! use stonebid::core::{Action, Player};
//!
//! let bid = Action::LockBid { player: Player::White, amount: 12 };
//! let tick = Action::Tick { dt_ms: 250 };
//!
//! assert_eq!(bid.actor(), Some(Player::White));
//! assert_eq!(tick.actor(), None);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::player::Player;
use super::stone::{StoneId, StoneStats};

/// Per-stone stats submitted in one assignment.
pub type AssignmentMap = FxHashMap<StoneId, StoneStats>;

/// A single input to the reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Start a new game with labels drawn from `seed`, keeping the rules.
    Reset { seed: u64 },

    /// `dt_ms` milliseconds elapsed on the driver's timer.
    Tick { dt_ms: u64 },

    /// Sealed opening bid.
    LockBid { player: Player, amount: i64 },

    /// Leave the revealed opening auction for Placement.
    StartPlacement,

    /// Place a stone for the player to move.
    PlacementSquare { row: usize, col: usize },

    /// The player to move passes during Placement.
    PlacementPass,

    /// Commit stats for the player's stones.
    AssignStats {
        player: Player,
        assignments: AssignmentMap,
    },

    /// Sealed bid for the move limit.
    MovementBid { player: Player, amount: i64 },

    /// The movement-auction winner names who moves first.
    MovementPlan { player: Player, starting_player: Player },

    /// Move one of the mover's stones.
    MovementMove { stone: StoneId, row: usize, col: usize },

    /// The player to move passes during Movement.
    MovementPass,

    /// Concede the game.
    Resign { player: Player },
}

impl Action {
    /// The player explicitly named by the action, if any.
    ///
    /// Turn-based actions (placement, moves, passes) act for whoever is to
    /// move and name no player.
    #[must_use]
    pub fn actor(&self) -> Option<Player> {
        match self {
            Action::LockBid { player, .. }
            | Action::AssignStats { player, .. }
            | Action::MovementBid { player, .. }
            | Action::MovementPlan { player, .. }
            | Action::Resign { player } => Some(*player),
            _ => None,
        }
    }

    /// Whether the action is logged when accepted.
    #[must_use]
    pub fn is_logged(&self) -> bool {
        !matches!(self, Action::Tick { .. })
    }
}

/// An accepted action with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the game's log, starting at 0.
    pub sequence: u32,

    /// Phase the action was accepted in.
    pub phase: Phase,

    /// Player who acted: the named player, or the player to move.
    pub player: Option<Player>,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, phase: Phase, player: Option<Player>, action: Action) -> Self {
        Self {
            sequence,
            phase,
            player,
            action,
        }
    }
}
