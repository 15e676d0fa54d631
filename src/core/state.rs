//! Game state.
//!
//! `GameState` is the single canonical value the reducer consumes and
//! produces. Collaborators read its public fields, persist it opaquely and
//! hand reconstructed copies back in; nothing outside the state (no global
//! counter, no clock) influences the next transition.
//!
//! Uses `im` persistent structures for the stone table, unlock sets and the
//! action log so that producing a new state per action is cheap.
//!
//! ## Derived fields
//!
//! `scores` and `score_details` are recomputed after every state-affecting
//! action. The next stone id is never stored; see `GameState::id_allocator`.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord, AssignmentMap};
use super::config::RulesConfig;
use super::phase::Phase;
use super::player::{Player, PlayerMap};
use super::rng::GameRng;
use super::stone::{IdAllocator, Stone, StoneId, StoneTable};
use crate::board::{Board, Labels, Square};
use crate::rules::{self, EndReason, Outcome};

/// A sealed two-player auction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedBids {
    /// Locked amounts; `None` until the player locks.
    pub amounts: PlayerMap<Option<i64>>,

    /// Set once both amounts are present and the auction resolved.
    pub revealed: bool,

    /// Higher bidder, White on ties. Set on reveal.
    pub winner: Option<Player>,
}

impl SealedBids {
    /// Whether `player` has locked a bid.
    #[must_use]
    pub fn is_locked(&self, player: Player) -> bool {
        self.amounts[player].is_some()
    }

    /// Both bids, once both players locked.
    #[must_use]
    pub fn both(&self) -> Option<(i64, i64)> {
        Some((self.amounts[Player::White]?, self.amounts[Player::Black]?))
    }
}

/// Movement-phase bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementState {
    pub bids: SealedBids,

    /// Total moves allowed, fixed by the winning movement bid.
    pub move_limit: Option<u32>,

    /// Moves made so far, both players combined.
    pub move_count: u32,

    /// Movement-auction winner, who chooses the first mover.
    pub decider: Option<Player>,

    /// First mover chosen by the decider.
    pub starting_player: Option<Player>,
}

/// One player's score breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub credits: i64,
    pub position: i64,
    pub total: i64,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Configuration ===
    /// Rules this game is played under.
    pub config: RulesConfig,

    /// Seed the labels were drawn from.
    pub seed: u64,

    // === Progression ===
    pub phase: Phase,

    /// Player to move in turn-based phases; `None` otherwise.
    pub turn: Option<Player>,

    /// Consecutive passes in the current turn-based phase.
    pub passes_in_a_row: u8,

    // === Board ===
    pub board: Board,
    pub stones: StoneTable,
    pub labels: Labels,

    // === Economy ===
    pub credits: PlayerMap<i64>,

    /// Remaining clock time in milliseconds.
    pub clocks: PlayerMap<u64>,

    pub scores: PlayerMap<i64>,
    pub score_details: PlayerMap<ScoreDetail>,

    /// Opening auction; its winner places first.
    pub bids: SealedBids,

    // === Placement ===
    pub placement_counts: PlayerMap<u8>,

    /// Labels each player may claim across the midline.
    pub unlocked_labels: PlayerMap<OrdSet<u32>>,

    pub last_placement_by: Option<Player>,

    // === Assignment and movement ===
    /// Stats each player committed, as submitted.
    pub assignments: PlayerMap<AssignmentMap>,

    pub movement: MovementState,

    // === Result ===
    pub winner: Option<Player>,
    pub end_reason: Option<EndReason>,

    /// Accepted actions, oldest first. Ticks are not logged.
    pub log: Vector<ActionRecord>,
}

impl GameState {
    /// Create a new game in the Bidding phase with labels drawn from `seed`.
    #[must_use]
    pub fn new(config: RulesConfig, seed: u64) -> Self {
        let labels = Labels::generate(config.rows, config.cols, &mut GameRng::new(seed));
        Self::with_labels(config, seed, labels)
    }

    /// Create a new game with an OS-drawn seed.
    #[must_use]
    pub fn from_entropy(config: RulesConfig) -> Self {
        let seed = GameRng::from_entropy().seed();
        Self::new(config, seed)
    }

    /// Create a new game with explicit labels.
    #[must_use]
    pub fn with_labels(config: RulesConfig, seed: u64, labels: Labels) -> Self {
        let mut state = Self {
            board: Board::new(config.rows, config.cols),
            stones: StoneTable::new(),
            labels,
            credits: PlayerMap::with_value(config.starting_credits),
            clocks: PlayerMap::with_value(config.clock_ms),
            scores: PlayerMap::default(),
            score_details: PlayerMap::default(),
            bids: SealedBids::default(),
            placement_counts: PlayerMap::default(),
            unlocked_labels: PlayerMap::default(),
            last_placement_by: None,
            assignments: PlayerMap::default(),
            movement: MovementState::default(),
            phase: Phase::Bidding,
            turn: None,
            passes_in_a_row: 0,
            winner: None,
            end_reason: None,
            log: Vector::new(),
            config,
            seed,
        };
        state.refresh_scores();
        state
    }

    /// Apply an action, returning the next state.
    ///
    /// Rejected actions return an unchanged copy.
    #[must_use]
    pub fn apply(&self, action: &Action) -> Self {
        rules::reduce(self, action)
    }

    // === Stones ===

    /// Id allocator re-derived from the stones present.
    #[must_use]
    pub fn id_allocator(&self) -> IdAllocator {
        IdAllocator::restore(self.stones.keys().copied())
    }

    /// Stone on a square.
    #[must_use]
    pub fn stone_at(&self, square: Square) -> Option<&Stone> {
        self.board.get(square).and_then(|id| self.stones.get(&id))
    }

    /// A player's stones in id order.
    pub fn stones_of(&self, player: Player) -> impl Iterator<Item = &Stone> {
        self.stones.values().filter(move |s| s.owner == player)
    }

    /// Number of stones a player has on the board.
    #[must_use]
    pub fn stone_count(&self, player: Player) -> usize {
        self.stones_of(player).count()
    }

    /// Put a stone on the board and in the stone table.
    ///
    /// Replaces any stone already on the square. Used when placing and
    /// when setting up positions.
    pub fn insert_stone(&mut self, stone: Stone) {
        if let Some(previous) = self.board.get(stone.square) {
            self.stones.remove(&previous);
        }
        if let Some(old) = self.stones.get(&stone.id) {
            self.board.set(old.square, None);
        }
        self.board.set(stone.square, Some(stone.id));
        self.stones.insert(stone.id, stone);
    }

    /// Take a stone off the board. Returns it if it existed.
    pub fn remove_stone(&mut self, id: StoneId) -> Option<Stone> {
        let stone = self.stones.remove(&id)?;
        if self.board.get(stone.square) == Some(id) {
            self.board.set(stone.square, None);
        }
        Some(stone)
    }

    // === Result ===

    /// The final result once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.phase.is_ended() {
            return None;
        }
        Some(Outcome {
            winner: self.winner?,
            reason: self.end_reason?,
        })
    }

    /// Recompute `scores` and `score_details` from credits and positions.
    pub fn refresh_scores(&mut self) {
        let details = rules::compute_score_details(self);
        self.scores = PlayerMap::new(|p| details[p].total);
        self.score_details = details;
    }

    /// Check that board, stones and labels agree with each other and the
    /// configured shape.
    pub fn check_consistency(&self) -> Result<(), String> {
        let (rows, cols) = (self.config.rows, self.config.cols);
        if !self.board.is_well_formed() || self.board.rows() != rows || self.board.cols() != cols {
            return Err(format!("board is not {rows}x{cols}"));
        }
        for grid in [&self.labels.white_half, &self.labels.black_half] {
            if !grid.is_well_formed() || grid.rows() != rows || grid.cols() != cols {
                return Err(format!("label matrix is not {rows}x{cols}"));
            }
        }
        for (id, stone) in self.stones.iter() {
            if *id != stone.id {
                return Err(format!("stone {} stored under key {id}", stone.id));
            }
            if self.board.get(stone.square) != Some(stone.id) {
                return Err(format!("stone {id} is not on its square {}", stone.square));
            }
        }
        for (square, id) in self.board.occupied() {
            match self.stones.get(&id) {
                Some(stone) if stone.square == square => {}
                Some(stone) => {
                    return Err(format!("square {square} repeats stone {id} from {}", stone.square));
                }
                None => return Err(format!("square {square} names missing stone {id}")),
            }
        }
        Ok(())
    }
}
