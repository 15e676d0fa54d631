//! Stones and stone identifiers.
//!
//! ## Identifiers
//!
//! Stones are named `S1`, `S2`, ... in creation order. The next identifier
//! is never stored: `IdAllocator::restore` re-derives it from the highest
//! suffix present, so any process that rebuilds a state from storage
//! allocates the same ids.
//!
//! ```
//! use stonebid::core::{IdAllocator, StoneId};
//!
//! let existing = ["S2", "S5"].map(|s| s.parse::<StoneId>().unwrap());
//! let mut ids = IdAllocator::restore(existing);
//! assert_eq!(ids.alloc().map(|id| id.to_string()), Some("S6".to_string()));
//!
//! let mut fresh = IdAllocator::restore(std::iter::empty());
//! assert_eq!(fresh.alloc(), Some(StoneId::new(1)));
//!
//! let mut full = IdAllocator::restore([StoneId::new(u32::MAX)]);
//! assert_eq!(full.alloc(), None);
//! ```

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::error::ParseStoneIdError;
use super::player::Player;
use crate::board::{DirectionMask, Square};

/// Unique identifier of a stone, rendered as `S<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoneId(pub u32);

impl StoneId {
    #[must_use]
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    /// Numeric suffix.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl std::str::FromStr for StoneId {
    type Err = ParseStoneIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('S')
            .filter(|digits| is_canonical_number(digits))
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(StoneId)
            .ok_or_else(|| ParseStoneIdError(s.to_string()))
    }
}

/// Plain ASCII digits without a sign or leading zeros, so every id has one
/// spelling.
fn is_canonical_number(digits: &str) -> bool {
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
}

impl TryFrom<String> for StoneId {
    type Error = ParseStoneIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StoneId> for String {
    fn from(id: StoneId) -> Self {
        id.to_string()
    }
}

/// Hands out stone ids for a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdAllocator {
    /// `None` once the id space is used up.
    next: Option<u32>,
}

impl IdAllocator {
    /// Continue numbering after the highest id in `existing`.
    pub fn restore(existing: impl IntoIterator<Item = StoneId>) -> Self {
        let highest = existing.into_iter().map(StoneId::raw).max().unwrap_or(0);
        Self {
            next: highest.checked_add(1),
        }
    }

    /// Allocate the next id, or `None` when no ids are left.
    pub fn alloc(&mut self) -> Option<StoneId> {
        let id = StoneId(self.next?);
        self.next = id.0.checked_add(1);
        Some(id)
    }
}

/// Combat attributes fixed during stat assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoneStats {
    /// Maximum cells travelled per move.
    pub distance: u8,
    /// Directions the stone may slide in.
    pub directions: DirectionMask,
    /// Survives its own captures.
    pub persistent: bool,
}

impl StoneStats {
    #[must_use]
    pub const fn new(distance: u8, directions: DirectionMask, persistent: bool) -> Self {
        Self {
            distance,
            directions,
            persistent,
        }
    }

    /// Credits charged for these stats: `distance × (directions + persistence)`.
    ///
    /// ```
    /// use stonebid::board::DirectionMask;
    /// use stonebid::core::StoneStats;
    ///
    /// assert_eq!(StoneStats::new(3, DirectionMask::ORTHOGONAL, false).cost(), 12);
    /// assert_eq!(StoneStats::new(2, DirectionMask::ALL, true).cost(), 18);
    /// ```
    #[must_use]
    pub fn cost(&self) -> i64 {
        let bits = i64::from(self.directions.count()) + i64::from(self.persistent);
        i64::from(self.distance) * bits
    }
}

/// A stone on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub id: StoneId,
    pub owner: Player,
    pub square: Square,
    /// Unset until the owner's stat assignment.
    pub stats: Option<StoneStats>,
}

impl Stone {
    /// A freshly placed stone with no stats.
    #[must_use]
    pub fn new(id: StoneId, owner: Player, square: Square) -> Self {
        Self {
            id,
            owner,
            square,
            stats: None,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: StoneStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Whether the stone survives capturing.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.stats.is_some_and(|s| s.persistent)
    }
}

/// All live stones, keyed by id. Ordered so iteration is deterministic.
pub type StoneTable = OrdMap<StoneId, Stone>;
