//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-player: White and Black. White's home half is
//! the bottom of the board, Black's the top.
//!
//! ## PlayerMap
//!
//! Per-player data storage with one slot per side, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "B")]
    Black,
}

impl Player {
    /// Both players, White first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Rows making up this player's home half on a board with `rows` rows.
    ///
    /// ```
    /// use stonebid::core::Player;
    ///
    /// assert_eq!(Player::White.home_rows(10), 5..10);
    /// assert_eq!(Player::Black.home_rows(10), 0..5);
    /// ```
    #[must_use]
    pub const fn home_rows(self, rows: usize) -> Range<usize> {
        let mid = rows / 2;
        match self {
            Player::White => mid..rows,
            Player::Black => 0..mid,
        }
    }

    /// Whether `row` lies in this player's home half.
    #[must_use]
    pub fn is_home_row(self, row: usize, rows: usize) -> bool {
        self.home_rows(rows).contains(&row)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Per-player data storage.
///
/// Serializes as `{"W": .., "B": ..}` so stored documents stay readable.
///
/// ## Example
///
/// ```
/// use stonebid::core::{Player, PlayerMap};
///
/// let mut credits: PlayerMap<i64> = PlayerMap::with_value(100);
/// credits[Player::Black] -= 5;
///
/// assert_eq!(credits[Player::White], 100);
/// assert_eq!(credits[Player::Black], 95);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    #[serde(rename = "W")]
    white: T,
    #[serde(rename = "B")]
    black: T,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            white: factory(Player::White),
            black: factory(Player::Black),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            white: value.clone(),
            black: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::White => &self.white,
            Player::Black => &self.black,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::White => &mut self.white,
            Player::Black => &mut self.black,
        }
    }

    /// Iterate over (Player, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::White, &self.white), (Player::Black, &self.black)].into_iter()
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
