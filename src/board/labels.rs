//! Label grid generator.
//!
//! Every cell of a home half carries a label: a distinct integer in
//! `1..=half_size`. The label is the credit cost for the owner to place
//! there and, read from the opposing matrix, the positional value of an
//! invading stone standing there.
//!
//! Each half receives its own independently shuffled permutation. Cells
//! outside a player's half read as zero in that player's matrix.
//!
//! ```
//! use stonebid::board::{Labels, Square};
//! use stonebid::core::{GameRng, Player};
//!
//! let labels = Labels::generate(10, 10, &mut GameRng::new(7));
//!
//! let white = labels.own_half_label(Player::White, Square::new(9, 0));
//! assert!((1..=50).contains(&white));
//! assert_eq!(labels.own_half_label(Player::White, Square::new(0, 0)), 0);
//! ```

use serde::{Deserialize, Serialize};

use super::grid::Square;
use crate::core::{GameRng, Player};

/// One player's label matrix, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelGrid {
    rows: usize,
    cols: usize,
    values: Vec<u32>,
}

impl LabelGrid {
    /// All-zero matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0; rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Label at a square; zero off the half or off the board.
    #[must_use]
    pub fn get(&self, square: Square) -> u32 {
        if square.row >= self.rows || square.col >= self.cols {
            return 0;
        }
        self.values[square.row * self.cols + square.col]
    }

    /// Overwrite a label. Off-board squares are ignored.
    pub fn set(&mut self, square: Square, label: u32) {
        if square.row < self.rows && square.col < self.cols {
            self.values[square.row * self.cols + square.col] = label;
        }
    }

    /// The square carrying `label`, if any.
    #[must_use]
    pub fn find(&self, label: u32) -> Option<Square> {
        if label == 0 {
            return None;
        }
        self.values
            .iter()
            .position(|&v| v == label)
            .map(|i| Square::new(i / self.cols, i % self.cols))
    }

    /// Non-zero labels in row-major order.
    pub fn labels(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied().filter(|&v| v > 0)
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.values.len() == self.rows * self.cols
    }
}

/// The pair of label matrices for a game. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub white_half: LabelGrid,
    pub black_half: LabelGrid,
}

impl Labels {
    /// Draw fresh labels for a `rows × cols` board.
    ///
    /// White's half is the bottom `rows / 2` rows, counted upward from the
    /// back edge; Black's is the top `rows / 2`, counted downward.
    #[must_use]
    pub fn generate(rows: usize, cols: usize, rng: &mut GameRng) -> Self {
        let half_rows = rows / 2;
        let total = half_rows * cols;

        let mut white_values: Vec<u32> = (1..=total as u32).collect();
        let mut black_values = white_values.clone();
        rng.shuffle(&mut white_values);
        rng.shuffle(&mut black_values);

        let mut white_half = LabelGrid::zeros(rows, cols);
        let mut black_half = LabelGrid::zeros(rows, cols);

        for index in 0..total {
            let row_in_half = index / cols;
            let col = index % cols;
            white_half.set(Square::new(rows - 1 - row_in_half, col), white_values[index]);
            black_half.set(Square::new(row_in_half, col), black_values[index]);
        }

        Self { white_half, black_half }
    }

    /// Build labels from explicit matrices.
    #[must_use]
    pub fn from_halves(white_half: LabelGrid, black_half: LabelGrid) -> Self {
        Self { white_half, black_half }
    }

    /// A player's own matrix.
    #[must_use]
    pub fn half(&self, player: Player) -> &LabelGrid {
        match player {
            Player::White => &self.white_half,
            Player::Black => &self.black_half,
        }
    }

    /// Label of `square` in `player`'s own half (placement cost).
    #[must_use]
    pub fn own_half_label(&self, player: Player, square: Square) -> u32 {
        self.half(player).get(square)
    }

    /// Label of `square` in the opposing half (positional value source).
    #[must_use]
    pub fn opponent_half_label(&self, player: Player, square: Square) -> u32 {
        self.half(player.opponent()).get(square)
    }
}
