//! Board grid: which stone, if any, stands on each cell.
//!
//! The board only stores stone identifiers. Stone data (owner, stats) lives
//! in the state's stone table, and the two must agree: a stone id appears
//! in at most one cell, and that cell is the stone's recorded square.

use serde::{Deserialize, Serialize};

use crate::core::StoneId;

/// A board coordinate. Row 0 is Black's back edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Create a new square.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The square `steps` cells away along `(dr, dc)`, if it stays on a
    /// `rows × cols` board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize, steps: usize, rows: usize, cols: usize) -> Option<Self> {
        let row = self.row as isize + dr * steps as isize;
        let col = self.col as isize + dc * steps as isize;
        if row < 0 || col < 0 || row >= rows as isize || col >= cols as isize {
            return None;
        }
        Some(Self::new(row as usize, col as usize))
    }

    /// Vertically mirrored square on a board with `rows` rows.
    #[must_use]
    pub const fn mirrored(self, rows: usize) -> Self {
        Self::new(rows - 1 - self.row, self.col)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular grid of optional stone ids, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<StoneId>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
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

    /// Whether the square lies on the board.
    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        square.row < self.rows && square.col < self.cols
    }

    /// Stone id on a square. Off-board squares read as empty.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<StoneId> {
        if !self.contains(square) {
            return None;
        }
        self.cells[square.row * self.cols + square.col]
    }

    /// Whether the square is on the board and holds no stone.
    #[must_use]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.contains(square) && self.get(square).is_none()
    }

    /// Put (or clear, with `None`) a stone id on a square.
    ///
    /// Off-board squares are ignored.
    pub fn set(&mut self, square: Square, stone: Option<StoneId>) {
        if self.contains(square) {
            self.cells[square.row * self.cols + square.col] = stone;
        }
    }

    /// Iterate over all occupied squares and their stone ids.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, StoneId)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|id| (Square::new(i / cols, i % cols), id)))
    }

    /// Whether the backing storage matches the declared shape.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == self.rows * self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new(10, 10);
        assert_eq!(board.rows(), 10);
        assert_eq!(board.cols(), 10);
        assert_eq!(board.occupied().count(), 0);
        assert!(board.is_empty_at(Square::new(9, 9)));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(10, 10);
        board.set(Square::new(3, 4), Some(StoneId::new(7)));

        assert_eq!(board.get(Square::new(3, 4)), Some(StoneId::new(7)));
        assert!(!board.is_empty_at(Square::new(3, 4)));

        let occupied: Vec<_> = board.occupied().collect();
        assert_eq!(occupied, vec![(Square::new(3, 4), StoneId::new(7))]);

        board.set(Square::new(3, 4), None);
        assert!(board.is_empty_at(Square::new(3, 4)));
    }

    #[test]
    fn test_off_board_access() {
        let mut board = Board::new(4, 4);
        board.set(Square::new(4, 0), Some(StoneId::new(1)));

        assert_eq!(board.get(Square::new(4, 0)), None);
        assert!(!board.is_empty_at(Square::new(4, 0)));
        assert_eq!(board.occupied().count(), 0);
    }

    #[test]
    fn test_offset() {
        let sq = Square::new(1, 1);
        assert_eq!(sq.offset(-1, -1, 1, 10, 10), Some(Square::new(0, 0)));
        assert_eq!(sq.offset(-1, 0, 2, 10, 10), None);
        assert_eq!(sq.offset(1, 1, 3, 10, 10), Some(Square::new(4, 4)));
        assert_eq!(sq.offset(0, 1, 9, 10, 10), None);
    }

    #[test]
    fn test_mirrored() {
        assert_eq!(Square::new(9, 0).mirrored(10), Square::new(0, 0));
        assert_eq!(Square::new(2, 7).mirrored(10), Square::new(7, 7));
    }
}
