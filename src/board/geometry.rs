//! Directions and legal-move generation.
//!
//! A stone with distance `d` and a direction mask slides up to `d` cells
//! along every enabled compass direction:
//! - an empty cell is a destination and the slide continues;
//! - an enemy-occupied cell is a destination (a capture) and ends the slide;
//! - a friendly-occupied cell ends the slide and is not a destination.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Board, Square};
use crate::core::{Stone, StoneTable};

/// The eight compass directions. "Up" is towards row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Bit in a `DirectionMask`. The axis bits keep their historical values.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Right => 1,
            Direction::Left => 2,
            Direction::Up => 4,
            Direction::Down => 8,
            Direction::UpRight => 16,
            Direction::UpLeft => 32,
            Direction::DownRight => 64,
            Direction::DownLeft => 128,
        }
    }

    /// Row and column step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// Set of enabled directions, one bit per `Direction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionMask(pub u8);

impl DirectionMask {
    pub const NONE: DirectionMask = DirectionMask(0);
    pub const ORTHOGONAL: DirectionMask = DirectionMask(0b0000_1111);
    pub const DIAGONAL: DirectionMask = DirectionMask(0b1111_0000);
    pub const ALL: DirectionMask = DirectionMask(0b1111_1111);

    /// Build a mask from a list of directions.
    ///
    /// ```
    /// use stonebid::board::{Direction, DirectionMask};
    ///
    /// let mask = DirectionMask::from_directions(&[Direction::Right, Direction::Down]);
    /// assert_eq!(mask.0, 9);
    /// assert_eq!(mask.count(), 2);
    /// ```
    #[must_use]
    pub fn from_directions(directions: &[Direction]) -> Self {
        Self(directions.iter().fold(0, |acc, d| acc | d.bit()))
    }

    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Number of enabled directions.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled directions in `Direction::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

/// Destinations for one stone. Fits a distance-2 star without allocating.
pub type MoveList = SmallVec<[Square; 16]>;

/// Legal destinations for `stone` on `board`.
///
/// Returns an empty list when the stone has no stats, zero distance or no
/// enabled directions.
#[must_use]
pub fn legal_moves(board: &Board, stones: &StoneTable, stone: &Stone) -> MoveList {
    let mut out = MoveList::new();
    let Some(stats) = stone.stats else {
        return out;
    };

    for direction in stats.directions.iter() {
        let (dr, dc) = direction.delta();
        for step in 1..=stats.distance as usize {
            let Some(target) = stone.square.offset(dr, dc, step, board.rows(), board.cols()) else {
                break;
            };
            match board.get(target) {
                None => out.push(target),
                Some(id) => {
                    let enemy = stones.get(&id).is_some_and(|occ| occ.owner != stone.owner);
                    if enemy {
                        out.push(target);
                    }
                    break;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, StoneId, StoneStats};

    fn place(board: &mut Board, stones: &mut StoneTable, stone: Stone) {
        board.set(stone.square, Some(stone.id));
        stones.insert(stone.id, stone);
    }

    fn stats(distance: u8, directions: DirectionMask) -> Option<StoneStats> {
        Some(StoneStats {
            distance,
            directions,
            persistent: false,
        })
    }

    #[test]
    fn test_direction_bits_are_distinct() {
        let all = Direction::ALL.iter().fold(0u8, |acc, d| {
            assert_eq!(acc & d.bit(), 0);
            acc | d.bit()
        });
        assert_eq!(all, DirectionMask::ALL.0);
    }

    #[test]
    fn test_mask_iter() {
        let mask = DirectionMask::NONE.with(Direction::Up).with(Direction::DownLeft);
        let dirs: Vec<_> = mask.iter().collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::DownLeft]);
        assert_eq!(DirectionMask::DIAGONAL.count(), 4);
    }

    #[test]
    fn test_distance_blocking_and_capture() {
        let mut board = Board::new(10, 10);
        let mut stones = StoneTable::new();

        let mover = Stone {
            id: StoneId::new(1),
            owner: Player::White,
            square: Square::new(6, 4),
            stats: stats(2, DirectionMask::from_directions(&[Direction::Right, Direction::Down])),
        };
        let ally = Stone::new(StoneId::new(2), Player::White, Square::new(6, 5));
        let enemy = Stone::new(StoneId::new(3), Player::Black, Square::new(7, 4));
        place(&mut board, &mut stones, mover.clone());
        place(&mut board, &mut stones, ally);
        place(&mut board, &mut stones, enemy);

        let moves = legal_moves(&board, &stones, &mover);
        assert_eq!(moves.as_slice(), &[Square::new(7, 4)]);
    }

    #[test]
    fn test_walks_full_distance_on_empty_board() {
        let mut board = Board::new(10, 10);
        let mut stones = StoneTable::new();
        let stone = Stone {
            id: StoneId::new(1),
            owner: Player::Black,
            square: Square::new(0, 0),
            stats: stats(3, DirectionMask::ALL),
        };
        place(&mut board, &mut stones, stone.clone());

        let moves = legal_moves(&board, &stones, &stone);
        // Right, Down and DownRight are the only on-board directions from a corner.
        assert_eq!(moves.len(), 9);
        assert!(moves.contains(&Square::new(3, 3)));
        assert!(moves.contains(&Square::new(0, 3)));
        assert!(!moves.contains(&Square::new(0, 4)));
    }

    #[test]
    fn test_diagonal_capture_stops_slide() {
        let mut board = Board::new(10, 10);
        let mut stones = StoneTable::new();
        let mover = Stone {
            id: StoneId::new(1),
            owner: Player::White,
            square: Square::new(5, 5),
            stats: stats(5, DirectionMask::NONE.with(Direction::UpLeft)),
        };
        place(&mut board, &mut stones, mover.clone());
        place(&mut board, &mut stones, Stone::new(StoneId::new(2), Player::Black, Square::new(3, 3)));

        let moves = legal_moves(&board, &stones, &mover);
        assert_eq!(moves.as_slice(), &[Square::new(4, 4), Square::new(3, 3)]);
    }

    #[test]
    fn test_no_stats_no_moves() {
        let mut board = Board::new(10, 10);
        let mut stones = StoneTable::new();
        let stone = Stone::new(StoneId::new(4), Player::White, Square::new(5, 5));
        place(&mut board, &mut stones, stone.clone());

        assert!(legal_moves(&board, &stones, &stone).is_empty());
    }

    #[test]
    fn test_empty_mask_no_moves() {
        let mut board = Board::new(10, 10);
        let mut stones = StoneTable::new();
        let stone = Stone {
            id: StoneId::new(4),
            owner: Player::White,
            square: Square::new(5, 5),
            stats: stats(5, DirectionMask::NONE),
        };
        place(&mut board, &mut stones, stone.clone());

        assert!(legal_moves(&board, &stones, &stone).is_empty());
    }
}
