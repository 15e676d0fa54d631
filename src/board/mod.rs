//! Board geometry: the cell grid, the label matrices and move generation.

pub mod geometry;
pub mod grid;
pub mod labels;

pub use geometry::{legal_moves, Direction, DirectionMask, MoveList};
pub use grid::{Board, Square};
pub use labels::{LabelGrid, Labels};
