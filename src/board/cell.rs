//! Board coordinates.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Rows and columns on the board.
pub const BOARD_SIZE: usize = 10;

/// Total cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A (row, col) position on the 10×10 board.
///
/// Serialized as a `[row, col]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "(usize, usize)", try_from = "(usize, usize)")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// The four corner cells: top-left, top-right, bottom-left, bottom-right.
    pub const CORNERS: [Cell; 4] = [
        Cell::new(0, 0),
        Cell::new(0, BOARD_SIZE - 1),
        Cell::new(BOARD_SIZE - 1, 0),
        Cell::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
    ];

    /// Create a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is off the board. Use `try_new` for
    /// untrusted input.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "Cell is off the board");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Create a cell, rejecting off-board coordinates.
    pub fn try_new(row: usize, col: usize) -> Result<Self, ParseError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self::new(row, col))
        } else {
            Err(ParseError::Cell { row, col })
        }
    }

    /// Cell at a row-major index (0..100).
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0..100).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Check whether this is one of the four corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell::from_index)
    }

    /// Chebyshev (king-move) distance.
    #[must_use]
    pub fn chebyshev(self, other: Cell) -> usize {
        self.row().abs_diff(other.row()).max(self.col().abs_diff(other.col()))
    }

    /// Squared Euclidean distance. Orders the same as Euclidean distance
    /// without leaving the integers.
    #[must_use]
    pub fn distance_squared(self, other: Cell) -> usize {
        let dr = self.row().abs_diff(other.row());
        let dc = self.col().abs_diff(other.col());
        dr * dr + dc * dc
    }

    /// Squared Euclidean distance to the nearest corner.
    #[must_use]
    pub fn corner_distance_squared(self) -> usize {
        Cell::CORNERS
            .iter()
            .map(|&corner| self.distance_squared(corner))
            .min()
            .unwrap_or(0)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row(), cell.col())
    }
}

impl TryFrom<(usize, usize)> for Cell {
    type Error = ParseError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Cell::try_new(row, col)
    }
}
