//! Board ownership state.
//!
//! `BoardState` is the mutable half of the board: which player owns each
//! cell. It is independent of the printed layout. The wire and persisted
//! form is a flat, row-major list of 100 marks, which `to_flat` and
//! `from_flat` convert losslessly.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::cell::{Cell, BOARD_SIZE, CELL_COUNT};
use super::mark::Mark;
use crate::error::ParseError;

/// 10×10 grid of marks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Mark>", try_from = "Vec<Mark>")]
pub struct BoardState {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardState {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Mark {
        self.cells[cell.row()][cell.col()]
    }

    /// Set the mark at `cell`. Corners are never owned.
    pub fn set(&mut self, cell: Cell, mark: Mark) {
        debug_assert!(!cell.is_corner() || mark.is_empty(), "corner {cell} cannot be owned");
        self.cells[cell.row()][cell.col()] = mark;
    }

    /// Rows of marks, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Check whether no cell is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|m| m.is_empty())
    }

    /// Cells currently holding `mark`, in row-major order.
    pub fn cells_with(&self, mark: Mark) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.get(cell) == mark)
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&m| m == mark).count()
    }

    /// Flatten to the 100-element row-major wire form.
    #[must_use]
    pub fn to_flat(&self) -> Vec<Mark> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Rebuild from the 100-element row-major wire form.
    ///
    /// Rejects a wrong length and any owned corner.
    pub fn from_flat(marks: &[Mark]) -> Result<Self, ParseError> {
        if marks.len() != CELL_COUNT {
            return Err(ParseError::BoardLength {
                expected: CELL_COUNT,
                actual: marks.len(),
            });
        }
        let mut board = Self::new();
        for (i, &mark) in marks.iter().enumerate() {
            let cell = Cell::from_index(i);
            if cell.is_corner() && !mark.is_empty() {
                return Err(ParseError::OwnedCorner { cell });
            }
            board.set(cell, mark);
        }
        Ok(board)
    }

    /// Parse the flat form from its text tokens (`""`, `"p1"`, `"p2"`).
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let marks = tokens
            .into_iter()
            .map(|t| t.as_ref().parse::<Mark>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_flat(&marks)
    }
}

impl Index<Cell> for BoardState {
    type Output = Mark;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.cells[cell.row()][cell.col()]
    }
}

impl From<BoardState> for Vec<Mark> {
    fn from(board: BoardState) -> Self {
        board.to_flat()
    }
}

impl TryFrom<Vec<Mark>> for BoardState {
    type Error = ParseError;

    fn try_from(marks: Vec<Mark>) -> Result<Self, Self::Error> {
        Self::from_flat(&marks)
    }
}
