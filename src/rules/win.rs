//! Win detection.
//!
//! A win is five contiguous cells owned by the same player along a row, a
//! column, or either diagonal. A run of four that ends next to a corner
//! also wins: the blank corner stands in as the fifth cell.
//!
//! ## Scan order
//!
//! When several sequences exist at once the first one found is reported.
//! The order is fixed:
//!
//! 1. rows, top to bottom, start columns 0..=5
//! 2. columns, left to right, start rows 0..=5
//! 3. down-right diagonals, start rows 0..=5 × start columns 0..=5
//! 4. up-right diagonals, start rows 9 down to 4 × start columns 0..=5
//! 5. the twelve corner runs, corner by corner (top-left, top-right,
//!    bottom-left, bottom-right), each as row, column, diagonal

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Cell, Mark, BOARD_SIZE};

/// Cells in a winning sequence.
pub const SEQUENCE_LENGTH: usize = 5;

/// Direction of a winning sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SequenceKind {
    #[serde(rename = "row")]
    Row,
    #[serde(rename = "col")]
    Col,
    #[serde(rename = "diagDownRight")]
    DiagDownRight,
    #[serde(rename = "diagUpRight")]
    DiagUpRight,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 4] = [
        SequenceKind::Row,
        SequenceKind::Col,
        SequenceKind::DiagDownRight,
        SequenceKind::DiagUpRight,
    ];

    /// (row, col) step between consecutive cells.
    const fn step(self) -> (isize, isize) {
        match self {
            SequenceKind::Row => (0, 1),
            SequenceKind::Col => (1, 0),
            SequenceKind::DiagDownRight => (1, 1),
            SequenceKind::DiagUpRight => (-1, 1),
        }
    }
}

/// A completed sequence: its direction and its five cells in scan order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningSequence {
    #[serde(rename = "type")]
    pub kind: SequenceKind,
    pub coordinates: [Cell; SEQUENCE_LENGTH],
}

impl WinningSequence {
    /// Check whether one of the cells is a corner.
    #[must_use]
    pub fn uses_corner(&self) -> bool {
        self.coordinates.iter().any(|c| c.is_corner())
    }

    /// The player owning the sequence on `board`, taken from its first
    /// non-corner cell.
    #[must_use]
    pub fn owner(&self, board: &BoardState) -> Option<crate::core::Player> {
        self.coordinates
            .iter()
            .find(|c| !c.is_corner())
            .and_then(|&c| board.get(c).owner())
    }
}

/// A four-cell run that borrows a corner as its fifth cell.
///
/// `start` is the top or left end of the five-cell line so coordinates come
/// out in scan order; `corner_first` says whether that end is the corner.
struct CornerRun {
    kind: SequenceKind,
    start: (usize, usize),
    corner_first: bool,
}

const LAST: usize = BOARD_SIZE - 1;

const CORNER_RUNS: [CornerRun; 12] = [
    // top-left
    CornerRun { kind: SequenceKind::Row, start: (0, 0), corner_first: true },
    CornerRun { kind: SequenceKind::Col, start: (0, 0), corner_first: true },
    CornerRun { kind: SequenceKind::DiagDownRight, start: (0, 0), corner_first: true },
    // top-right
    CornerRun { kind: SequenceKind::Row, start: (0, LAST - 4), corner_first: false },
    CornerRun { kind: SequenceKind::Col, start: (0, LAST), corner_first: true },
    CornerRun { kind: SequenceKind::DiagUpRight, start: (4, LAST - 4), corner_first: false },
    // bottom-left
    CornerRun { kind: SequenceKind::Row, start: (LAST, 0), corner_first: true },
    CornerRun { kind: SequenceKind::Col, start: (LAST - 4, 0), corner_first: false },
    CornerRun { kind: SequenceKind::DiagUpRight, start: (LAST, 0), corner_first: true },
    // bottom-right
    CornerRun { kind: SequenceKind::Row, start: (LAST, LAST - 4), corner_first: false },
    CornerRun { kind: SequenceKind::Col, start: (LAST - 4, LAST), corner_first: false },
    CornerRun { kind: SequenceKind::DiagDownRight, start: (LAST - 4, LAST - 4), corner_first: false },
];

/// The five cells of a line starting at `start` in direction `kind`.
///
/// Callers only pass starts whose line stays on the board.
fn line(kind: SequenceKind, start: (usize, usize)) -> [Cell; SEQUENCE_LENGTH] {
    let (dr, dc) = kind.step();
    std::array::from_fn(|i| {
        let i = i as isize;
        let row = start.0 as isize + dr * i;
        let col = start.1 as isize + dc * i;
        Cell::new(row as usize, col as usize)
    })
}

/// Check that `cells` share one non-empty mark.
fn same_owner(board: &BoardState, cells: &[Cell]) -> bool {
    let Some((first, rest)) = cells.split_first() else {
        return false;
    };
    let mark = board.get(*first);
    mark != Mark::Empty && rest.iter().all(|&c| board.get(c) == mark)
}

fn check_line(board: &BoardState, kind: SequenceKind, start: (usize, usize)) -> Option<WinningSequence> {
    let coordinates = line(kind, start);
    same_owner(board, &coordinates).then_some(WinningSequence { kind, coordinates })
}

fn check_corner_run(board: &BoardState, run: &CornerRun) -> Option<WinningSequence> {
    let coordinates = line(run.kind, run.start);
    let owned = if run.corner_first {
        &coordinates[1..]
    } else {
        &coordinates[..SEQUENCE_LENGTH - 1]
    };
    same_owner(board, owned).then_some(WinningSequence {
        kind: run.kind,
        coordinates,
    })
}

/// Scan the board for a completed sequence, in the fixed scan order.
#[must_use]
pub fn detect_win(board: &BoardState) -> Option<WinningSequence> {
    let starts = 0..=BOARD_SIZE - SEQUENCE_LENGTH;

    for row in 0..BOARD_SIZE {
        for col in starts.clone() {
            if let Some(found) = check_line(board, SequenceKind::Row, (row, col)) {
                return Some(found);
            }
        }
    }

    for col in 0..BOARD_SIZE {
        for row in starts.clone() {
            if let Some(found) = check_line(board, SequenceKind::Col, (row, col)) {
                return Some(found);
            }
        }
    }

    for row in starts.clone() {
        for col in starts.clone() {
            if let Some(found) = check_line(board, SequenceKind::DiagDownRight, (row, col)) {
                return Some(found);
            }
        }
    }

    for row in (SEQUENCE_LENGTH - 1..BOARD_SIZE).rev() {
        for col in starts.clone() {
            if let Some(found) = check_line(board, SequenceKind::DiagUpRight, (row, col)) {
                return Some(found);
            }
        }
    }

    CORNER_RUNS.iter().find_map(|run| check_corner_run(board, run))
}

/// Longest contiguous run of `mark` along any row, column or diagonal.
///
/// Used for scoring candidate moves; any length counts, not just five.
#[must_use]
pub fn longest_run(board: &BoardState, mark: Mark) -> usize {
    if mark.is_empty() {
        return 0;
    }
    let mut best = 0;
    for cell in board.cells_with(mark) {
        for kind in SequenceKind::ALL {
            let (dr, dc) = kind.step();
            // Only count from the first cell of a run.
            if owned_at(board, cell, -dr, -dc, mark) {
                continue;
            }
            let mut len = 1;
            let mut at = cell;
            while let Some(next) = offset(at, dr, dc).filter(|&n| board.get(n) == mark) {
                len += 1;
                at = next;
            }
            best = best.max(len);
        }
    }
    best
}

fn offset(cell: Cell, dr: isize, dc: isize) -> Option<Cell> {
    let row = cell.row().checked_add_signed(dr)?;
    let col = cell.col().checked_add_signed(dc)?;
    Cell::try_new(row, col).ok()
}

fn owned_at(board: &BoardState, cell: Cell, dr: isize, dc: isize, mark: Mark) -> bool {
    offset(cell, dr, dc).is_some_and(|n| board.get(n) == mark)
}
