//! Move enumeration.
//!
//! Lists every (card, cell) pair the validator would accept right now,
//! by dry-running it over the candidate cells of each card in hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::validator::is_legal;
use crate::board::{cells_for_card, BoardState, Cell};
use crate::cards::Card;
use crate::core::Player;

/// One legal action: play `card` on `cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub cell: Cell,
}

impl Move {
    #[must_use]
    pub const fn new(card: Card, cell: Cell) -> Self {
        Self { card, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.card, self.cell)
    }
}

/// Cells `card` could legally be played on, in row-major order.
///
/// Non-Jacks are checked against their two printed cells; Jacks against
/// the whole board.
#[must_use]
pub fn legal_cells(card: Card, board: &BoardState, player: Player) -> SmallVec<[Cell; 2]> {
    match cells_for_card(card) {
        Some(printed) => printed
            .into_iter()
            .filter(|&cell| is_legal(card, cell, board, player))
            .collect(),
        None => Cell::all()
            .filter(|&cell| is_legal(card, cell, board, player))
            .collect(),
    }
}

/// Check whether `card` has at least one legal cell.
#[must_use]
pub fn is_playable(card: Card, board: &BoardState, player: Player) -> bool {
    match cells_for_card(card) {
        Some(printed) => printed.into_iter().any(|cell| is_legal(card, cell, board, player)),
        None => Cell::all().any(|cell| is_legal(card, cell, board, player)),
    }
}

/// Every legal move for `hand`, in hand order then cell order.
///
/// With `ignore_jacks` set, Jacks in hand contribute no moves.
#[must_use]
pub fn enumerate_moves(hand: &[Card], board: &BoardState, player: Player, ignore_jacks: bool) -> Vec<Move> {
    hand.iter()
        .filter(|card| !(ignore_jacks && card.is_jack()))
        .flat_map(|&card| {
            legal_cells(card, board, player)
                .into_iter()
                .map(move |cell| Move::new(card, cell))
        })
        .collect()
}
