//! The fixed board layout.
//!
//! Every non-Jack card of one deck is printed on exactly two cells; the
//! four corners are blank. Jacks have no cell. The table is data shared by
//! every game, and the reverse index (card → cells) is built once on first
//! use.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use super::cell::{Cell, BOARD_SIZE};
use crate::cards::{Card, Rank, Suit};

type Grid = [[Option<Card>; BOARD_SIZE]; BOARD_SIZE];

#[rustfmt::skip]
static LAYOUT: Grid = {
    use Rank::*;
    const C: Suit = Suit::Clubs;
    const D: Suit = Suit::Diamonds;
    const H: Suit = Suit::Hearts;
    const S: Suit = Suit::Spades;
    const __: Option<Card> = None;
    const fn c(rank: Rank, suit: Suit) -> Option<Card> {
        Some(Card::new(rank, suit))
    }

    [
        [__, c(Six, D), c(Seven, D), c(Eight, D), c(Nine, D), c(Ten, D), c(Queen, D), c(King, D), c(Ace, D), __],
        [c(Five, D), c(Three, H), c(Two, H), c(Two, S), c(Three, S), c(Four, S), c(Five, S), c(Six, S), c(Seven, S), c(Ace, C)],
        [c(Four, D), c(Four, H), c(King, D), c(Ace, D), c(Ace, C), c(King, C), c(Queen, C), c(Ten, C), c(Eight, S), c(King, C)],
        [c(Three, D), c(Five, H), c(Queen, D), c(Queen, H), c(Ten, H), c(Nine, H), c(Eight, H), c(Nine, C), c(Nine, S), c(Queen, C)],
        [c(Two, D), c(Six, H), c(Ten, D), c(King, H), c(Three, H), c(Two, H), c(Seven, H), c(Eight, C), c(Ten, S), c(Ten, C)],
        [c(Ace, S), c(Seven, H), c(Nine, D), c(Ace, H), c(Four, H), c(Five, H), c(Six, H), c(Seven, C), c(Queen, S), c(Nine, C)],
        [c(King, S), c(Eight, H), c(Eight, D), c(Two, C), c(Three, C), c(Four, C), c(Five, C), c(Six, C), c(King, S), c(Eight, C)],
        [c(Queen, S), c(Nine, H), c(Seven, D), c(Six, D), c(Five, D), c(Four, D), c(Three, D), c(Two, D), c(Ace, S), c(Seven, C)],
        [c(Ten, S), c(Ten, H), c(Queen, H), c(King, H), c(Ace, H), c(Two, C), c(Three, C), c(Four, C), c(Five, C), c(Six, C)],
        [__, c(Nine, S), c(Eight, S), c(Seven, S), c(Six, S), c(Five, S), c(Four, S), c(Three, S), c(Two, S), __],
    ]
};

static CELLS_BY_CARD: LazyLock<FxHashMap<Card, [Cell; 2]>> = LazyLock::new(|| {
    let mut found: FxHashMap<Card, Vec<Cell>> = FxHashMap::default();
    for cell in Cell::all() {
        if let Some(card) = card_at(cell) {
            found.entry(card).or_default().push(cell);
        }
    }
    found
        .into_iter()
        .filter_map(|(card, cells)| match cells.as_slice() {
            [a, b] => Some((card, [*a, *b])),
            _ => None,
        })
        .collect()
});

/// The card printed on a cell, or `None` for a corner.
#[must_use]
pub fn card_at(cell: Cell) -> Option<Card> {
    LAYOUT[cell.row()][cell.col()]
}

/// The two cells a non-Jack card may be played on, in row-major order.
///
/// Returns `None` for Jacks, which have no printed cell.
#[must_use]
pub fn cells_for_card(card: Card) -> Option<[Cell; 2]> {
    CELLS_BY_CARD.get(&card).copied()
}

/// Check whether a cell is one of the four blank corners.
#[must_use]
pub fn is_corner(cell: Cell) -> bool {
    cell.is_corner()
}
