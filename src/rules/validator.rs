//! Move validation.
//!
//! A move is a (card, cell) pair played by one player. Three card
//! behaviours exist:
//!
//! - **Normal card**: claims one of its two printed cells, if empty.
//! - **Two-eyed Jack** (Clubs, Diamonds): claims any empty non-corner cell.
//! - **One-eyed Jack** (Spades, Hearts): clears a cell the opponent owns.
//!
//! Validation touches only the board. Hands and win detection belong to
//! the turn manager.

use crate::board::{cells_for_card, BoardState, Cell, Mark};
use crate::cards::{Card, JackKind};
use crate::core::Player;
use crate::error::InvalidMove;

/// Dry-run a move: return the mark the cell would hold afterwards.
pub fn check_move(card: Card, cell: Cell, board: &BoardState, player: Player) -> Result<Mark, InvalidMove> {
    if cell.is_corner() {
        return Err(InvalidMove::CornerNotPlayable { cell });
    }

    match card.jack_kind() {
        None => {
            let Some(options) = cells_for_card(card) else {
                return Err(InvalidMove::NotOnLayout { card });
            };
            if !options.contains(&cell) {
                return Err(InvalidMove::CardCellMismatch { card, cell, options });
            }
            if !board.get(cell).is_empty() {
                return Err(InvalidMove::CellOccupied { cell });
            }
            Ok(player.mark())
        }
        Some(JackKind::OneEyed) => {
            if board.get(cell) != player.opponent().mark() {
                return Err(InvalidMove::NoOpponentPieceHere { card, cell });
            }
            Ok(Mark::Empty)
        }
        Some(JackKind::TwoEyed) => {
            if !board.get(cell).is_empty() {
                return Err(InvalidMove::CellOccupied { cell });
            }
            Ok(player.mark())
        }
    }
}

/// Check whether a move is legal without building the new board.
#[must_use]
pub fn is_legal(card: Card, cell: Cell, board: &BoardState, player: Player) -> bool {
    check_move(card, cell, board, player).is_ok()
}

/// Validate a move and return the resulting board.
pub fn apply_move(card: Card, cell: Cell, board: &BoardState, player: Player) -> Result<BoardState, InvalidMove> {
    let mark = check_move(card, cell, board, player)?;
    let mut next = board.clone();
    next.set(cell, mark);
    Ok(next)
}
