//! The 10×10 board: coordinates, ownership marks, the fixed card layout,
//! and the mutable ownership state.

pub mod cell;
pub mod layout;
pub mod mark;
pub mod state;

pub use cell::{Cell, BOARD_SIZE, CELL_COUNT};
pub use layout::{card_at, cells_for_card, is_corner};
pub use mark::Mark;
pub use state::BoardState;
