//! Game rules: move validation, move enumeration and win detection.
//!
//! Everything here is a pure function of a board (plus a hand and the
//! acting player). Nothing mutates its input.

pub mod moves;
pub mod validator;
pub mod win;

pub use moves::{enumerate_moves, is_playable, legal_cells, Move};
pub use validator::{apply_move, check_move, is_legal};
pub use win::{detect_win, longest_run, SequenceKind, WinningSequence, SEQUENCE_LENGTH};
