//! Game state and the operations that move it forward.
//!
//! - [`snapshot`]: `GameSnapshot`, `GameStatus`, turn history
//! - [`lifecycle`]: create, join, cancel
//! - [`turn`]: the turn manager (`play_turn`)
//! - [`view`]: per-player projections
//! - [`code`]: short game codes
//! - [`stats`]: summaries of won games
//!
//! Every operation takes a snapshot by reference and returns a new one.
//! Persistence and concurrency control are the caller's business.

pub mod code;
pub mod lifecycle;
pub mod snapshot;
pub mod stats;
pub mod turn;
pub mod view;

pub use code::{GameCode, CODE_ALPHABET, CODE_LENGTH, CODE_SPACE};
pub use lifecycle::{cancel_game, create_game, join_game};
pub use snapshot::{GameSnapshot, GameStatus, TurnRecord};
pub use stats::{summarize_won_games, tally_sequence_kinds, GameSummary, SequenceTally};
pub use turn::{play_move, play_turn, prune_dead_cards};
pub use view::PlayerView;
