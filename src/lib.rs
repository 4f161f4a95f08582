//! # sequence-engine
//!
//! Rules engine and computer opponents for the two-player Sequence board
//! game: cards are played to claim cells on a fixed 10×10 layout, and the
//! first player to line up five cells wins.
//!
//! ## Design Principles
//!
//! 1. **Pure Operations**: Every operation takes a snapshot and returns a
//!    new snapshot or a typed error. No I/O, no locking, no hidden state.
//!
//! 2. **Layout Is Data**: The board layout and the card-to-cell index are
//!    built once and shared by every game.
//!
//! 3. **Injected Randomness**: Shuffles, bot tie-breaks and game codes all
//!    draw from an explicit `GameRng`, so seeded runs replay exactly.
//!
//! ## Modules
//!
//! - `core`: Players, per-seat storage, RNG, configuration
//! - `cards`: Cards, the 104-card pack, the draw pile
//! - `board`: Cells, marks, the fixed layout, board state
//! - `rules`: Move validation, move enumeration, win detection
//! - `game`: Snapshots, lobby transitions, the turn manager, views, stats
//! - `bot`: Strategy trait, registry, the seven built-in strategies
//! - `error`: Typed errors for every rejection
//!
//! ## Example
//!
//! ```
//! use sequence_engine::{create_game, join_game, play_move, select_bot_move};
//! use sequence_engine::{EngineConfig, GameRng, Player};
//!
//! let config = EngineConfig::default();
//! let mut rng = GameRng::new(42);
//!
//! let game = join_game(&create_game(&config, &mut rng)).unwrap();
//! let mv = select_bot_move(2, &game, &config, &mut rng).unwrap().unwrap();
//! let next = play_move(&game, Player::One, mv, &config).unwrap();
//!
//! assert_eq!(next.hands_played, 1);
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod game;
pub mod bot;
pub mod error;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, GameRngState, JackPruning, Player, PlayerMap};

pub use crate::cards::{Card, DrawPile, Hand, JackKind, Rank, Suit};

pub use crate::board::{cells_for_card, is_corner, BoardState, Cell, Mark};

pub use crate::rules::{apply_move, detect_win, enumerate_moves, longest_run, Move, SequenceKind, WinningSequence};

pub use crate::game::{
    cancel_game, create_game, join_game, play_move, play_turn,
    GameCode, GameSnapshot, GameStatus, PlayerView, TurnRecord,
};

pub use crate::bot::{plan_bot_action, select_bot_move, BotAction, BotStrategy};

pub use crate::error::{BotError, CodecError, InvalidMove, LobbyError, ParseError, TurnError};
