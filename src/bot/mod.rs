//! Computer opponents.
//!
//! Strategies implement [`BotStrategy`] and are looked up by the integer
//! version callers store with a bot seat:
//!
//! | Version | Name             | Plays                                          |
//! |---------|------------------|------------------------------------------------|
//! | 1       | `random`         | any legal move                                 |
//! | 2       | `nearest-corner` | the move closest to a corner                   |
//! | 3       | `jack-reserve`   | as 2, holding Jacks for the first 35 hands     |
//! | 4       | `adjacent`       | next to its own pieces, else as 2              |
//! | 5       | `near`           | within 2 of its own pieces, else as 2          |
//! | 6       | `proximity`      | as close to its own pieces as it can, else 2   |
//! | 7       | `lookahead`      | wins or lengthens its longest run, else as 6   |
//!
//! [`plan_bot_action`] turns a snapshot into the next thing a bot seat
//! should do (join, play, or nothing).

pub mod driver;
pub mod registry;
pub mod strategies;
pub mod strategy;

pub use driver::{plan_bot_action, select_bot_move, BotAction};
pub use registry::{by_name, by_version, latest_version, registered_strategies, StrategyFactory};
pub use strategies::{CornerBot, JackReserveBot, LookaheadBot, ProximityBot, RandomBot};
pub use strategy::{moves_near, nearest_corner, BotContext, BotStrategy};
