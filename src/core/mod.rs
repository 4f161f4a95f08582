//! Core engine types: players, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, JackPruning, HAND_SIZE, JACK_RESERVE_HANDS, MAX_HANDS_PLAYED};
