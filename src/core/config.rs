//! Engine configuration.
//!
//! The rules are fixed, but a handful of numbers and one policy are
//! tunable. `EngineConfig::default()` reproduces the standard game.

use serde::{Deserialize, Serialize};

/// Target number of cards in a hand.
pub const HAND_SIZE: usize = 7;

/// Hands played beyond this ceiling end the game as a draw.
pub const MAX_HANDS_PLAYED: u32 = 110;

/// Bot v3 holds its Jacks back while fewer than this many hands are played.
pub const JACK_RESERVE_HANDS: u32 = 35;

/// Whether Jacks are subject to dead-card pruning.
///
/// A non-Jack card is dead once both of its board cells are taken. A Jack
/// can look dead (a one-eyed Jack while the opponent has no pieces down)
/// and come back to life later, so by default Jacks are never pruned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JackPruning {
    /// Jacks stay in hand even with no legal cell right now.
    #[default]
    ExemptJacks,
    /// Jacks are pruned like any other card.
    PruneJacks,
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Cards each hand is refilled to (default: 7).
    pub hand_size: usize,

    /// Safety ceiling on `hands_played` (default: 110).
    pub max_hands_played: u32,

    /// Dead-card pruning policy for Jacks.
    pub jack_pruning: JackPruning,

    /// Hands before bot v3 starts spending Jacks (default: 35).
    pub jack_reserve_hands: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            max_hands_played: MAX_HANDS_PLAYED,
            jack_pruning: JackPruning::default(),
            jack_reserve_hands: JACK_RESERVE_HANDS,
        }
    }
}

impl EngineConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be at least 1");
        self.hand_size = size;
        self
    }

    /// Set the hands-played ceiling.
    #[must_use]
    pub fn with_max_hands_played(mut self, max: u32) -> Self {
        self.max_hands_played = max;
        self
    }

    /// Set the Jack pruning policy.
    #[must_use]
    pub fn with_jack_pruning(mut self, policy: JackPruning) -> Self {
        self.jack_pruning = policy;
        self
    }

    /// Set how long bot v3 holds its Jacks.
    #[must_use]
    pub fn with_jack_reserve_hands(mut self, hands: u32) -> Self {
        self.jack_reserve_hands = hands;
        self
    }
}
