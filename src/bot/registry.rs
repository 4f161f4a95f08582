//! Registered bot strategies.
//!
//! Callers ask for a strategy by integer version. To add one:
//!
//! 1) Implement `BotStrategy` for your type in `strategies`.
//! 2) Append a `StrategyFactory` entry with the next version and a stable name.
//! 3) Never renumber existing entries; stored games refer to them.

use super::strategies::{CornerBot, JackReserveBot, LookaheadBot, ProximityBot, RandomBot};
use super::strategy::BotStrategy;

/// How to build one registered strategy.
pub struct StrategyFactory {
    pub version: u8,
    pub name: &'static str,
    pub make: fn() -> Box<dyn BotStrategy>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        version: 1,
        name: RandomBot::NAME,
        make: make_random,
    },
    StrategyFactory {
        version: 2,
        name: CornerBot::NAME,
        make: make_corner,
    },
    StrategyFactory {
        version: 3,
        name: JackReserveBot::NAME,
        make: make_jack_reserve,
    },
    StrategyFactory {
        version: 4,
        name: ProximityBot::ADJACENT_NAME,
        make: make_adjacent,
    },
    StrategyFactory {
        version: 5,
        name: ProximityBot::NEAR_NAME,
        make: make_near,
    },
    StrategyFactory {
        version: 6,
        name: ProximityBot::ANYWHERE_NAME,
        make: make_proximity,
    },
    StrategyFactory {
        version: 7,
        name: LookaheadBot::NAME,
        make: make_lookahead,
    },
];

/// Every registered strategy, in version order.
pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

/// Find a strategy by version number.
pub fn by_version(version: u8) -> Option<&'static StrategyFactory> {
    registered_strategies().iter().find(|factory| factory.version == version)
}

/// Find a strategy by name.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies().iter().find(|factory| factory.name == name)
}

/// The newest registered version.
pub fn latest_version() -> u8 {
    registered_strategies().iter().map(|f| f.version).max().unwrap_or(1)
}

fn make_random() -> Box<dyn BotStrategy> {
    Box::new(RandomBot)
}

fn make_corner() -> Box<dyn BotStrategy> {
    Box::new(CornerBot)
}

fn make_jack_reserve() -> Box<dyn BotStrategy> {
    Box::new(JackReserveBot)
}

fn make_adjacent() -> Box<dyn BotStrategy> {
    Box::new(ProximityBot::ADJACENT)
}

fn make_near() -> Box<dyn BotStrategy> {
    Box::new(ProximityBot::NEAR)
}

fn make_proximity() -> Box<dyn BotStrategy> {
    Box::new(ProximityBot::ANYWHERE)
}

fn make_lookahead() -> Box<dyn BotStrategy> {
    Box::new(LookaheadBot)
}
