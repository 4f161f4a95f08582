//! Cell ownership.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::Player;
use crate::error::ParseError;

/// Ownership of one board cell. Wire form: `""`, `"p1"`, `"p2"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "p1")]
    Player1,
    #[serde(rename = "p2")]
    Player2,
}

impl Mark {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// The player owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Player1 => Some(Player::One),
            Mark::Player2 => Some(Player::Two),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::Player1 => "p1",
            Mark::Player2 => "p2",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Mark::Empty),
            "p1" => Ok(Mark::Player1),
            "p2" => Ok(Mark::Player2),
            other => Err(ParseError::Mark(other.to_string())),
        }
    }
}
