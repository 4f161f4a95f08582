//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Sequence is strictly a two-seat game. `Player` is numbered 1 and 2 on
//! the wire, matching the `nextPlayer` / `winner` fields of a snapshot.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::Mark;
use crate::error::ParseError;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// The game creator. Always moves first.
    One,
    /// The player who joined.
    Two,
}

impl Player {
    /// Both seats in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Wire number of this seat (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// 0-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The board mark this player places.
    #[must_use]
    pub const fn mark(self) -> Mark {
        match self {
            Player::One => Mark::Player1,
            Player::Two => Mark::Player2,
        }
    }

    /// Parse a wire number (1 or 2).
    pub fn from_number(number: u8) -> Result<Self, ParseError> {
        match number {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(ParseError::Player(other)),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

impl TryFrom<u8> for Player {
    type Error = ParseError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Player::from_number(number)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use sequence_engine::core::{Player, PlayerMap};
///
/// let mut hands: PlayerMap<Vec<u8>> = PlayerMap::with_default();
/// hands[Player::Two].push(3);
///
/// assert!(hands[Player::One].is_empty());
/// assert_eq!(hands[Player::Two], vec![3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
