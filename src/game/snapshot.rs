//! Game snapshots.
//!
//! A `GameSnapshot` is the complete state of one game. The engine never
//! mutates a snapshot it was given: every operation returns a new one and
//! the caller decides what to persist.
//!
//! ## Persisted forms
//!
//! - serde (e.g. JSON): board as 100 flat marks, hands and draw pile as
//!   `RANK|SUIT` lists, status/winner in the wire vocabulary
//! - `to_bytes` / `from_bytes`: compact binary (bincode)

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{BoardState, Cell};
use crate::cards::{Card, DrawPile, Hand};
use crate::core::{Player, PlayerMap};
use crate::error::CodecError;
use crate::rules::WinningSequence;

/// Lifecycle of a game. `Ended` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    WaitingForPlayers,
    Active,
    Ended,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameStatus::WaitingForPlayers => "waitingForPlayers",
            GameStatus::Active => "active",
            GameStatus::Ended => "ended",
        })
    }
}

/// One applied turn, kept in the snapshot's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRecord {
    /// Value of `hands_played` after this turn (starts at 1).
    pub hand_number: u32,
    pub player: Player,
    pub card: Card,
    pub cell: Cell,
    /// Dead cards pruned from the player's hand after the move.
    pub discarded: SmallVec<[Card; 2]>,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub status: GameStatus,

    /// Whose move it is. Meaningful while `Active`.
    pub next_player: Player,

    pub board: BoardState,

    pub hands: PlayerMap<Hand>,

    pub draw_pile: DrawPile,

    /// Turns applied so far.
    pub hands_played: u32,

    /// `None` while playing and for a drawn or cancelled game.
    /// Wire form: 0 (none/draw), 1, 2.
    #[serde(with = "winner_code")]
    pub winner: Option<Player>,

    pub winning_sequence: Option<WinningSequence>,

    /// Every applied turn, oldest first.
    pub history: Vector<TurnRecord>,
}

impl GameSnapshot {
    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> &[Card] {
        &self.hands[player]
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Winner as its wire number: 0 for none, else 1 or 2.
    #[must_use]
    pub fn winner_code(&self) -> u8 {
        self.winner.map_or(0, Player::number)
    }

    /// Encode to the compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from the compact binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Move to `Ended`, recording the result. The only place the winner
    /// and winning sequence are ever written.
    pub(crate) fn end(&mut self, winner: Option<Player>, sequence: Option<WinningSequence>) {
        self.status = GameStatus::Ended;
        self.winner = winner;
        self.winning_sequence = sequence;
    }
}

/// Serializes `Option<Player>` as 0 / 1 / 2.
mod winner_code {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::core::Player;

    pub fn serialize<S: Serializer>(winner: &Option<Player>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(winner.map_or(0, Player::number))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Player>, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(None),
            n => Player::from_number(n).map(Some).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, GameRng};
    use crate::game::create_game;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&GameStatus::WaitingForPlayers).unwrap(), "\"waitingForPlayers\"");
        assert_eq!(serde_json::to_string(&GameStatus::Ended).unwrap(), "\"ended\"");
        assert_eq!(GameStatus::Active.to_string(), "active");
    }

    #[test]
    fn test_winner_code() {
        let mut snapshot = create_game(&EngineConfig::default(), &mut GameRng::new(1));
        assert_eq!(snapshot.winner_code(), 0);

        snapshot.end(Some(Player::Two), None);
        assert_eq!(snapshot.winner_code(), 2);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["winner"], 2);
        assert_eq!(json["status"], "ended");
        assert_eq!(json["board"].as_array().map(Vec::len), Some(100));
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = create_game(&EngineConfig::default(), &mut GameRng::new(9));
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_binary_round_trip() {
        let snapshot = create_game(&EngineConfig::default(), &mut GameRng::new(3));
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(GameSnapshot::from_bytes(&bytes).unwrap(), snapshot);
        assert!(GameSnapshot::from_bytes(&bytes[..10]).is_err());
    }

    #[test]
    fn test_bad_winner_rejected() {
        let snapshot = create_game(&EngineConfig::default(), &mut GameRng::new(3));
        let mut json = serde_json::to_value(&snapshot).unwrap();
        json["winner"] = serde_json::json!(5);
        assert!(serde_json::from_value::<GameSnapshot>(json).is_err());
    }
}
