//! What one player is allowed to see of a game.

use serde::{Deserialize, Serialize};

use super::snapshot::{GameSnapshot, GameStatus};
use crate::board::BoardState;
use crate::cards::Card;
use crate::core::Player;
use crate::rules::WinningSequence;

/// A player's projection of a snapshot.
///
/// The opponent's hand and the draw pile never appear here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub status: GameStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_player: Option<Player>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardState>,

    /// 0 for a draw, else the winning seat. Only for ended games.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_sequence: Option<WinningSequence>,
}

impl GameSnapshot {
    /// Project this snapshot for `player`.
    #[must_use]
    pub fn view_for(&self, player: Player) -> PlayerView {
        let mut view = PlayerView {
            status: self.status,
            next_player: None,
            cards: None,
            board: None,
            winner: None,
            winning_sequence: None,
        };
        match self.status {
            GameStatus::WaitingForPlayers => {}
            GameStatus::Active => {
                view.next_player = Some(self.next_player);
                view.cards = Some(self.hand(player).to_vec());
                view.board = Some(self.board.clone());
            }
            GameStatus::Ended => {
                view.winner = Some(self.winner_code());
                view.winning_sequence = self.winning_sequence.clone();
                view.board = Some(self.board.clone());
            }
        }
        view
    }
}
