//! Lobby transitions: create, join, cancel.
//!
//! ```text
//! WaitingForPlayers --join--> Active --play_turn--> Ended
//!         \                     |
//!          +------cancel--------+--------------->  Ended
//! ```

use im::Vector;
use tracing::info;

use super::snapshot::{GameSnapshot, GameStatus};
use crate::board::BoardState;
use crate::cards::{DrawPile, Hand};
use crate::core::{EngineConfig, GameRng, Player, PlayerMap};
use crate::error::LobbyError;

/// Shuffle a fresh pack and deal the opening hands.
///
/// Cards are dealt one at a time, alternating seats, Player 1 first.
#[must_use]
pub fn create_game(config: &EngineConfig, rng: &mut GameRng) -> GameSnapshot {
    let mut draw_pile = DrawPile::shuffled(rng);
    let mut hands: PlayerMap<Hand> = PlayerMap::with_default();

    for seat in Player::ALL.into_iter().cycle().take(config.hand_size * 2) {
        if let Some(card) = draw_pile.deal() {
            hands[seat].push(card);
        }
    }

    info!(seed = rng.seed(), dealt = draw_pile.cursor(), "Game created");

    GameSnapshot {
        status: GameStatus::WaitingForPlayers,
        next_player: Player::One,
        board: BoardState::new(),
        hands,
        draw_pile,
        hands_played: 0,
        winner: None,
        winning_sequence: None,
        history: Vector::new(),
    }
}

/// Attach the second player, starting the game.
pub fn join_game(snapshot: &GameSnapshot) -> Result<GameSnapshot, LobbyError> {
    match snapshot.status {
        GameStatus::WaitingForPlayers => {
            let mut next = snapshot.clone();
            next.status = GameStatus::Active;
            info!("Second player joined; game active");
            Ok(next)
        }
        GameStatus::Active => Err(LobbyError::GameFull),
        GameStatus::Ended => Err(LobbyError::GameEnded),
    }
}

/// End a game with no winner.
///
/// Accepted in any state. An already ended game comes back unchanged, so
/// cancelling a won game keeps its winner.
#[must_use]
pub fn cancel_game(snapshot: &GameSnapshot) -> GameSnapshot {
    if snapshot.is_ended() {
        return snapshot.clone();
    }
    let mut next = snapshot.clone();
    next.end(None, None);
    info!(hands_played = next.hands_played, from = %snapshot.status, "Game cancelled");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PACK_SIZE;

    fn new_game(seed: u64) -> GameSnapshot {
        create_game(&EngineConfig::default(), &mut GameRng::new(seed))
    }

    #[test]
    fn test_create_deals_alternately() {
        let snapshot = new_game(42);
        assert_eq!(snapshot.status, GameStatus::WaitingForPlayers);
        assert_eq!(snapshot.next_player, Player::One);
        assert_eq!(snapshot.hands_played, 0);
        assert!(snapshot.board.is_empty());
        assert_eq!(snapshot.draw_pile.cursor(), 14);
        assert_eq!(snapshot.draw_pile.remaining(), PACK_SIZE - 14);

        let pile = snapshot.draw_pile.cards();
        let p1: Vec<_> = pile[..14].iter().step_by(2).copied().collect();
        let p2: Vec<_> = pile[1..14].iter().step_by(2).copied().collect();
        assert_eq!(snapshot.hand(Player::One), p1.as_slice());
        assert_eq!(snapshot.hand(Player::Two), p2.as_slice());
    }

    #[test]
    fn test_create_respects_hand_size() {
        let config = EngineConfig::default().with_hand_size(3);
        let snapshot = create_game(&config, &mut GameRng::new(1));
        assert_eq!(snapshot.hand(Player::One).len(), 3);
        assert_eq!(snapshot.hand(Player::Two).len(), 3);
        assert_eq!(snapshot.draw_pile.cursor(), 6);
    }

    #[test]
    fn test_create_is_seed_deterministic() {
        assert_eq!(new_game(7), new_game(7));
        assert_ne!(new_game(7).draw_pile, new_game(8).draw_pile);
    }

    #[test]
    fn test_join_transitions() {
        let waiting = new_game(1);
        let active = join_game(&waiting).unwrap();
        assert_eq!(active.status, GameStatus::Active);
        assert_eq!(waiting.status, GameStatus::WaitingForPlayers);

        assert_eq!(join_game(&active), Err(LobbyError::GameFull));
        assert_eq!(join_game(&cancel_game(&active)), Err(LobbyError::GameEnded));
    }

    #[test]
    fn test_cancel_from_any_state() {
        let waiting = new_game(1);
        let cancelled = cancel_game(&waiting);
        assert!(cancelled.is_ended());
        assert_eq!(cancelled.winner, None);

        let active = join_game(&waiting).unwrap();
        assert!(cancel_game(&active).is_ended());
    }

    #[test]
    fn test_cancel_keeps_existing_winner() {
        let mut won = join_game(&new_game(1)).unwrap();
        won.end(Some(Player::Two), None);

        let again = cancel_game(&won);
        assert_eq!(again, won);
        assert_eq!(again.winner, Some(Player::Two));
    }
}
