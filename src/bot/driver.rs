//! Driving a bot seat through a game.

use tracing::{debug, info};

use super::registry::by_version;
use super::strategy::BotContext;
use crate::core::{EngineConfig, GameRng, Player};
use crate::error::BotError;
use crate::game::{GameSnapshot, GameStatus};
use crate::rules::Move;

/// What a bot seat should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotAction {
    /// Take the empty seat.
    Join,
    /// Play this move.
    Play(Move),
    /// Game over; nothing to do.
    Idle,
}

/// Ask strategy `version` for the next player's move.
///
/// `Ok(None)` means the player has no legal move at all.
pub fn select_bot_move(
    version: u8,
    snapshot: &GameSnapshot,
    config: &EngineConfig,
    rng: &mut GameRng,
) -> Result<Option<Move>, BotError> {
    let factory = by_version(version).ok_or(BotError::UnknownStrategy(version))?;
    if snapshot.status != GameStatus::Active {
        return Err(BotError::GameNotActive { status: snapshot.status });
    }

    let strategy = (factory.make)();
    let ctx = BotContext::for_next_player(snapshot, config);
    let choice = strategy.select(&ctx, rng);

    match choice {
        Some(mv) => debug!(strategy = factory.name, player = ctx.player.number(), mv = %mv, "Bot move chosen"),
        None => info!(strategy = factory.name, player = ctx.player.number(), "Bot has no legal move"),
    }
    Ok(choice)
}

/// Decide what the bot sitting in `seat` does with `snapshot`.
pub fn plan_bot_action(
    snapshot: &GameSnapshot,
    seat: Player,
    version: u8,
    config: &EngineConfig,
    rng: &mut GameRng,
) -> Result<BotAction, BotError> {
    match snapshot.status {
        GameStatus::WaitingForPlayers => Ok(BotAction::Join),
        GameStatus::Ended => Ok(BotAction::Idle),
        GameStatus::Active if snapshot.next_player != seat => Err(BotError::NotPlayersTurn {
            expected: snapshot.next_player,
            actual: seat,
        }),
        GameStatus::Active => select_bot_move(version, snapshot, config, rng)?
            .map(BotAction::Play)
            .ok_or(BotError::NoLegalMove { player: seat }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{cancel_game, create_game, join_game, play_move};

    fn active(seed: u64) -> GameSnapshot {
        join_game(&create_game(&EngineConfig::default(), &mut GameRng::new(seed))).unwrap()
    }

    #[test]
    fn test_plan_follows_status() {
        let config = EngineConfig::default();
        let mut rng = GameRng::new(1);
        let waiting = create_game(&config, &mut rng);

        assert_eq!(plan_bot_action(&waiting, Player::Two, 1, &config, &mut rng), Ok(BotAction::Join));
        assert_eq!(
            plan_bot_action(&cancel_game(&waiting), Player::Two, 1, &config, &mut rng),
            Ok(BotAction::Idle)
        );

        let game = join_game(&waiting).unwrap();
        assert_eq!(
            plan_bot_action(&game, Player::Two, 1, &config, &mut rng),
            Err(BotError::NotPlayersTurn { expected: Player::One, actual: Player::Two })
        );
        assert!(matches!(
            plan_bot_action(&game, Player::One, 1, &config, &mut rng),
            Ok(BotAction::Play(_))
        ));
    }

    #[test]
    fn test_unknown_version() {
        let config = EngineConfig::default();
        assert_eq!(
            select_bot_move(42, &active(1), &config, &mut GameRng::new(1)),
            Err(BotError::UnknownStrategy(42))
        );
    }

    #[test]
    fn test_select_requires_active_game() {
        let config = EngineConfig::default();
        let mut rng = GameRng::new(1);
        let waiting = create_game(&config, &mut rng);
        assert_eq!(
            select_bot_move(1, &waiting, &config, &mut rng),
            Err(BotError::GameNotActive { status: GameStatus::WaitingForPlayers })
        );
    }

    #[test]
    fn test_no_legal_move_reported() {
        let config = EngineConfig::default();
        let mut game = active(1);
        game.hands[Player::One] = std::iter::once("J|S".parse().unwrap()).collect();

        assert_eq!(select_bot_move(1, &game, &config, &mut GameRng::new(1)), Ok(None));
        assert_eq!(
            plan_bot_action(&game, Player::One, 1, &config, &mut GameRng::new(1)),
            Err(BotError::NoLegalMove { player: Player::One })
        );
    }

    #[test]
    fn test_every_version_move_is_playable() {
        let config = EngineConfig::default();
        for version in 1..=7 {
            let game = active(u64::from(version));
            let mv = select_bot_move(version, &game, &config, &mut GameRng::new(5)).unwrap().unwrap();
            assert!(play_move(&game, Player::One, mv, &config).is_ok(), "v{version}: {mv}");
        }
    }
}
