//! Bot strategies playing complete games.

use proptest::prelude::*;

use sequence_engine::bot::{plan_bot_action, registered_strategies, select_bot_move, BotAction};
use sequence_engine::core::{EngineConfig, GameRng, Player, PlayerMap};
use sequence_engine::error::BotError;
use sequence_engine::game::{cancel_game, create_game, join_game, play_move, GameSnapshot, GameStatus};
use sequence_engine::rules::{apply_move, enumerate_moves};

/// Run two bots against each other until the game ends.
fn play_out(versions: PlayerMap<u8>, seed: u64) -> GameSnapshot {
    let config = EngineConfig::default();
    let mut rng = GameRng::new(seed);
    let mut game = create_game(&config, &mut rng);

    loop {
        let seat = game.next_player;
        match plan_bot_action(&game, seat, versions[seat], &config, &mut rng) {
            Ok(BotAction::Join) => game = join_game(&game).unwrap(),
            Ok(BotAction::Play(mv)) => game = play_move(&game, seat, mv, &config).unwrap(),
            Ok(BotAction::Idle) => return game,
            // A hand of unusable one-eyed Jacks; the host would cancel.
            Err(BotError::NoLegalMove { .. }) => game = cancel_game(&game),
            Err(err) => panic!("unexpected bot error: {err}"),
        }
    }
}

// =============================================================================
// Complete games
// =============================================================================

#[test]
fn test_every_strategy_finishes_games() {
    let config = EngineConfig::default();
    for factory in registered_strategies() {
        for seed in 0..3 {
            let versions = PlayerMap::new(|_| factory.version);
            let game = play_out(versions, seed);

            assert_eq!(game.status, GameStatus::Ended, "{}", factory.name);
            assert!(game.hands_played <= config.max_hands_played + 1);
            assert_eq!(game.history.len() as u32, game.hands_played);
            for corner in sequence_engine::board::Cell::CORNERS {
                assert!(game.board.get(corner).is_empty());
            }
            if let Some(sequence) = &game.winning_sequence {
                assert_eq!(sequence.owner(&game.board), game.winner);
            }
        }
    }
}

#[test]
fn test_seeded_games_replay_exactly() {
    let versions = PlayerMap::new(|p| if p == Player::One { 7 } else { 3 });
    assert_eq!(play_out(versions.clone(), 99), play_out(versions, 99));
}

#[test]
fn test_lookahead_beats_random_more_often() {
    let mut lookahead_wins = 0;
    let mut random_wins = 0;
    for seed in 0..20 {
        let versions = PlayerMap::new(|p| if p == Player::One { 7 } else { 1 });
        match play_out(versions, seed).winner {
            Some(Player::One) => lookahead_wins += 1,
            Some(Player::Two) => random_wins += 1,
            None => {}
        }
    }
    assert!(lookahead_wins > random_wins, "{lookahead_wins} vs {random_wins}");
}

// =============================================================================
// Legality
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_bot_moves_validate(seed in any::<u64>(), turns in 0usize..30) {
        let config = EngineConfig::default();
        let mut rng = GameRng::new(seed);
        let mut game = join_game(&create_game(&config, &mut rng)).unwrap();

        for _ in 0..turns {
            match select_bot_move(1, &game, &config, &mut rng) {
                Ok(Some(mv)) => game = play_move(&game, game.next_player, mv, &config).unwrap(),
                _ => break,
            }
        }

        if game.status == GameStatus::Active {
            let player = game.next_player;
            let legal = enumerate_moves(game.hand(player), &game.board, player, false);
            match select_bot_move(1, &game, &config, &mut rng).unwrap() {
                Some(mv) => {
                    prop_assert!(legal.contains(&mv));
                    prop_assert!(apply_move(mv.card, mv.cell, &game.board, player).is_ok());
                }
                None => prop_assert!(legal.is_empty()),
            }
        }
    }
}
