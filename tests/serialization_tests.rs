//! Wire and persisted forms: flat boards, JSON snapshots, binary snapshots.

use proptest::prelude::*;

use sequence_engine::board::{BoardState, Cell, Mark, CELL_COUNT};
use sequence_engine::cards::try_parse_cards;
use sequence_engine::core::{EngineConfig, GameRng, Player};
use sequence_engine::error::ParseError;
use sequence_engine::game::{create_game, join_game, play_move, GameSnapshot};
use sequence_engine::bot::select_bot_move;

fn mark_strategy() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Empty), Just(Mark::Player1), Just(Mark::Player2)]
}

/// A few turns into a seeded game.
fn game_in_progress(seed: u64, turns: usize) -> GameSnapshot {
    let config = EngineConfig::default();
    let mut rng = GameRng::new(seed);
    let mut game = join_game(&create_game(&config, &mut rng)).unwrap();
    for _ in 0..turns {
        let Ok(Some(mv)) = select_bot_move(2, &game, &config, &mut rng) else {
            break;
        };
        game = play_move(&game, game.next_player, mv, &config).unwrap();
    }
    game
}

// =============================================================================
// Flat board form
// =============================================================================

proptest! {
    #[test]
    fn prop_flat_board_round_trip(mut marks in proptest::collection::vec(mark_strategy(), CELL_COUNT)) {
        for corner in Cell::CORNERS {
            marks[corner.index()] = Mark::Empty;
        }
        let board = BoardState::from_flat(&marks).unwrap();
        prop_assert_eq!(board.to_flat(), marks);

        let json = serde_json::to_string(&board).unwrap();
        let back: BoardState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, board);
    }
}

#[test]
fn test_flat_board_tokens() {
    let mut tokens = vec![""; CELL_COUNT];
    tokens[1] = "p1";
    tokens[98] = "p2";
    let board = BoardState::from_tokens(&tokens).unwrap();
    assert_eq!(board.get(Cell::new(0, 1)), Mark::Player1);
    assert_eq!(board.get(Cell::new(9, 8)), Mark::Player2);

    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(json[1], "p1");
    assert_eq!(json[0], "");
}

#[test]
fn test_flat_board_rejects_bad_input() {
    assert_eq!(
        BoardState::from_flat(&[Mark::Empty; 99]),
        Err(ParseError::BoardLength { expected: 100, actual: 99 })
    );
    let mut tokens = vec![""; CELL_COUNT];
    tokens[5] = "p3";
    assert!(matches!(BoardState::from_tokens(&tokens), Err(ParseError::Mark(_))));

    let mut tokens = vec![""; CELL_COUNT];
    tokens[90] = "p1";
    assert_eq!(
        BoardState::from_tokens(&tokens),
        Err(ParseError::OwnedCorner { cell: Cell::new(9, 0) })
    );
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_snapshot_json_wire_names() {
    let game = game_in_progress(8, 4);
    let json = serde_json::to_value(&game).unwrap();

    assert_eq!(json["status"], "active");
    assert_eq!(json["nextPlayer"], 1);
    assert_eq!(json["handsPlayed"], 4);
    assert_eq!(json["winner"], 0);
    assert!(json["winningSequence"].is_null());
    assert_eq!(json["board"].as_array().map(Vec::len), Some(CELL_COUNT));

    // Hands are card-text lists that parse back.
    let hand: Vec<&str> = json["hands"][0]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(try_parse_cards(hand).unwrap(), game.hand(Player::One));

    let back: GameSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, game);
}

#[test]
fn test_snapshot_rejects_corrupt_state() {
    let game = game_in_progress(8, 4);
    let json = serde_json::to_value(&game).unwrap();

    let mut bad_cursor = json.clone();
    bad_cursor["drawPile"]["cursor"] = serde_json::json!(500);
    assert!(serde_json::from_value::<GameSnapshot>(bad_cursor).is_err());

    let mut owned_corner = json;
    owned_corner["board"][99] = serde_json::json!("p2");
    assert!(serde_json::from_value::<GameSnapshot>(owned_corner).is_err());
}

#[test]
fn test_snapshot_binary_round_trip() {
    let game = game_in_progress(21, 10);
    let bytes = game.to_bytes().unwrap();
    assert_eq!(GameSnapshot::from_bytes(&bytes).unwrap(), game);
}

#[test]
fn test_restored_snapshot_keeps_playing() {
    let config = EngineConfig::default();
    let game = game_in_progress(5, 6);
    let restored = GameSnapshot::from_bytes(&game.to_bytes().unwrap()).unwrap();

    let mv = select_bot_move(2, &restored, &config, &mut GameRng::new(1)).unwrap().unwrap();
    let a = play_move(&game, game.next_player, mv, &config).unwrap();
    let b = play_move(&restored, restored.next_player, mv, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_rng_state_resumes_bot_choices() {
    let config = EngineConfig::default();
    let game = game_in_progress(13, 3);

    let mut rng = GameRng::new(77);
    rng.gen_range_usize(0..10);
    let mut resumed = GameRng::from_state(&rng.state());
    for _ in 0..5 {
        assert_eq!(
            select_bot_move(1, &game, &config, &mut rng),
            select_bot_move(1, &game, &config, &mut resumed)
        );
    }
}
