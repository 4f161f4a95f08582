//! Benchmarks for the hot paths bots hit on every candidate move.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sequence_engine::bot::select_bot_move;
use sequence_engine::core::{EngineConfig, GameRng};
use sequence_engine::game::{create_game, join_game, play_move, GameSnapshot};
use sequence_engine::rules::{detect_win, enumerate_moves, longest_run};

/// A mid-game position reached by two nearest-corner bots.
fn mid_game() -> GameSnapshot {
    let config = EngineConfig::default();
    let mut rng = GameRng::new(2024);
    let mut game = join_game(&create_game(&config, &mut rng)).unwrap();
    for _ in 0..30 {
        match select_bot_move(2, &game, &config, &mut rng) {
            Ok(Some(mv)) => game = play_move(&game, game.next_player, mv, &config).unwrap(),
            _ => break,
        }
    }
    game
}

fn bench_rules(c: &mut Criterion) {
    let game = mid_game();
    let player = game.next_player;

    c.bench_function("detect_win", |b| b.iter(|| detect_win(black_box(&game.board))));

    c.bench_function("longest_run", |b| {
        b.iter(|| longest_run(black_box(&game.board), player.mark()))
    });

    c.bench_function("enumerate_moves", |b| {
        b.iter(|| enumerate_moves(black_box(game.hand(player)), &game.board, player, false))
    });
}

fn bench_bots(c: &mut Criterion) {
    let game = mid_game();
    let config = EngineConfig::default();

    for version in [1u8, 6, 7] {
        c.bench_function(&format!("select_bot_move_v{version}"), |b| {
            let mut rng = GameRng::new(7);
            b.iter(|| select_bot_move(version, black_box(&game), &config, &mut rng))
        });
    }
}

criterion_group!(benches, bench_rules, bench_bots);
criterion_main!(benches);
