//! Playout throughput: full seeded games and snapshot encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ludo_engine::core::GameRng;
use ludo_engine::{GameEngine, Snapshot};

const MAX_ROLLS: usize = 20_000;

fn play_out(engine: &mut GameEngine<GameRng>) -> usize {
    let mut rolls = 0;
    while engine.winner_index().is_none() && rolls < MAX_ROLLS {
        let player = engine.current_turn();
        let Some(die) = engine.roll_dice() else { break };
        rolls += 1;
        match engine.movable_tokens(player, die).first() {
            Some(&token) => {
                engine.move_token(player, token);
            }
            None => {
                engine.clear_dice_and_advance();
            }
        }
    }
    rolls
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");
    for players in [2usize, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &players| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut engine = GameEngine::seeded(players, seed);
                black_box(play_out(&mut engine))
            });
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = GameEngine::seeded(4, 7);
    for _ in 0..200 {
        let player = engine.current_turn();
        if let Some(die) = engine.roll_dice() {
            match engine.movable_tokens(player, die).first() {
                Some(&token) => {
                    engine.move_token(player, token);
                }
                None => {
                    engine.clear_dice_and_advance();
                }
            }
        }
    }
    let snapshot = engine.serialize();

    c.bench_function("snapshot_json", |b| {
        b.iter(|| {
            let json = snapshot.to_json().unwrap();
            black_box(Snapshot::from_json(&json).unwrap())
        });
    });

    c.bench_function("snapshot_bincode", |b| {
        b.iter(|| {
            let bytes = snapshot.to_bytes().unwrap();
            black_box(Snapshot::from_bytes(&bytes).unwrap())
        });
    });

    c.bench_function("clone_engine", |b| b.iter(|| black_box(engine.clone())));
}

criterion_group!(benches, bench_full_game, bench_snapshot);
criterion_main!(benches);
