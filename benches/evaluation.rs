//! Benchmarks for the hot paths of a training run: feature extraction,
//! greedy move selection, and the per-game TD update.

use std::hint::black_box;
use std::str::FromStr;

use chess::{Board, Color};
use criterion::{criterion_group, criterion_main, Criterion};

use chess_td::training::{Ply, TdUpdater, Trajectory};
use chess_td::{extract, LinearEvaluator, MoveSelector, TrainRng};

fn bench_extract(c: &mut Criterion) {
    let start = Board::default();
    let italian =
        Board::from_str("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .expect("valid FEN");

    c.bench_function("extract_startpos", |b| {
        b.iter(|| extract(black_box(&start)))
    });
    c.bench_function("extract_middlegame", |b| {
        b.iter(|| extract(black_box(&italian)))
    });
}

fn bench_greedy_selection(c: &mut Criterion) {
    let board = Board::default();
    let evaluator = LinearEvaluator::default_prior();
    let selector = MoveSelector::new(0.0);
    let mut rng = TrainRng::new(1);

    c.bench_function("greedy_choose_startpos", |b| {
        b.iter(|| selector.choose(black_box(&board), &evaluator, &mut rng))
    });
}

fn bench_td_update(c: &mut Criterion) {
    let mut trajectory = Trajectory::new();
    for index in 0..80 {
        let side_to_move = if index % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        trajectory.push(Ply {
            features: [0.1, -0.05, 0.25, 0.0, 1.0],
            side_to_move,
        });
    }
    let updater = TdUpdater::new(0.0005, 1.0);

    c.bench_function("td_update_80_plies", |b| {
        b.iter(|| {
            let mut evaluator = LinearEvaluator::default_prior();
            updater.update(&mut evaluator, black_box(&trajectory), 1.0)
        })
    });
}

criterion_group!(
    benches,
    bench_extract,
    bench_greedy_selection,
    bench_td_update
);
criterion_main!(benches);
