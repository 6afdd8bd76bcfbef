//! Integration tests for the self-play training pipeline.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::{env, fs, process};

use chess_td::{
    LinearEvaluator, MoveSelector, Outcome, SelfPlayDriver, TdUpdater, TrainConfig, TrainRng,
    Trainer, WeightStore, DEFAULT_WEIGHTS,
};

/// Unique scratch path per test so parallel tests do not collide.
fn temp_path(suffix: &str) -> PathBuf {
    static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);
    let name = format!(
        "chess-td-it-{}-{}-{}",
        process::id(),
        NEXT_FILE.fetch_add(1, Ordering::Relaxed),
        suffix
    );
    env::temp_dir().join(name)
}

fn remove_if_present(path: &std::path::Path) {
    if path.exists() {
        fs::remove_file(path).unwrap();
    }
}

// =============================================================================
// Self-Play Tests
// =============================================================================

#[test]
fn test_self_play_produces_matching_records() {
    let driver = SelfPlayDriver::new(MoveSelector::new(1.0), 30);
    let evaluator = LinearEvaluator::default_prior();
    let mut rng = TrainRng::new(42);

    let played = driver.play_game(&evaluator, &mut rng);

    assert!(!played.trajectory.is_empty());
    assert_eq!(played.san_moves.len(), played.trajectory.len());
    assert!(played.trajectory.len() <= 30);
}

#[test]
fn test_self_play_is_deterministic_per_seed() {
    let driver = SelfPlayDriver::new(MoveSelector::new(0.5), 40);
    let evaluator = LinearEvaluator::default_prior();

    let mut rng_a = TrainRng::new(7);
    let mut rng_b = TrainRng::new(7);
    let first = driver.play_game(&evaluator, &mut rng_a);
    let second = driver.play_game(&evaluator, &mut rng_b);

    assert_eq!(first.san_moves, second.san_moves);
    assert_eq!(first.outcome, second.outcome);
}

// =============================================================================
// Learning Tests
// =============================================================================

#[test]
fn test_played_game_moves_the_weights() {
    let driver = SelfPlayDriver::new(MoveSelector::new(1.0), 20);
    let mut evaluator = LinearEvaluator::default_prior();
    let mut rng = TrainRng::new(3);

    let played = driver.play_game(&evaluator, &mut rng);
    let stats = TdUpdater::new(0.0005, 1.0).update(
        &mut evaluator,
        &played.trajectory,
        played.outcome.score(),
    );

    assert_eq!(stats.plies_processed, played.trajectory.len());
    assert!(stats.max_error <= 1.0);
    assert_ne!(evaluator.weights(), &DEFAULT_WEIGHTS);
}

// =============================================================================
// Full Pipeline Tests
// =============================================================================

#[test]
fn test_training_run_plays_logs_and_saves() {
    let weights_path = temp_path("pipeline.bin");
    let pgn_path = temp_path("pipeline.pgn");
    let config = TrainConfig::new()
        .with_games(3)
        .with_epsilon(1.0)
        .with_max_plies(20)
        .with_weights_path(&weights_path)
        .with_pgn_path(&pgn_path)
        .with_seed(11);

    let mut trainer = Trainer::new(config).unwrap();
    let stats = trainer.run().unwrap();

    assert_eq!(stats.games(), 3);
    assert_eq!(
        stats.white_wins + stats.black_wins + stats.draws,
        stats.games()
    );

    // Weights on disk match the trainer's final state.
    let reloaded = WeightStore::new(&weights_path).load().unwrap();
    assert_eq!(reloaded, Some(*trainer.evaluator().weights()));

    // Every game landed in the log with its own round number.
    let pgn = fs::read_to_string(&pgn_path).unwrap();
    assert_eq!(pgn.matches("[Event \"Self-Play Training\"]").count(), 3);
    for round in 1..=3 {
        assert!(pgn.contains(&format!("[Round \"{round}\"]")));
    }

    remove_if_present(&weights_path);
    remove_if_present(&pgn_path);
}

#[test]
fn test_second_run_resumes_from_saved_weights() {
    let weights_path = temp_path("resume.bin");
    let config = TrainConfig::new()
        .with_games(1)
        .with_epsilon(1.0)
        .with_max_plies(10)
        .with_weights_path(&weights_path)
        .without_pgn_log()
        .with_seed(19);

    let mut first = Trainer::new(config.clone()).unwrap();
    first.run().unwrap();
    let after_first = *first.evaluator().weights();

    // The second trainer must start exactly where the first stopped.
    let second = Trainer::new(config).unwrap();
    assert_eq!(second.evaluator().weights(), &after_first);

    remove_if_present(&weights_path);
}

#[test]
fn test_same_seed_reproduces_a_whole_run() {
    let weights_a = temp_path("repro-a.bin");
    let weights_b = temp_path("repro-b.bin");
    let pgn_a = temp_path("repro-a.pgn");
    let pgn_b = temp_path("repro-b.pgn");

    let config = |weights: &PathBuf, pgn: &PathBuf| {
        TrainConfig::new()
            .with_games(2)
            .with_epsilon(0.8)
            .with_max_plies(25)
            .with_weights_path(weights)
            .with_pgn_path(pgn)
            .with_seed(23)
    };

    Trainer::new(config(&weights_a, &pgn_a)).unwrap().run().unwrap();
    Trainer::new(config(&weights_b, &pgn_b)).unwrap().run().unwrap();

    assert_eq!(
        WeightStore::new(&weights_a).load().unwrap(),
        WeightStore::new(&weights_b).load().unwrap()
    );
    assert_eq!(
        fs::read_to_string(&pgn_a).unwrap(),
        fs::read_to_string(&pgn_b).unwrap()
    );

    for path in [&weights_a, &weights_b, &pgn_a, &pgn_b] {
        remove_if_present(path);
    }
}

// =============================================================================
// Outcome Bookkeeping Tests
// =============================================================================

#[test]
fn test_cut_off_games_score_as_draws() {
    // Three plies cannot finish a game, so the bound fires and the
    // learner sees the half-point score.
    let driver = SelfPlayDriver::new(MoveSelector::new(1.0), 3);
    let evaluator = LinearEvaluator::default_prior();
    let mut rng = TrainRng::new(5);

    let played = driver.play_game(&evaluator, &mut rng);

    assert_eq!(played.outcome, Outcome::Unfinished);
    assert_eq!(played.outcome.score(), 0.5);
    assert_eq!(played.outcome.as_pgn(), "*");
}
