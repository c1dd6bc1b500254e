//! Benchmark command
//!
//! Plays the solver against a number of random secrets.

use crate::core::GameConfig;
use crate::error::EngineError;
use crate::game::{RandomSecret, RoundController, RoundEnd, ScoreBoard, SolverBreaker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub stats: ScoreBoard,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Won rounds keyed by turns used
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play `rounds` rounds with random secrets
///
/// Secrets and solver guesses draw from two generators seeded from `rng`, so
/// a seeded `rng` gives a reproducible run.
///
/// # Errors
///
/// Propagates solver failures, which indicate a scoring bug.
pub fn run_benchmark<R: Rng>(
    config: GameConfig,
    rounds: usize,
    rng: &mut R,
) -> Result<BenchmarkResult, EngineError> {
    let start = Instant::now();
    let mut secrets = RandomSecret::new(StdRng::seed_from_u64(rng.random()));
    let mut breaker = SolverBreaker::new(config, StdRng::seed_from_u64(rng.random()));
    let mut round = RoundController::new(config);

    let mut stats = ScoreBoard::new();
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for _ in 0..rounds {
        let RoundEnd::Finished(outcome) = round.play(&mut secrets, &mut breaker, |_| {})? else {
            break;
        };
        stats.record(outcome);

        min_turns = min_turns.min(outcome.turns_used);
        max_turns = max_turns.max(outcome.turns_used);
        if outcome.won {
            *distribution.entry(outcome.turns_used).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        min_turns: if stats.rounds == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        duration,
        rounds_per_second: stats.rounds as f64 / duration.as_secs_f64(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let mut rng = StdRng::seed_from_u64(10);
        let result = run_benchmark(GameConfig::default(), 10, &mut rng).unwrap();

        assert_eq!(result.stats.rounds, 10);
        assert_eq!(result.stats.correct, 10);
        assert!(result.min_turns >= 1);
        assert!(result.max_turns <= 12);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_benchmark(GameConfig::default(), 15, &mut rng).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.stats.correct);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let a = run_benchmark(GameConfig::default(), 5, &mut StdRng::seed_from_u64(12)).unwrap();
        let b = run_benchmark(GameConfig::default(), 5, &mut StdRng::seed_from_u64(12)).unwrap();

        assert_eq!(a.stats, b.stats);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_zero_rounds() {
        let mut rng = StdRng::seed_from_u64(13);
        let result = run_benchmark(GameConfig::default(), 0, &mut rng).unwrap();

        assert_eq!(result.stats.rounds, 0);
        assert_eq!(result.min_turns, 0);
        assert_eq!(result.max_turns, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let mut rng = StdRng::seed_from_u64(14);
        let result = run_benchmark(GameConfig::default(), 10, &mut rng).unwrap();

        let average = result.stats.average_score().unwrap();
        assert!(average >= result.min_turns as f64);
        assert!(average <= result.max_turns as f64);
        for &turns in result.distribution.keys() {
            assert!((1..=12).contains(&turns));
        }
    }

    #[test]
    fn tight_turn_limit_records_losses() {
        let config = GameConfig::new(4, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(15);
        let result = run_benchmark(config, 20, &mut rng).unwrap();

        assert_eq!(result.stats.rounds, 20);
        assert!(result.stats.correct < 20);
        assert_eq!(result.max_turns, 1);
    }
}
