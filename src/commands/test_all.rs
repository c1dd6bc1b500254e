//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code in the code space and generates statistics.

use crate::core::{Code, GameConfig};
use crate::error::EngineError;
use crate::game::{FixedSecret, RoundController, RoundEnd, ScoreBoard, SolverBreaker};
use crate::solver::CodeSpace;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub stats: ScoreBoard,
    /// Won rounds keyed by turns used
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub max_turns: usize,
    /// Secrets the solver did not break within the turn limit
    pub unsolved: Vec<Code>,
    /// Secrets that took the most turns, hardest first
    pub hardest: Vec<(Code, usize)>,
}

/// Run the solver on every secret (or the first `limit` in code-space order)
///
/// # Errors
///
/// Propagates solver failures, which indicate a scoring bug.
pub fn run_test_all<R: Rng>(
    config: GameConfig,
    limit: Option<usize>,
    rng: R,
) -> Result<TestAllStatistics, EngineError> {
    let space = CodeSpace::new(&config);
    let total = limit.map_or(space.len(), |l| l.min(space.len()));

    println!("🎯 Testing {total} secrets...");

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut breaker = SolverBreaker::new(config, rng);
    let mut round = RoundController::new(config);
    let mut stats = ScoreBoard::new();
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut unsolved = Vec::new();
    let mut hardest: Vec<(Code, usize)> = Vec::new();

    let total_start = Instant::now();

    for (idx, secret) in space.iter().take(total).enumerate() {
        let end = round.play(&mut FixedSecret(secret.clone()), &mut breaker, |_| {})?;
        let RoundEnd::Finished(outcome) = end else {
            break;
        };
        stats.record(outcome);

        if outcome.won {
            *guess_distribution.entry(outcome.turns_used).or_insert(0) += 1;
            hardest.push((secret, outcome.turns_used));
        } else {
            unsolved.push(secret);
        }

        if idx % 50 == 0
            && let Some(avg) = stats.average_score()
        {
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    hardest.sort_by_key(|(_, turns)| std::cmp::Reverse(*turns));
    hardest.truncate(10);
    let max_turns = if unsolved.is_empty() {
        hardest.first().map_or(0, |(_, turns)| *turns)
    } else {
        config.turn_limit()
    };

    Ok(TestAllStatistics {
        stats,
        guess_distribution,
        total_time: total_start.elapsed(),
        max_turns,
        unsolved,
        hardest,
    })
}

/// Print test-all statistics with formatting
pub fn print_test_all_statistics(results: &TestAllStatistics, turn_limit: usize) {
    let stats = &results.stats;

    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.rounds);
    println!(
        "  Successfully solved:  {} {}",
        stats.correct,
        format!("({:.1}%)", stats.win_rate() * 100.0).green()
    );
    if !results.unsolved.is_empty() {
        println!(
            "  Failed to solve:      {} {}",
            results.unsolved.len(),
            format!("({:.1}%)", (1.0 - stats.win_rate()) * 100.0).red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_score().unwrap_or(0.0))
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:           {:.2}s",
        results.total_time.as_secs_f64()
    );
    if stats.rounds > 0 {
        println!(
            "  Time per secret:      {:.2}ms",
            results.total_time.as_secs_f64() * 1000.0 / stats.rounds as f64
        );
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *results.guess_distribution.values().max().unwrap_or(&1);
    for guesses in 1..=turn_limit {
        let count = results.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.correct > 0 && count > 0 {
            let percentage = count as f64 / stats.correct as f64 * 100.0;
            let bar_len = (count * 40 / max_count).max(1);
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {guesses:>2} guesses: {bar} {count:5} ({percentage:5.1}%)");
        }
    }

    if let Some(best) = stats.best {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  Fastest solve: {} guess{}",
            best,
            if best == 1 { "" } else { "es" }
        );
    }

    if !results.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (code, guesses) in results.hardest.iter().take(5) {
            println!("  {} ({} guesses)", code.to_string().yellow(), guesses);
        }
    }

    if !results.unsolved.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        for code in results.unsolved.iter().take(10) {
            println!("  {}", code.to_string().red());
        }
    }
}
