//! Display functions for boards and command results

use super::formatters::{
    PegStyle, candidate_rows, code_to_glyphs, create_progress_bar, feedback_to_glyphs,
    hidden_code,
};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Board, Code, GameConfig};
use crate::game::ScoreBoard;
use crate::solver::CandidateSet;
use colored::Colorize;

/// Board lines, newest turn on top and unplayed turns blank
///
/// The secret is shown when `reveal` holds it, otherwise a placeholder.
#[must_use]
pub fn board_lines(
    board: &Board,
    config: &GameConfig,
    style: PegStyle,
    reveal: Option<&Code>,
) -> Vec<String> {
    let positions = config.positions();
    let secret = reveal.map_or_else(
        || hidden_code(positions, style),
        |code| code_to_glyphs(code, style),
    );
    let blank_feedback = match style {
        PegStyle::Emoji => "➖".repeat(positions),
        PegStyle::Letters => "-".repeat(positions),
    };
    let blank_code = match style {
        PegStyle::Emoji => vec!["⚫"; positions].join(" "),
        PegStyle::Letters => vec!["."; positions].join(" "),
    };

    let mut lines = Vec::with_capacity(board.turn_limit() + 2);
    lines.push(format!("{:>width$}{secret}", "", width = positions + 6));
    lines.push(String::new());

    for turn in (0..board.turn_limit()).rev() {
        let (feedback, guess) = board.history().get(turn).map_or_else(
            || (blank_feedback.clone(), blank_code.clone()),
            |entry| {
                (
                    feedback_to_glyphs(entry.feedback, positions, style),
                    code_to_glyphs(&entry.guess, style),
                )
            },
        );
        lines.push(format!("{:>3} {feedback} | {guess}", turn + 1));
    }

    lines
}

/// Stats line in the board header
#[must_use]
pub fn stats_lines(stats: &ScoreBoard, turn_limit: usize) -> Vec<String> {
    let best = stats
        .best
        .filter(|&best| best <= turn_limit)
        .map_or_else(String::new, |best| best.to_string());
    vec![
        format!("ROUNDS:\t{}\tCORRECT:\t{}", stats.rounds, stats.correct),
        format!("TOTAL:\t{}\tBEST:\t\t{best}", stats.total_score),
    ]
}

/// Candidate summary shown before a solver guess
#[must_use]
pub fn candidate_lines(candidates: &CandidateSet, cap: usize, style: PegStyle) -> Vec<String> {
    let count = candidates.len();
    let mut lines = match count {
        0 => vec!["There are no viable codes.".to_string()],
        1 => vec!["There is 1 viable code:".to_string()],
        n if n > cap => vec![format!("There are {n} viable codes. The first {cap} are:")],
        n => vec![format!("There are {n} viable codes. They are:")],
    };
    let mut rows = candidate_rows(candidates.preview(cap), 5, style);
    if count > cap
        && let Some(last) = rows.last_mut()
    {
        last.push_str(", ...");
    }
    lines.extend(rows);
    lines
}

/// Print the result of solving a code
pub fn print_solve_result(
    result: &SolveResult,
    config: &GameConfig,
    style: PegStyle,
    verbose: bool,
) {
    let positions = config.positions();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        code_to_glyphs(&result.secret, style).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            code_to_glyphs(&step.guess, style),
            feedback_to_glyphs(step.feedback, positions, style)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            let space = config.code_space_size() as f64;
            println!(
                "  Remaining:  [{}] {:.2}% of {} codes",
                create_progress_bar(step.candidates_after as f64, space, 30).green(),
                step.candidates_after as f64 / space * 100.0,
                config.code_space_size()
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, turn_limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.stats.rounds);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.stats.correct,
        result.stats.win_rate() * 100.0
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.stats.average_score().unwrap_or(0.0))
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for turns in 1..=turn_limit {
        if let Some(&count) = result.distribution.get(&turns) {
            let pct = (count as f64 / result.stats.rounds as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {turns:>2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::solver::Solver;

    #[test]
    fn board_lines_show_newest_turn_first() {
        let config = GameConfig::new(4, 6, 3).unwrap();
        let mut board = Board::new(&config);
        let guess = Code::parse_letters("RGBW", &config).unwrap();
        board.record(0, guess, Feedback::new(1, 2)).unwrap();

        let lines = board_lines(&board, &config, PegStyle::Letters, None);

        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("? ? ? ?"));
        assert_eq!(lines[2], "  3 ---- | . . . .");
        assert_eq!(lines[4], "  1 XOO- | R G B W");
    }

    #[test]
    fn board_lines_reveal_secret() {
        let config = GameConfig::default();
        let board = Board::new(&config);
        let secret = Code::parse_letters("YYPP", &config).unwrap();

        let lines = board_lines(&board, &config, PegStyle::Letters, Some(&secret));
        assert!(lines[0].ends_with("Y Y P P"));
    }

    #[test]
    fn stats_lines_hide_unset_best() {
        let lines = stats_lines(&ScoreBoard::new(), 12);
        assert_eq!(lines[1], "TOTAL:\t0\tBEST:\t\t");
    }

    #[test]
    fn candidate_lines_cap_long_lists() {
        let solver = Solver::new(GameConfig::default());
        let all = solver.candidates(&[]).unwrap();

        let lines = candidate_lines(&all, 20, PegStyle::Letters);
        assert_eq!(lines[0], "There are 1296 viable codes. The first 20 are:");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "RRRR, RRRG, RRRB, RRRW, RRRY");
        assert!(lines[4].ends_with(", ..."));
    }
}
