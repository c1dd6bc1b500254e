//! Code solving command
//!
//! Lets the solver break a given secret and returns the solution path.

use crate::core::{Code, Feedback, GameConfig};
use crate::error::EngineError;
use crate::game::{GuessSource, Input, RoundController, RoundState, SolverBreaker};
use rand::Rng;

/// Configuration for solving a code
pub struct SolveConfig {
    /// Secret as peg letters, e.g. "RGBR"
    pub secret: String,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub secret: Code,
}

/// A single guess in the solution
pub struct SolveStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret with the solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code for the configuration
/// - The solver's candidate set empties (never happens with a correct scorer)
pub fn solve_code<R: Rng>(config: SolveConfig, rng: R) -> Result<SolveResult, EngineError> {
    let game = config.game;
    let secret = Code::parse_letters(&config.secret, &game)?;

    let mut breaker = SolverBreaker::new(game, rng);
    let mut round = RoundController::new(game);
    round.begin(secret.clone())?;

    let mut steps = Vec::new();
    while let RoundState::Playing { turn } = round.state() {
        let Input::Provided(guess) = breaker.next_guess(turn, round.board())? else {
            break;
        };
        let candidates_before = breaker
            .candidates()
            .map_or(game.code_space_size(), |set| set.len());

        let report = round.submit(guess)?;
        let candidates_after = breaker.refresh(round.board())?.len();

        steps.push(SolveStep {
            guess: report.guess,
            feedback: report.feedback,
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveResult {
        success: matches!(round.state(), RoundState::Won { .. }),
        steps,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solve_code_succeeds() {
        let config = SolveConfig::new("RWBR".to_string());
        let result = solve_code(config, StdRng::seed_from_u64(1)).unwrap();

        assert!(result.success);
        assert!(!result.steps.is_empty());
        assert!(result.steps.len() <= 12);
        assert_eq!(result.steps.last().map(|s| s.guess.clone()), Some(result.secret.clone()));
    }

    #[test]
    fn solve_records_narrowing_history() {
        let config = SolveConfig::new("YYGP".to_string());
        let result = solve_code(config, StdRng::seed_from_u64(2)).unwrap();

        assert_eq!(result.steps[0].candidates_before, 1296);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
        assert_eq!(result.steps.last().map(|s| s.candidates_after), Some(1));
    }

    #[test]
    fn candidate_counts_match_full_scan() {
        let config = SolveConfig::new("PBWG".to_string());
        let game = config.game;
        let result = solve_code(config, StdRng::seed_from_u64(6)).unwrap();

        let solver = crate::solver::Solver::new(game);
        let mut history = Vec::new();
        for step in &result.steps {
            history.push(crate::core::BoardEntry {
                guess: step.guess.clone(),
                feedback: step.feedback,
            });
            assert_eq!(
                step.candidates_after,
                solver.count_candidates(&history).unwrap()
            );
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = SolveConfig::new("RGX".to_string());
        assert!(solve_code(config, StdRng::seed_from_u64(3)).is_err());
    }

    #[test]
    fn solve_with_turn_limit() {
        let mut config = SolveConfig::new("RGBW".to_string());
        config.game = GameConfig::new(4, 6, 2).unwrap();

        let result = solve_code(config, StdRng::seed_from_u64(4)).unwrap();
        assert!(result.steps.len() <= 2);
    }

    #[test]
    fn solve_wider_board() {
        let mut config = SolveConfig::new("ONWRG".to_string());
        config.game = GameConfig::new(5, 8, 12).unwrap();

        let result = solve_code(config, StdRng::seed_from_u64(5)).unwrap();
        assert!(result.success);
    }
}
