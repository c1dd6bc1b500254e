//! Constraint-satisfaction code breaker

use super::{CandidateSet, CodeSpace};
use crate::core::{BoardEntry, Code, Feedback, GameConfig};
use crate::error::{EngineError, InputError};
use log::{debug, warn};
use rand::Rng;

/// Code breaker that guesses a random code consistent with all feedback
///
/// The solver holds no round state. Every query recomputes the candidate set
/// from the history it is given, so repeated calls with the same history give
/// the same set.
#[derive(Debug, Clone)]
pub struct Solver {
    config: GameConfig,
    space: CodeSpace,
}

impl Solver {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            space: CodeSpace::new(&config),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    /// A uniformly random code, each position drawn independently
    pub fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        let pegs = (0..self.config.positions())
            .map(|_| rng.random_range(1..=self.config.colors()))
            .collect();
        Code::from_pegs(pegs)
    }

    /// Every code that would have produced each recorded feedback, had it been the secret
    ///
    /// An empty history yields the whole code space.
    ///
    /// # Errors
    /// Returns `InvalidInput` if a recorded guess has the wrong length, and
    /// `SolverInconsistency` if no code fits the history.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{BoardEntry, Code, Feedback, GameConfig};
    /// use mastermind_solver::solver::Solver;
    ///
    /// let config = GameConfig::default();
    /// let solver = Solver::new(config);
    /// let guess = Code::new(vec![1, 2, 3, 4], &config).unwrap();
    /// let history = [BoardEntry { guess, feedback: Feedback::new(3, 0) }];
    ///
    /// let candidates = solver.candidates(&history).unwrap();
    /// // one position wrong: 4 positions x 5 other colors
    /// assert_eq!(candidates.len(), 20);
    /// ```
    pub fn candidates(&self, history: &[BoardEntry]) -> Result<CandidateSet, EngineError> {
        self.check_history(history)?;

        let codes = self.space.par_filter(|pegs| {
            history
                .iter()
                .all(|entry| Feedback::tally(entry.guess.pegs(), pegs) == entry.feedback)
        });
        debug!(
            "scanned {} codes against {} turn(s): {} candidates",
            self.space.len(),
            history.len(),
            codes.len()
        );

        Self::non_empty(CandidateSet::from_codes(codes), history.len())
    }

    /// Narrow a set computed for `history[..history.len() - 1]` by the last entry
    ///
    /// Gives the same result as [`Solver::candidates`] on the full history.
    ///
    /// # Errors
    /// Same as [`Solver::candidates`].
    pub fn narrow(
        &self,
        previous: &CandidateSet,
        history: &[BoardEntry],
    ) -> Result<CandidateSet, EngineError> {
        let Some(last) = history.last() else {
            return self.candidates(history);
        };
        self.check_history(std::slice::from_ref(last))?;

        let narrowed = previous.narrow_by(last);
        debug!(
            "narrowed {} -> {} candidates by turn {}",
            previous.len(),
            narrowed.len(),
            history.len()
        );
        Self::non_empty(narrowed, history.len())
    }

    /// Number of codes consistent with `history`
    ///
    /// # Errors
    /// Same as [`Solver::candidates`].
    pub fn count_candidates(&self, history: &[BoardEntry]) -> Result<usize, EngineError> {
        self.candidates(history).map(|set| set.len())
    }

    /// The next machine guess
    ///
    /// With no history there is nothing to exploit, so the guess is a uniformly
    /// random code. Afterwards it is a uniformly random member of the candidate set.
    ///
    /// # Errors
    /// Same as [`Solver::candidates`].
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        history: &[BoardEntry],
        rng: &mut R,
    ) -> Result<Code, EngineError> {
        if history.is_empty() {
            return Ok(self.random_code(rng));
        }
        let candidates = self.candidates(history)?;
        Self::pick(&candidates, history.len(), rng)
    }

    /// A uniformly random member of `candidates`
    ///
    /// # Errors
    /// Returns `SolverInconsistency` if the set is empty.
    pub fn pick<R: Rng + ?Sized>(
        candidates: &CandidateSet,
        turns: usize,
        rng: &mut R,
    ) -> Result<Code, EngineError> {
        candidates
            .sample(rng)
            .cloned()
            .ok_or(EngineError::SolverInconsistency { turns })
    }

    fn check_history(&self, history: &[BoardEntry]) -> Result<(), InputError> {
        let expected = self.config.positions();
        match history.iter().find(|entry| entry.guess.len() != expected) {
            Some(entry) => Err(InputError::Length {
                expected,
                actual: entry.guess.len(),
            }),
            None => Ok(()),
        }
    }

    fn non_empty(set: CandidateSet, turns: usize) -> Result<CandidateSet, EngineError> {
        if set.is_empty() {
            warn!("candidate set emptied after {turns} turn(s)");
            return Err(EngineError::SolverInconsistency { turns });
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(secret: &Code, guess: Code) -> BoardEntry {
        let feedback = Feedback::calculate(&guess, secret).unwrap();
        BoardEntry { guess, feedback }
    }

    #[test]
    fn empty_history_gives_whole_space() {
        let solver = Solver::new(GameConfig::default());
        assert_eq!(solver.count_candidates(&[]).unwrap(), 1296);
    }

    #[test]
    fn first_guess_is_valid_code() {
        let config = GameConfig::default();
        let solver = Solver::new(config);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let guess = solver.next_guess(&[], &mut rng).unwrap();
            assert!(Code::new(guess.pegs().to_vec(), &config).is_ok());
        }
    }

    #[test]
    fn first_guess_covers_every_color() {
        let solver = Solver::new(GameConfig::new(1, 6, 12).unwrap());
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen = [false; 6];
        for _ in 0..200 {
            let guess = solver.next_guess(&[], &mut rng).unwrap();
            seen[usize::from(guess.pegs()[0]) - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn secret_stays_in_candidates_and_set_never_grows() {
        let config = GameConfig::default();
        let solver = Solver::new(config);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            let secret = solver.random_code(&mut rng);
            let mut history = Vec::new();
            let mut previous = solver.count_candidates(&history).unwrap();

            for _ in 0..config.turn_limit() {
                let guess = solver.next_guess(&history, &mut rng).unwrap();
                let entry = play(&secret, guess);
                let won = entry.feedback.is_win(config.positions());
                history.push(entry);

                let candidates = solver.candidates(&history).unwrap();
                assert!(candidates.contains(&secret));
                assert!(candidates.len() <= previous);
                previous = candidates.len();

                if won {
                    break;
                }
            }
        }
    }

    #[test]
    fn every_candidate_reproduces_all_feedback() {
        let config = GameConfig::default();
        let solver = Solver::new(config);
        let secret = Code::new(vec![2, 1, 3, 1], &config).unwrap();
        let history = vec![
            play(&secret, Code::new(vec![1, 1, 2, 2], &config).unwrap()),
            play(&secret, Code::new(vec![3, 3, 4, 4], &config).unwrap()),
        ];

        let candidates = solver.candidates(&history).unwrap();
        for candidate in candidates.codes() {
            for entry in &history {
                assert_eq!(
                    Feedback::calculate(&entry.guess, candidate).unwrap(),
                    entry.feedback
                );
            }
        }
    }

    #[test]
    fn narrowing_matches_full_rescan() {
        let config = GameConfig::default();
        let solver = Solver::new(config);
        let mut rng = StdRng::seed_from_u64(9);
        let secret = solver.random_code(&mut rng);

        let mut history = Vec::new();
        let mut cached = solver.candidates(&history).unwrap();
        for _ in 0..4 {
            let guess = Solver::pick(&cached, history.len(), &mut rng).unwrap();
            history.push(play(&secret, guess));

            cached = solver.narrow(&cached, &history).unwrap();
            assert_eq!(cached, solver.candidates(&history).unwrap());
        }
    }

    #[test]
    fn inconsistent_history_is_reported() {
        let config = GameConfig::default();
        let solver = Solver::new(config);
        let guess = Code::new(vec![1, 1, 1, 1], &config).unwrap();
        // Four exact matches and one partial cannot happen
        let history = [BoardEntry {
            guess,
            feedback: Feedback::new(4, 1),
        }];

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            solver.next_guess(&history, &mut rng),
            Err(EngineError::SolverInconsistency { turns: 1 })
        );
    }

    #[test]
    fn contradictory_turns_are_reported() {
        let config = GameConfig::default();
        let solver = Solver::new(config);
        let guess = Code::new(vec![1, 2, 3, 4], &config).unwrap();
        let history = [
            BoardEntry {
                guess: guess.clone(),
                feedback: Feedback::new(0, 0),
            },
            BoardEntry {
                guess,
                feedback: Feedback::new(1, 0),
            },
        ];

        assert_eq!(
            solver.candidates(&history),
            Err(EngineError::SolverInconsistency { turns: 2 })
        );
    }

    #[test]
    fn wrong_length_history_is_invalid_input() {
        let solver = Solver::new(GameConfig::default());
        let history = [BoardEntry {
            guess: Code::from_pegs(vec![1, 2, 3]),
            feedback: Feedback::new(0, 0),
        }];

        assert!(matches!(
            solver.candidates(&history),
            Err(EngineError::InvalidInput(InputError::Length { .. }))
        ));
    }

    #[test]
    fn next_guess_is_a_candidate() {
        let config = GameConfig::default();
        let solver = Solver::new(config);
        let secret = Code::new(vec![6, 5, 4, 3], &config).unwrap();
        let history = vec![play(&secret, Code::new(vec![1, 2, 3, 4], &config).unwrap())];
        let candidates = solver.candidates(&history).unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let guess = solver.next_guess(&history, &mut rng).unwrap();
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn solves_within_turn_limit() {
        let config = GameConfig::default();
        let solver = Solver::new(config);
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..20 {
            let secret = solver.random_code(&mut rng);
            let mut history = Vec::new();
            let solved = (0..config.turn_limit()).any(|_| {
                let guess = solver.next_guess(&history, &mut rng).unwrap();
                let entry = play(&secret, guess);
                let won = entry.feedback.is_win(config.positions());
                history.push(entry);
                won
            });
            assert!(solved, "failed to solve {secret}");
        }
    }
}
