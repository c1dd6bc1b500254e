//! Producers of secrets and guesses
//!
//! A round asks a [`SecretSource`] for its secret once, then a [`GuessSource`]
//! for each guess. Interactive producers can answer [`Input::Quit`] instead of
//! a code; the round stops without an outcome.

use crate::core::{Board, BoardEntry, Code, GameConfig};
use crate::error::EngineError;
use crate::solver::{CandidateSet, Solver};
use rand::Rng;

/// A value from a producer, or a request to stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<T> {
    Provided(T),
    Quit,
}

/// Supplies the secret for a round
pub trait SecretSource {
    /// Produce a secret matching `config`
    ///
    /// # Errors
    /// Implementations report failures of their own input channel.
    fn secret(&mut self, config: &GameConfig) -> Result<Input<Code>, EngineError>;
}

/// Supplies the guess for each turn
pub trait GuessSource {
    /// Produce the guess for `turn` (0-based) given the board so far
    ///
    /// # Errors
    /// Implementations report failures of their own input channel, or of the
    /// solver behind them.
    fn next_guess(&mut self, turn: usize, board: &Board) -> Result<Input<Code>, EngineError>;
}

/// Secret drawn uniformly at random
pub struct RandomSecret<R> {
    rng: R,
}

impl<R: Rng> RandomSecret<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    fn secret(&mut self, config: &GameConfig) -> Result<Input<Code>, EngineError> {
        Ok(Input::Provided(
            Solver::new(*config).random_code(&mut self.rng),
        ))
    }
}

/// A secret chosen ahead of time
pub struct FixedSecret(pub Code);

impl SecretSource for FixedSecret {
    fn secret(&mut self, _config: &GameConfig) -> Result<Input<Code>, EngineError> {
        Ok(Input::Provided(self.0.clone()))
    }
}

/// Guesses produced by the [`Solver`]
///
/// Keeps the candidate set of the previous turn together with the history it
/// was computed from. A board that extends that history by one entry narrows
/// the set; any other board gets a full scan.
pub struct SolverBreaker<R> {
    solver: Solver,
    rng: R,
    cache: Option<(Vec<BoardEntry>, CandidateSet)>,
}

impl<R: Rng> SolverBreaker<R> {
    #[must_use]
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            solver: Solver::new(config),
            rng,
            cache: None,
        }
    }

    /// Candidate set behind the most recent guess, `None` on the opening turn
    #[must_use]
    pub fn candidates(&self) -> Option<&CandidateSet> {
        self.cache.as_ref().map(|(_, set)| set)
    }

    /// Candidates consistent with `board`, computed without choosing a guess
    ///
    /// # Errors
    /// Same as [`Solver::candidates`].
    pub fn refresh(&mut self, board: &Board) -> Result<&CandidateSet, EngineError> {
        Self::refreshed(&self.solver, &mut self.cache, board)
    }

    fn refreshed<'c>(
        solver: &Solver,
        cache: &'c mut Option<(Vec<BoardEntry>, CandidateSet)>,
        board: &Board,
    ) -> Result<&'c CandidateSet, EngineError> {
        let history = board.history();
        let set = match cache.take() {
            Some((seen, previous)) if seen == history => previous,
            Some((seen, previous))
                if seen.len() + 1 == history.len() && history.starts_with(&seen) =>
            {
                solver.narrow(&previous, history)?
            }
            _ => solver.candidates(history)?,
        };
        Ok(&cache.insert((history.to_vec(), set)).1)
    }

    /// Drop the cached set, e.g. at the start of a new round
    pub fn reset(&mut self) {
        self.cache = None;
    }
}

impl<R: Rng> GuessSource for SolverBreaker<R> {
    fn next_guess(&mut self, _turn: usize, board: &Board) -> Result<Input<Code>, EngineError> {
        if board.is_empty() {
            self.cache = None;
            return Ok(Input::Provided(self.solver.random_code(&mut self.rng)));
        }

        let candidates = Self::refreshed(&self.solver, &mut self.cache, board)?;
        Solver::pick(candidates, board.len(), &mut self.rng).map(Input::Provided)
    }
}
