//! One round of play
//!
//! ```text
//! AwaitingSecret --begin--> Playing(0) --submit--> Playing(1) ... --> Won | Exhausted
//! ```
//!
//! Every transition out of `Playing` happens inside [`RoundController::submit`],
//! after the guess has been scored and recorded.

use super::source::{GuessSource, Input, SecretSource};
use crate::core::{Board, Code, Feedback, GameConfig};
use crate::error::{EngineError, InputError};
use log::debug;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingSecret,
    /// Next guess is turn `turn` (0-based)
    Playing { turn: usize },
    /// Solved with `turns` guesses
    Won { turns: usize },
    /// Turn limit reached without a win
    Exhausted,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Exhausted)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::AwaitingSecret => "awaiting a secret",
            Self::Playing { .. } => "playing",
            Self::Won { .. } => "won",
            Self::Exhausted => "out of turns",
        }
    }
}

/// Final result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    /// Guesses made; the turn limit when the round was exhausted
    pub turns_used: usize,
}

/// What one submitted guess produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// 0-based turn index
    pub turn: usize,
    pub guess: Code,
    pub feedback: Feedback,
    pub state: RoundState,
}

/// How [`RoundController::play`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Finished(RoundOutcome),
    /// A producer quit after `turns_played` guesses
    Quit { turns_played: usize },
}

/// Drives a round from secret to outcome
#[derive(Debug, Clone)]
pub struct RoundController {
    config: GameConfig,
    secret: Option<Code>,
    board: Board,
    state: RoundState,
}

impl RoundController {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            secret: None,
            board: Board::new(&config),
            state: RoundState::AwaitingSecret,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The secret, once the round has one
    #[must_use]
    pub const fn secret(&self) -> Option<&Code> {
        self.secret.as_ref()
    }

    /// Final outcome, once the round is over
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Won { turns } => Some(RoundOutcome {
                won: true,
                turns_used: turns,
            }),
            RoundState::Exhausted => Some(RoundOutcome {
                won: false,
                turns_used: self.config.turn_limit(),
            }),
            RoundState::AwaitingSecret | RoundState::Playing { .. } => None,
        }
    }

    /// Fix the secret and start play
    ///
    /// # Errors
    /// Returns `InvalidInput` if the secret does not fit the configuration and
    /// `RoundState` if the round already has a secret.
    pub fn begin(&mut self, secret: Code) -> Result<(), EngineError> {
        if self.state != RoundState::AwaitingSecret {
            return Err(self.misuse("accept a secret"));
        }
        let secret = Code::new(secret.pegs().to_vec(), &self.config)?;

        debug!("round started");
        self.secret = Some(secret);
        self.state = RoundState::Playing { turn: 0 };
        Ok(())
    }

    /// Score a guess, record it and advance
    ///
    /// # Errors
    /// Returns `InvalidInput` for a guess of the wrong length and `RoundState`
    /// outside of play. The round is unchanged on error.
    pub fn submit(&mut self, guess: Code) -> Result<TurnReport, EngineError> {
        let RoundState::Playing { turn } = self.state else {
            return Err(self.misuse("take a guess"));
        };
        let Some(secret) = &self.secret else {
            return Err(self.misuse("take a guess"));
        };
        if guess.len() != self.config.positions() {
            return Err(InputError::Length {
                expected: self.config.positions(),
                actual: guess.len(),
            }
            .into());
        }

        let feedback = Feedback::calculate(&guess, secret)?;
        self.board.record(turn, guess.clone(), feedback)?;

        let played = turn + 1;
        self.state = if feedback.is_win(self.config.positions()) {
            RoundState::Won { turns: played }
        } else if played == self.config.turn_limit() {
            RoundState::Exhausted
        } else {
            RoundState::Playing { turn: played }
        };
        debug!("turn {played}: {guess} scored {feedback}");

        Ok(TurnReport {
            turn,
            guess,
            feedback,
            state: self.state,
        })
    }

    /// Clear the board and wait for a new secret
    pub fn reset(&mut self) {
        self.board.clear();
        self.secret = None;
        self.state = RoundState::AwaitingSecret;
    }

    /// Play a whole round with the given producers
    ///
    /// `on_turn` sees every scored guess. Solver failures propagate unchanged.
    ///
    /// # Errors
    /// Any error from the producers or from [`RoundController::begin`] and
    /// [`RoundController::submit`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    /// use mastermind_solver::game::{FixedSecret, RoundController, RoundEnd, SolverBreaker};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let config = GameConfig::default();
    /// let secret = Code::new(vec![2, 1, 3, 1], &config).unwrap();
    /// let mut round = RoundController::new(config);
    /// let mut breaker = SolverBreaker::new(config, StdRng::seed_from_u64(1));
    ///
    /// let end = round
    ///     .play(&mut FixedSecret(secret), &mut breaker, |_| {})
    ///     .unwrap();
    /// assert!(matches!(end, RoundEnd::Finished(outcome) if outcome.won));
    /// ```
    pub fn play<S, G, F>(
        &mut self,
        secrets: &mut S,
        guesses: &mut G,
        mut on_turn: F,
    ) -> Result<RoundEnd, EngineError>
    where
        S: SecretSource + ?Sized,
        G: GuessSource + ?Sized,
        F: FnMut(&TurnReport),
    {
        if self.state != RoundState::AwaitingSecret {
            self.reset();
        }

        match secrets.secret(&self.config)? {
            Input::Provided(secret) => self.begin(secret)?,
            Input::Quit => return Ok(RoundEnd::Quit { turns_played: 0 }),
        }

        while let RoundState::Playing { turn } = self.state {
            let guess = match guesses.next_guess(turn, &self.board)? {
                Input::Provided(guess) => guess,
                Input::Quit => return Ok(RoundEnd::Quit { turns_played: turn }),
            };
            let report = self.submit(guess)?;
            on_turn(&report);
        }

        self.outcome()
            .map(RoundEnd::Finished)
            .ok_or_else(|| self.misuse("finish"))
    }

    const fn misuse(&self, action: &'static str) -> EngineError {
        EngineError::RoundState {
            action,
            state: self.state.name(),
        }
    }
}
