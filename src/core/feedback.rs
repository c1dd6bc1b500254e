//! Guess scoring
//!
//! Feedback is the pair (exact, partial):
//! - exact = pegs with the right value in the right position
//! - partial = further pegs whose value appears elsewhere in the secret,
//!   counted at most once per secret peg
//!
//! The sorted per-position peg list shown on a board (`[2, 2, 1, 0]`) is a
//! display-only view of this pair, see [`Feedback::pegs`].

use super::code::{Code, NO_PEG, Peg};
use super::config::MAX_POSITIONS;
use crate::error::InputError;
use std::fmt;

/// One feedback peg in the board's display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeedbackPeg {
    /// No match
    Miss = 0,
    /// Right value, wrong position
    Partial = 1,
    /// Right value, right position
    Exact = 2,
}

/// Score of a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Feedback of a winning guess on a board with `positions` pegs
    #[inline]
    #[must_use]
    pub const fn win(positions: usize) -> Self {
        Self::new(positions as u8, 0)
    }

    /// Pegs with the right value in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Pegs with the right value in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Pegs that matched nothing
    #[inline]
    #[must_use]
    pub const fn misses(self, positions: usize) -> usize {
        positions
            .saturating_sub(self.exact as usize)
            .saturating_sub(self.partial as usize)
    }

    /// True when the counts are possible on a board with `positions` pegs
    #[inline]
    #[must_use]
    pub const fn fits(self, positions: usize) -> bool {
        self.exact as usize + self.partial as usize <= positions
    }

    /// True when every position matched exactly
    #[inline]
    #[must_use]
    pub const fn is_win(self, positions: usize) -> bool {
        self.exact as usize == positions
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and consume both pegs
    /// 2. Second pass: for each unconsumed guess peg, consume the first
    ///    unconsumed equal secret peg and count a partial match
    ///
    /// # Errors
    /// Returns `InputError::Length` if the two codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let guess = Code::new(vec![1, 1, 2, 3], &config).unwrap();
    /// let secret = Code::new(vec![3, 1, 1, 4], &config).unwrap();
    ///
    /// // position 1 exact, then one 1 and the 3 found elsewhere
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    pub fn calculate(guess: &Code, secret: &Code) -> Result<Self, InputError> {
        if guess.len() != secret.len() {
            return Err(InputError::Length {
                expected: secret.len(),
                actual: guess.len(),
            });
        }
        Ok(Self::tally(guess.pegs(), secret.pegs()))
    }

    /// Score two peg slices of equal length, at most [`MAX_POSITIONS`] long
    pub(crate) fn tally(guess: &[Peg], secret: &[Peg]) -> Self {
        debug_assert_eq!(guess.len(), secret.len());
        let len = guess.len();

        let mut guess_left = [NO_PEG; MAX_POSITIONS];
        let mut secret_left = [NO_PEG; MAX_POSITIONS];
        guess_left[..len].copy_from_slice(guess);
        secret_left[..len].copy_from_slice(secret);

        let mut exact = 0;
        for i in 0..len {
            if guess_left[i] == secret_left[i] {
                exact += 1;
                guess_left[i] = NO_PEG;
                secret_left[i] = NO_PEG;
            }
        }

        let mut partial = 0;
        for &peg in &guess_left[..len] {
            if peg == NO_PEG {
                continue;
            }
            if let Some(slot) = secret_left[..len].iter_mut().find(|s| **s == peg) {
                *slot = NO_PEG;
                partial += 1;
            }
        }

        Self { exact, partial }
    }

    /// Sorted per-position pegs: exact first, then partial, then misses
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, FeedbackPeg};
    ///
    /// let pegs = Feedback::new(2, 1).pegs(4);
    /// assert_eq!(
    ///     pegs,
    ///     vec![FeedbackPeg::Exact, FeedbackPeg::Exact, FeedbackPeg::Partial, FeedbackPeg::Miss]
    /// );
    /// ```
    #[must_use]
    pub fn pegs(self, positions: usize) -> Vec<FeedbackPeg> {
        let mut pegs = Vec::with_capacity(positions);
        pegs.extend(std::iter::repeat_n(FeedbackPeg::Exact, self.exact.into()));
        pegs.extend(std::iter::repeat_n(
            FeedbackPeg::Partial,
            self.partial.into(),
        ));
        pegs.extend(std::iter::repeat_n(
            FeedbackPeg::Miss,
            self.misses(positions),
        ));
        pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}
