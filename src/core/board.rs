//! Round history
//!
//! The board is an append-only list of scored guesses, bounded by the turn
//! limit. It is cleared as a whole between rounds.

use super::{Code, Feedback, GameConfig};
use crate::error::InputError;

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Scored guesses of the current round, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    positions: usize,
    turn_limit: usize,
    entries: Vec<BoardEntry>,
}

impl Board {
    /// An empty board sized for `config`
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            positions: config.positions(),
            turn_limit: config.turn_limit(),
            entries: Vec::with_capacity(config.turn_limit()),
        }
    }

    /// Record the guess of turn `turn_index` (0-based)
    ///
    /// Turns must be recorded in order, each exactly once.
    ///
    /// # Errors
    /// Returns `InputError::BoardFull` once the turn limit is reached,
    /// `InputError::TurnOutOfOrder` for any index other than the next turn,
    /// `InputError::Length` for a guess of the wrong length and
    /// `InputError::FeedbackOutOfRange` when exact plus partial exceeds the
    /// code length. The board is left unchanged on error.
    pub fn record(
        &mut self,
        turn_index: usize,
        guess: Code,
        feedback: Feedback,
    ) -> Result<(), InputError> {
        if self.is_full() {
            return Err(InputError::BoardFull {
                limit: self.turn_limit,
            });
        }
        if turn_index != self.entries.len() {
            return Err(InputError::TurnOutOfOrder {
                expected: self.entries.len(),
                got: turn_index,
            });
        }
        if guess.len() != self.positions {
            return Err(InputError::Length {
                expected: self.positions,
                actual: guess.len(),
            });
        }
        if !feedback.fits(self.positions) {
            return Err(InputError::FeedbackOutOfRange {
                exact: feedback.exact(),
                partial: feedback.partial(),
                positions: self.positions,
            });
        }

        self.entries.push(BoardEntry { guess, feedback });
        Ok(())
    }

    /// Every recorded entry, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[BoardEntry] {
        &self.entries
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&BoardEntry> {
        self.entries.last()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Index of the turn that will be recorded next
    #[inline]
    #[must_use]
    pub fn next_turn(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.turn_limit
    }

    /// Pegs per code
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> usize {
        self.positions
    }

    #[inline]
    #[must_use]
    pub const fn turn_limit(&self) -> usize {
        self.turn_limit
    }

    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        self.turn_limit.saturating_sub(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(turn_limit: usize) -> Board {
        Board::new(&GameConfig::new(4, 6, turn_limit).unwrap())
    }

    fn entry(pegs: &[u8], exact: u8, partial: u8) -> (Code, Feedback) {
        (
            Code::from_pegs(pegs.to_vec()),
            Feedback::new(exact, partial),
        )
    }

    #[test]
    fn records_in_order() {
        let mut board = board(3);
        let (g0, f0) = entry(&[1, 1, 2, 2], 0, 1);
        let (g1, f1) = entry(&[3, 3, 4, 4], 1, 0);

        board.record(0, g0.clone(), f0).unwrap();
        board.record(1, g1.clone(), f1).unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board.next_turn(), 2);
        assert_eq!(board.remaining_turns(), 1);
        assert_eq!(board.history()[0].guess, g0);
        assert_eq!(board.last().map(|e| e.feedback), Some(f1));
    }

    #[test]
    fn rejects_rewrite_and_skips() {
        let mut board = board(3);
        let (g, f) = entry(&[1, 2, 3, 4], 0, 0);
        board.record(0, g.clone(), f).unwrap();

        assert_eq!(
            board.record(0, g.clone(), f),
            Err(InputError::TurnOutOfOrder {
                expected: 1,
                got: 0
            })
        );
        assert_eq!(
            board.record(2, g, f),
            Err(InputError::TurnOutOfOrder {
                expected: 1,
                got: 2
            })
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn rejects_past_turn_limit() {
        let mut board = board(1);
        let (g, f) = entry(&[1, 2, 3, 4], 0, 0);
        board.record(0, g.clone(), f).unwrap();
        assert!(board.is_full());

        assert_eq!(
            board.record(1, g, f),
            Err(InputError::BoardFull { limit: 1 })
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut board = board(2);
        let (g, f) = entry(&[1, 2, 3, 4], 0, 0);
        board.record(0, g.clone(), f).unwrap();
        board.record(1, g.clone(), f).unwrap();

        board.clear();

        assert!(board.is_empty());
        assert_eq!(board.next_turn(), 0);
        assert_eq!(board.remaining_turns(), 2);
        board.record(0, g, f).unwrap();
    }

    #[test]
    fn rejects_wrong_length_guess() {
        let mut board = board(3);
        let (g, f) = entry(&[1, 2], 0, 0);

        assert_eq!(
            board.record(0, g, f),
            Err(InputError::Length {
                expected: 4,
                actual: 2
            })
        );
        assert!(board.is_empty());
    }

    #[test]
    fn rejects_impossible_feedback() {
        let mut board = board(3);
        let (g, f) = entry(&[1, 2, 3, 4], 4, 1);

        assert_eq!(
            board.record(0, g, f),
            Err(InputError::FeedbackOutOfRange {
                exact: 4,
                partial: 1,
                positions: 4
            })
        );
        assert!(board.is_empty());

        let (g, f) = entry(&[1, 2, 3, 4], 2, 2);
        board.record(0, g, f).unwrap();
        assert_eq!(board.len(), 1);
    }
}
