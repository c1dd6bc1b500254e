//! Code representation
//!
//! A Code is an ordered sequence of peg values. Peg values run from 1 to the
//! alphabet size; 0 is reserved for "no peg" and never appears in a Code.

use super::GameConfig;
use crate::error::InputError;
use std::fmt;

/// A single peg value, `1..=colors`
pub type Peg = u8;

/// Reserved "no peg" marker, also used for consumed pegs while scoring
pub const NO_PEG: Peg = 0;

/// Letter for each peg value, indexed by `peg - 1`
///
/// Red, Green, Blue, White, Yellow, Purple, Orange, browN
pub const PEG_LETTERS: [char; 8] = ['R', 'G', 'B', 'W', 'Y', 'P', 'O', 'N'];

/// An ordered sequence of pegs
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<Peg>);

impl Code {
    /// Create a code validated against a configuration
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - The length differs from `config.positions()`
    /// - Any peg is outside `1..=config.colors()`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let code = Code::new(vec![3, 2, 5, 5], &config).unwrap();
    /// assert_eq!(code.pegs(), &[3, 2, 5, 5]);
    ///
    /// assert!(Code::new(vec![3, 2, 5], &config).is_err());
    /// assert!(Code::new(vec![3, 2, 5, 7], &config).is_err());
    /// ```
    pub fn new(pegs: Vec<Peg>, config: &GameConfig) -> Result<Self, InputError> {
        if pegs.len() != config.positions() {
            return Err(InputError::Length {
                expected: config.positions(),
                actual: pegs.len(),
            });
        }

        if let Some((position, &value)) = pegs
            .iter()
            .enumerate()
            .find(|&(_, &peg)| peg == NO_PEG || peg > config.colors())
        {
            return Err(InputError::PegOutOfRange {
                position,
                value,
                colors: config.colors(),
            });
        }

        Ok(Self(pegs))
    }

    /// Wrap pegs produced by the engine itself
    pub(crate) const fn from_pegs(pegs: Vec<Peg>) -> Self {
        Self(pegs)
    }

    /// Parse a code typed as peg letters, e.g. "RGBR" or "r g b r"
    ///
    /// Letters are case-insensitive and whitespace is ignored.
    ///
    /// # Errors
    /// Returns `InputError::UnknownPeg` for a letter outside the palette, and
    /// the errors of [`Code::new`] for a wrong length or a peg beyond the
    /// configured alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let code = Code::parse_letters("rgbr", &config).unwrap();
    /// assert_eq!(code.pegs(), &[1, 2, 3, 1]);
    /// ```
    pub fn parse_letters(input: &str, config: &GameConfig) -> Result<Self, InputError> {
        let pegs = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                let upper = c.to_ascii_uppercase();
                PEG_LETTERS
                    .iter()
                    .position(|&letter| letter == upper)
                    .map(|index| index as Peg + 1)
                    .ok_or(InputError::UnknownPeg(c))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(pegs, config)
    }

    /// The pegs in order
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length code (never produced by a valid configuration)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as peg letters, e.g. "RGBR"
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.0.iter().map(|&peg| peg_letter(peg)).collect()
    }
}

/// Letter for a peg value, `'?'` outside the palette
#[must_use]
pub fn peg_letter(peg: Peg) -> char {
    usize::from(peg)
        .checked_sub(1)
        .and_then(|index| PEG_LETTERS.get(index))
        .copied()
        .unwrap_or('?')
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let config = GameConfig::default();
        let code = Code::new(vec![1, 6, 6, 1], &config).unwrap();
        assert_eq!(code.pegs(), &[1, 6, 6, 1]);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn code_creation_invalid_length() {
        let config = GameConfig::default();
        assert_eq!(
            Code::new(vec![1, 2, 3], &config),
            Err(InputError::Length {
                expected: 4,
                actual: 3
            })
        );
        assert!(Code::new(vec![], &config).is_err());
    }

    #[test]
    fn code_creation_rejects_reserved_and_out_of_range_pegs() {
        let config = GameConfig::default();
        assert_eq!(
            Code::new(vec![1, 0, 3, 4], &config),
            Err(InputError::PegOutOfRange {
                position: 1,
                value: 0,
                colors: 6
            })
        );
        assert!(Code::new(vec![1, 2, 3, 7], &config).is_err());
    }

    #[test]
    fn parse_letters_normalizes_case_and_spaces() {
        let config = GameConfig::default();
        let a = Code::parse_letters("RWBR", &config).unwrap();
        let b = Code::parse_letters("r w b r", &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.pegs(), &[1, 4, 3, 1]);
    }

    #[test]
    fn parse_letters_rejects_unknown_letter() {
        let config = GameConfig::default();
        assert_eq!(
            Code::parse_letters("RGBX", &config),
            Err(InputError::UnknownPeg('X'))
        );
    }

    #[test]
    fn parse_letters_respects_alphabet_size() {
        // Orange is the 7th peg, not available with six colors
        let config = GameConfig::default();
        assert!(matches!(
            Code::parse_letters("RGBO", &config),
            Err(InputError::PegOutOfRange { value: 7, .. })
        ));

        let wide = GameConfig::new(4, 8, 12).unwrap();
        assert!(Code::parse_letters("RGBO", &wide).is_ok());
    }

    #[test]
    fn letters_round_trip_through_display() {
        let config = GameConfig::default();
        let code = Code::parse_letters("YPGW", &config).unwrap();
        assert_eq!(code.to_string(), "YPGW");
    }

    #[test]
    fn peg_letter_outside_palette() {
        assert_eq!(peg_letter(NO_PEG), '?');
        assert_eq!(peg_letter(9), '?');
        assert_eq!(peg_letter(8), 'N');
    }
}
