//! Game dimensions
//!
//! The number of positions, the alphabet size and the turn budget. Everything
//! else in the engine is derived from these three numbers.

use crate::error::InputError;

/// Most positions a code may have
pub const MAX_POSITIONS: usize = 8;

/// Most distinct peg values (the presentation palette has eight pegs)
pub const MAX_COLORS: u8 = 8;

/// Largest code space the solver will enumerate each turn
pub const MAX_CODE_SPACE: usize = 1 << 21;

/// Dimensions of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    positions: usize,
    colors: u8,
    turn_limit: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `InputError::Config` if:
    /// - `positions` is not in `1..=8`
    /// - `colors` is not in `1..=8`
    /// - `turn_limit` is zero
    /// - `colors^positions` exceeds [`MAX_CODE_SPACE`]
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(5, 8, 10).unwrap();
    /// assert_eq!(config.code_space_size(), 32_768);
    ///
    /// assert!(GameConfig::new(0, 6, 12).is_err());
    /// ```
    pub fn new(positions: usize, colors: u8, turn_limit: usize) -> Result<Self, InputError> {
        if !(1..=MAX_POSITIONS).contains(&positions) {
            return Err(InputError::Config(format!(
                "positions must be in 1..={MAX_POSITIONS}, got {positions}"
            )));
        }
        if !(1..=MAX_COLORS).contains(&colors) {
            return Err(InputError::Config(format!(
                "colors must be in 1..={MAX_COLORS}, got {colors}"
            )));
        }
        if turn_limit == 0 {
            return Err(InputError::Config("turn limit must be at least 1".into()));
        }

        let config = Self {
            positions,
            colors,
            turn_limit,
        };
        let size = config.code_space_size();
        if size > MAX_CODE_SPACE {
            return Err(InputError::Config(format!(
                "{colors}^{positions} = {size} codes exceeds the {MAX_CODE_SPACE} limit"
            )));
        }

        Ok(config)
    }

    /// Code length N
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> usize {
        self.positions
    }

    /// Alphabet size K
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> u8 {
        self.colors
    }

    /// Guesses allowed per round
    #[inline]
    #[must_use]
    pub const fn turn_limit(&self) -> usize {
        self.turn_limit
    }

    /// Number of distinct codes, K^N
    #[must_use]
    pub fn code_space_size(&self) -> usize {
        // Bounded by MAX_COLORS^MAX_POSITIONS, which fits in u32
        usize::from(self.colors).pow(self.positions as u32)
    }
}

impl Default for GameConfig {
    /// Four positions, six colors, twelve turns
    fn default() -> Self {
        Self {
            positions: 4,
            colors: 6,
            turn_limit: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.positions(), 4);
        assert_eq!(config.colors(), 6);
        assert_eq!(config.turn_limit(), 12);
        assert_eq!(config.code_space_size(), 1296);
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert!(GameConfig::new(0, 6, 12).is_err());
        assert!(GameConfig::new(9, 2, 12).is_err());
        assert!(GameConfig::new(4, 0, 12).is_err());
        assert!(GameConfig::new(4, 9, 12).is_err());
        assert!(GameConfig::new(4, 6, 0).is_err());
    }

    #[test]
    fn rejects_oversized_code_space() {
        // 8^8 = 16,777,216
        assert!(matches!(
            GameConfig::new(8, 8, 12),
            Err(InputError::Config(_))
        ));
        // 6^8 = 1,679,616 still fits
        assert!(GameConfig::new(8, 6, 12).is_ok());
    }

    #[test]
    fn single_peg_game_is_valid() {
        let config = GameConfig::new(1, 1, 1).unwrap();
        assert_eq!(config.code_space_size(), 1);
    }
}
