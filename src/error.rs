//! Error types shared by the engine
//!
//! `InputError` covers everything a producer can get wrong before the core
//! accepts a value. `EngineError` wraps it and adds the failures that can only
//! come from inside the engine.

use thiserror::Error;

/// A malformed value handed to the core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("code must have exactly {expected} pegs, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("peg {value} at position {position} is outside 1..={colors}")]
    PegOutOfRange {
        position: usize,
        value: u8,
        colors: u8,
    },

    #[error("'{0}' is not a peg letter")]
    UnknownPeg(char),

    #[error("turn {got} recorded out of order, next turn is {expected}")]
    TurnOutOfOrder { expected: usize, got: usize },

    #[error("feedback {exact} exact, {partial} partial does not fit {positions} pegs")]
    FeedbackOutOfRange {
        exact: u8,
        partial: u8,
        positions: usize,
    },

    #[error("board is full after {limit} turns")]
    BoardFull { limit: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failure of a core operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The candidate set emptied. Either the scorer or the recorded history is wrong.
    #[error("no code is consistent with the {turns} recorded turn(s)")]
    SolverInconsistency { turns: usize },

    /// Reading from or writing to an interactive producer failed
    #[error("input channel failed: {0}")]
    Channel(String),

    #[error("round cannot {action} while {state}")]
    RoundState {
        action: &'static str,
        state: &'static str,
    },
}
