//! Core domain types for Mastermind
//!
//! Codes, the scorer, the board and the game dimensions. Everything here is
//! pure data and pure functions with no I/O.

mod board;
mod code;
mod config;
mod feedback;

pub use board::{Board, BoardEntry};
pub use code::{Code, NO_PEG, PEG_LETTERS, Peg, peg_letter};
pub use config::{GameConfig, MAX_CODE_SPACE, MAX_COLORS, MAX_POSITIONS};
pub use feedback::{Feedback, FeedbackPeg};
