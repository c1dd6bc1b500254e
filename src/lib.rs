//! Mastermind Solver
//!
//! A Mastermind engine: exact/partial feedback scoring, a constraint solver
//! that only guesses codes consistent with every feedback so far, and a round
//! controller that drives human or computer players.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback, GameConfig};
//!
//! let config = GameConfig::default();
//! let guess = Code::parse_letters("RRRR", &config).unwrap();
//! let secret = Code::parse_letters("GRBR", &config).unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret).unwrap();
//! assert_eq!((feedback.exact(), feedback.partial()), (2, 0));
//! ```

// Codes, feedback, board and configuration
pub mod core;

// Error types
pub mod error;

// Candidate filtering and guess selection
pub mod solver;

// Rounds, producers and statistics
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
