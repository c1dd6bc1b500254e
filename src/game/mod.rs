//! Round orchestration
//!
//! The round state machine, the producers it pulls secrets and guesses from,
//! and the statistics kept across rounds.

mod round;
mod source;
mod stats;

pub use round::{RoundController, RoundEnd, RoundOutcome, RoundState, TurnReport};
pub use source::{FixedSecret, GuessSource, Input, RandomSecret, SecretSource, SolverBreaker};
pub use stats::ScoreBoard;
