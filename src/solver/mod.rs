//! Automated code breaking
//!
//! Enumerates the code space, keeps the codes consistent with every recorded
//! feedback and samples the next guess from them.

mod candidates;
mod code_space;
mod engine;

pub use candidates::{CandidateSet, DISPLAY_CAP};
pub use code_space::{CodeSpace, CodeSpaceIter};
pub use engine::Solver;
