//! Terminal output formatting
//!
//! Peg tables, board layout and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    board_lines, candidate_lines, print_benchmark_result, print_solve_result, stats_lines,
};
pub use formatters::PegStyle;
