//! Interactive TUI for the code breaker role

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
