//! Command implementations

pub mod check;
pub mod simple;
pub mod words;

pub use check::{CheckResult, check_guess};
pub use simple::{play_lines, run_simple};
pub use words::{WordsAction, WordsOutcome, draw_word, manage_words};
