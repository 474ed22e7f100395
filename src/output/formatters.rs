//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile, e.g. ` С ` on green
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&c, &s)| colored_tile(c, s).to_string())
        .collect()
}

/// Upper-case a word for display
#[must_use]
pub fn display_word(word: &Word) -> String {
    word.text().to_uppercase()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_label(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
