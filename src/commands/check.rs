//! Single evaluation command
//!
//! Scores one guess against a chosen target without starting a game.

use crate::core::{Feedback, Word};
use crate::error::WordError;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// Neither word has to be in a dictionary, only well formed.
///
/// # Errors
///
/// Returns an error if either word is not five letters of the Russian alphabet.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}
