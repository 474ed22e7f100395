//! Keyboard letter state
//!
//! Folds every scored guess into one best-known status per letter. A letter
//! only ever moves up the `Absent < Present < Correct` order, so a later
//! guess showing it misplaced cannot hide an earlier exact match.

use super::{Feedback, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Best-known status for each letter seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the state from a full attempt history
    pub fn replay<'a, I>(attempts: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Feedback)>,
    {
        let mut state = Self::new();
        for (guess, feedback) in attempts {
            state.fold(guess, feedback);
        }
        state
    }

    /// Merge one scored guess into the state
    pub fn fold(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            self.letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    /// Consuming variant of [`fold`](Self::fold)
    #[must_use]
    pub fn folded(mut self, guess: &Word, feedback: &Feedback) -> Self {
        self.fold(guess, feedback);
        self
    }

    /// Status of a letter, or `None` if it has not been guessed yet
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// All known letters with their status, sorted by letter
    #[must_use]
    pub fn entries(&self) -> Vec<(char, LetterStatus)> {
        let mut entries: Vec<_> = self.letters.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }
}
