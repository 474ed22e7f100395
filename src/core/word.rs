//! Five-letter word representation
//!
//! A Word stores a validated, lowercased five-letter Russian word.

use super::alphabet::{self, WORD_LENGTH};
use crate::error::WordError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A five-letter word drawn from the recognized alphabet
///
/// Equality, ordering and hashing use the canonical lowercase form, so
/// `Word::new("СЛОВО")` and `Word::new("слово")` are the same word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

impl Word {
    /// Validate and canonicalize a word
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - It contains whitespace
    /// - Any character is outside а–я and ё
    ///
    /// # Examples
    /// ```
    /// use kvordle::core::Word;
    ///
    /// let word = Word::new("Слово").unwrap();
    /// assert_eq!(word.text(), "слово");
    ///
    /// assert!(Word::new("слова!").is_err());
    /// assert!(Word::new("crane").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let lowered: Vec<char> = text.as_ref().chars().map(alphabet::to_lower).collect();

        if lowered.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(lowered.len()));
        }

        if lowered.iter().any(|c| c.is_whitespace()) {
            return Err(WordError::Whitespace);
        }

        if let Some(&bad) = lowered.iter().find(|&&c| !alphabet::is_letter(c)) {
            return Err(WordError::NotInAlphabet(bad));
        }

        let chars: [char; WORD_LENGTH] = lowered
            .try_into()
            .map_err(|v: Vec<char>| WordError::InvalidLength(v.len()))?;

        Ok(Self {
            text: chars.iter().collect(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Count occurrences of each letter
    ///
    /// Used by the evaluator to bound present/correct marks per letter.
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        letter_counts(&self.chars)
    }
}

pub(crate) fn letter_counts(letters: &[char]) -> FxHashMap<char, u8> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
