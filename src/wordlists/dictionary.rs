//! Base dictionary
//!
//! The fixed set of words every game can draw from and accept as guesses.

use super::BASE;
use super::loader::words_from_slice;
use crate::core::{Lexicon, Word};
use rustc_hash::FxHashSet;

/// Read-only base word set
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(BASE))
    }

    /// Build from a word list, dropping duplicates but keeping first-seen order
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| index.insert(w.clone()))
            .collect();
        Self { words, index }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &Word) -> bool {
        Self::contains(self, word)
    }
}
