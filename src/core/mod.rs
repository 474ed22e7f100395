//! Core domain types for the game
//!
//! Pure types with no I/O: word validation, guess evaluation and the keyboard
//! fold. Everything here is deterministic and cheap to test.

pub mod alphabet;
mod feedback;
mod keyboard;
mod word;

pub use alphabet::{MAX_ATTEMPTS, WORD_LENGTH};
pub use feedback::{Feedback, LetterStatus};
pub use keyboard::KeyboardState;
pub use word::Word;

use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, HashSet};

/// Set of words a guess must belong to
pub trait Lexicon {
    fn contains(&self, word: &Word) -> bool;
}

/// Accepts every well-formed word
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyWord;

impl Lexicon for AnyWord {
    fn contains(&self, _word: &Word) -> bool {
        true
    }
}

impl Lexicon for [Word] {
    fn contains(&self, word: &Word) -> bool {
        self.iter().any(|w| w == word)
    }
}

impl Lexicon for Vec<Word> {
    fn contains(&self, word: &Word) -> bool {
        self.as_slice().contains(word)
    }
}

impl Lexicon for FxHashSet<Word> {
    fn contains(&self, word: &Word) -> bool {
        HashSet::contains(self, word)
    }
}

impl Lexicon for BTreeSet<Word> {
    fn contains(&self, word: &Word) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &Word) -> bool {
        (**self).contains(word)
    }
}
