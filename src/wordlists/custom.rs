//! Custom target words
//!
//! Players can extend the pool of target words. A custom word must be a valid
//! five-letter word that is neither in the base dictionary nor already added.

use super::Dictionary;
use crate::core::{Lexicon, Word, alphabet};
use crate::error::{DuplicateOf, WordListError};
use crate::storage::WordListStore;
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Base dictionary plus the persisted custom word list
///
/// Shared across sessions; every method takes `&self` and add/remove are
/// serialized by an internal lock held across validation, persistence and
/// commit.
pub struct WordListManager<S: WordListStore> {
    base: Dictionary,
    custom: Mutex<BTreeSet<Word>>,
    store: S,
}

impl<S: WordListStore> WordListManager<S> {
    /// Load custom words from `store`
    ///
    /// Stored words that are also in the base dictionary are dropped, so each
    /// word is drawn with the same weight.
    ///
    /// # Errors
    /// Returns `WordListError::Storage` if the store cannot be read.
    pub fn open(base: Dictionary, store: S) -> Result<Self, WordListError> {
        let (shadowed, custom): (BTreeSet<Word>, BTreeSet<Word>) =
            store.load()?.into_iter().partition(|w| base.contains(w));
        if !shadowed.is_empty() {
            warn!(
                count = shadowed.len(),
                "Ignoring custom words already in the base dictionary"
            );
        }
        info!(
            base = base.len(),
            custom = custom.len(),
            "Word lists loaded"
        );
        Ok(Self {
            base,
            custom: Mutex::new(custom),
            store,
        })
    }

    fn custom(&self) -> MutexGuard<'_, BTreeSet<Word>> {
        self.custom.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a custom word
    ///
    /// # Errors
    /// - `WordListError::InvalidWord` if `raw` is not a valid word
    /// - `WordListError::Duplicate` if it is already known
    /// - `WordListError::Storage` if persisting fails (nothing is added)
    pub fn add(&self, raw: &str) -> Result<Word, WordListError> {
        let word = Word::new(raw)?;

        if self.base.contains(&word) {
            return Err(WordListError::Duplicate {
                word: word.to_string(),
                reason: DuplicateOf::BaseDictionary,
            });
        }

        let mut custom = self.custom();
        if custom.contains(&word) {
            return Err(WordListError::Duplicate {
                word: word.to_string(),
                reason: DuplicateOf::CustomList,
            });
        }

        let mut updated = custom.clone();
        updated.insert(word.clone());
        self.store.save(&updated)?;
        *custom = updated;

        info!(word = %word, "Custom word added");
        Ok(word)
    }

    /// Remove a custom word
    ///
    /// Base dictionary words cannot be removed and report `NotFound`.
    ///
    /// # Errors
    /// - `WordListError::NotFound` if the word is not in the custom list
    /// - `WordListError::Storage` if persisting fails (nothing is removed)
    pub fn remove(&self, raw: &str) -> Result<(), WordListError> {
        let not_found = || WordListError::NotFound(raw.to_lowercase());
        let word = Word::new(raw).map_err(|_| not_found())?;

        let mut custom = self.custom();
        if !custom.contains(&word) {
            return Err(not_found());
        }

        let mut updated = custom.clone();
        updated.remove(&word);
        self.store.save(&updated)?;
        *custom = updated;

        info!(word = %word, "Custom word removed");
        Ok(())
    }

    /// Custom words in alphabetical order, ё after е
    #[must_use]
    pub fn list(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.custom().iter().cloned().collect();
        words.sort_by_cached_key(|w| {
            w.chars()
                .iter()
                .map(|&c| alphabet::collation_key(c))
                .collect::<Vec<_>>()
        });
        words
    }

    #[must_use]
    pub fn base(&self) -> &Dictionary {
        &self.base
    }

    /// Total number of words a target can be drawn from
    #[must_use]
    pub fn len(&self) -> usize {
        self.base.len() + self.custom().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check base dictionary and custom list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.base.contains(word) || self.custom().contains(word)
    }

    /// Pick a target uniformly from base and custom words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` when there are no words at all.
    pub fn draw_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, WordListError> {
        let custom = self.custom();
        let word = self
            .base
            .words()
            .iter()
            .chain(custom.iter())
            .choose(rng)
            .cloned()
            .ok_or(WordListError::Empty)?;

        debug!(pool = self.base.len() + custom.len(), "Target drawn");
        Ok(word)
    }
}

impl<S: WordListStore> Lexicon for WordListManager<S> {
    fn contains(&self, word: &Word) -> bool {
        Self::contains(self, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, WordError};
    use crate::storage::MemoryStore;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io;

    fn manager() -> WordListManager<MemoryStore<BTreeSet<Word>>> {
        let base = Dictionary::from_words(words_from_slice(&["слово", "книга"]));
        WordListManager::open(base, MemoryStore::default()).unwrap()
    }

    struct FailingStore;

    impl WordListStore for FailingStore {
        fn load(&self) -> Result<BTreeSet<Word>, StorageError> {
            Ok(BTreeSet::new())
        }

        fn save(&self, _words: &BTreeSet<Word>) -> Result<(), StorageError> {
            Err(io::Error::other("disk full").into())
        }
    }

    #[test]
    fn add_and_list() {
        let words = manager();
        let added = words.add("Дверь").unwrap();
        assert_eq!(added.text(), "дверь");

        words.add("актёр").unwrap();
        let listed: Vec<String> = words.list().iter().map(ToString::to_string).collect();
        assert_eq!(listed, ["актёр", "дверь"]);
        assert_eq!(words.store.snapshot().len(), 2);
    }

    #[test]
    fn add_rejects_invalid_words() {
        let words = manager();
        assert!(matches!(
            words.add("кот"),
            Err(WordListError::InvalidWord(WordError::InvalidLength(3)))
        ));
        assert!(matches!(
            words.add("hello"),
            Err(WordListError::InvalidWord(WordError::NotInAlphabet('h')))
        ));
        assert!(words.list().is_empty());
    }

    #[test]
    fn add_twice_is_rejected() {
        let words = manager();
        words.add("дверь").unwrap();

        let err = words.add("ДВЕРЬ").unwrap_err();
        assert!(matches!(
            err,
            WordListError::Duplicate {
                reason: DuplicateOf::CustomList,
                ..
            }
        ));
        assert_eq!(words.list().len(), 1);
    }

    #[test]
    fn add_base_word_is_rejected() {
        let words = manager();
        let err = words.add("Слово").unwrap_err();
        assert!(matches!(
            err,
            WordListError::Duplicate {
                reason: DuplicateOf::BaseDictionary,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Word 'слово' is already in the base dictionary");
        assert!(words.list().is_empty());
    }

    #[test]
    fn remove_requires_existing_word() {
        let words = manager();
        assert!(matches!(
            words.remove("дверь"),
            Err(WordListError::NotFound(_))
        ));
        assert!(matches!(
            words.remove("слово"),
            Err(WordListError::NotFound(_))
        ));
        assert!(matches!(words.remove("?"), Err(WordListError::NotFound(_))));

        words.add("дверь").unwrap();
        words.remove("ДВЕРЬ").unwrap();
        assert!(words.list().is_empty());
        assert!(words.store.snapshot().is_empty());
    }

    #[test]
    fn failed_save_changes_nothing() {
        let base = Dictionary::from_words(words_from_slice(&["слово"]));
        let words = WordListManager::open(base, FailingStore).unwrap();

        assert!(matches!(
            words.add("дверь"),
            Err(WordListError::Storage(_))
        ));
        assert!(words.list().is_empty());
        assert!(!words.contains(&Word::new("дверь").unwrap()));
    }

    #[test]
    fn custom_words_are_known_and_drawable() {
        let words = manager();
        let door = words.add("дверь").unwrap();
        assert!(Lexicon::contains(&words, &door));
        assert_eq!(words.len(), 3);

        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = BTreeSet::new();
        for _ in 0..200 {
            seen.insert(words.draw_target(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&door));
    }

    #[test]
    fn list_puts_yo_after_ye() {
        let words = manager();
        for w in ["жираф", "ёршик", "ежата"] {
            words.add(w).unwrap();
        }
        let listed: Vec<String> = words.list().iter().map(ToString::to_string).collect();
        assert_eq!(listed, ["ежата", "ёршик", "жираф"]);
    }

    #[test]
    fn stored_base_words_are_not_counted_twice() {
        let base = Dictionary::from_words(words_from_slice(&["слово", "книга"]));
        let stored = BTreeSet::from([Word::new("слово").unwrap()]);
        let words = WordListManager::open(base, MemoryStore::new(stored)).unwrap();

        assert_eq!(words.len(), 2);
        assert!(words.list().is_empty());
        assert!(words.contains(&Word::new("слово").unwrap()));

        let mut rng = StdRng::seed_from_u64(5);
        let mut slovo = 0;
        for _ in 0..400 {
            if words.draw_target(&mut rng).unwrap().text() == "слово" {
                slovo += 1;
            }
        }
        assert!((120..=280).contains(&slovo), "drawn {slovo} times");
    }

    #[test]
    fn draw_from_empty_pool_fails() {
        let words =
            WordListManager::open(Dictionary::default(), MemoryStore::<BTreeSet<Word>>::default())
                .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            words.draw_target(&mut rng),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn concurrent_adds_keep_set_consistent() {
        let words = manager();
        let candidates = ["дверь", "актёр", "багаж", "ветер", "голос"];

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let words = &words;
                scope.spawn(move || {
                    for w in candidates {
                        let _ = words.add(w);
                    }
                });
            }
        });

        assert_eq!(words.list().len(), candidates.len());
        assert_eq!(words.store.snapshot().len(), candidates.len());
    }
}
