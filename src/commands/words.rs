//! Custom word management commands

use crate::core::Word;
use crate::error::WordListError;
use crate::storage::WordListStore;
use crate::wordlists::WordListManager;
use rand::Rng;

/// What a `words` subcommand did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordsOutcome {
    Listed(Vec<Word>),
    Added(Word),
    Removed(String),
}

/// Action requested on the custom list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordsAction {
    List,
    Add(String),
    Remove(String),
}

/// Apply one action to the custom word list
///
/// # Errors
///
/// Returns the word list error for a rejected add or remove.
pub fn manage_words<S: WordListStore>(
    words: &WordListManager<S>,
    action: WordsAction,
) -> Result<WordsOutcome, WordListError> {
    match action {
        WordsAction::List => Ok(WordsOutcome::Listed(words.list())),
        WordsAction::Add(raw) => words.add(&raw).map(WordsOutcome::Added),
        WordsAction::Remove(raw) => {
            words.remove(&raw)?;
            Ok(WordsOutcome::Removed(raw.to_lowercase()))
        }
    }
}

/// Draw a random target from base and custom words
///
/// # Errors
///
/// Returns `WordListError::Empty` if there are no words.
pub fn draw_word<S: WordListStore, R: Rng + ?Sized>(
    words: &WordListManager<S>,
    rng: &mut R,
) -> Result<Word, WordListError> {
    words.draw_target(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn manager() -> WordListManager<MemoryStore<BTreeSet<Word>>> {
        let base = Dictionary::from_words(words_from_slice(&["слово"]));
        WordListManager::open(base, MemoryStore::default()).unwrap()
    }

    #[test]
    fn add_list_remove() {
        let words = manager();

        let added = manage_words(&words, WordsAction::Add("Дверь".into())).unwrap();
        assert_eq!(added, WordsOutcome::Added(Word::new("дверь").unwrap()));

        let listed = manage_words(&words, WordsAction::List).unwrap();
        assert_eq!(listed, WordsOutcome::Listed(vec![Word::new("дверь").unwrap()]));

        let removed = manage_words(&words, WordsAction::Remove("ДВЕРЬ".into())).unwrap();
        assert_eq!(removed, WordsOutcome::Removed("дверь".into()));
        assert!(words.list().is_empty());
    }

    #[test]
    fn remove_unknown_word_fails() {
        let words = manager();
        assert!(matches!(
            manage_words(&words, WordsAction::Remove("дверь".into())),
            Err(WordListError::NotFound(w)) if w == "дверь"
        ));
    }

    #[test]
    fn draw_single_word_pool() {
        let words = manager();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(draw_word(&words, &mut rng).unwrap().text(), "слово");
    }
}
