//! Custom word list persistence through JSON files

use kvordle::config::Config;
use kvordle::core::Word;
use kvordle::error::{DuplicateOf, WordListError};
use kvordle::game::{Session, Turn};
use kvordle::storage::{JsonStore, WordListStore};
use kvordle::wordlists::{Dictionary, WordListManager};
use tempfile::TempDir;

fn config(dir: &TempDir) -> Config {
    Config {
        data_dir: dir.path().to_path_buf(),
        wordlist: None,
    }
}

#[test]
fn custom_words_survive_restart() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);

    {
        let engine = config.open_engine().unwrap();
        engine.words().add("актив").unwrap();
        engine.words().add("бланк").unwrap();
        engine.words().remove("актив").unwrap();
    }

    let engine = config.open_engine().unwrap();
    let listed: Vec<String> = engine.words().list().iter().map(ToString::to_string).collect();
    assert_eq!(listed, ["бланк"]);

    let saved = JsonStore::new(config.custom_words_path());
    let words = WordListStore::load(&saved).unwrap();
    assert_eq!(words.len(), 1);
}

#[test]
fn duplicate_add_leaves_list_unchanged() {
    let dir = TempDir::new().unwrap();
    let words = WordListManager::open(
        Dictionary::embedded(),
        JsonStore::new(dir.path().join("custom.json")),
    )
    .unwrap();

    words.add("бланк").unwrap();
    let before = words.list();

    assert!(matches!(
        words.add("БЛАНК"),
        Err(WordListError::Duplicate { reason: DuplicateOf::CustomList, .. })
    ));
    assert!(matches!(
        words.add("слово"),
        Err(WordListError::Duplicate { reason: DuplicateOf::BaseDictionary, .. })
    ));
    assert_eq!(words.list(), before);
}

#[test]
fn custom_word_is_a_valid_guess() {
    let dir = TempDir::new().unwrap();
    let words = WordListManager::open(
        Dictionary::embedded(),
        JsonStore::new(dir.path().join("custom.json")),
    )
    .unwrap();
    let mut session = Session::new(Word::new("слово").unwrap());

    assert!(session.submit_guess("бланк", &words).is_err());
    words.add("бланк").unwrap();
    assert!(matches!(
        session.submit_guess("бланк", &words),
        Ok(Turn::Evaluated(_))
    ));
}

#[test]
fn stats_survive_restart() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);

    {
        let engine = config.open_engine().unwrap();
        let mut session = Session::new(Word::new("слово").unwrap());
        engine.submit_guess(&mut session, "книга").unwrap();
        engine.submit_guess(&mut session, "слово").unwrap();
    }

    let totals = config.open_engine().unwrap().stats().totals();
    assert_eq!(totals.total_games, 1);
    assert_eq!(totals.games_won, 1);
    assert_eq!(totals.attempts_sum, 2);
    assert!(config.stats_path().exists());
}
