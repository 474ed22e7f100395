//! Runtime configuration
//!
//! Command-line flags win over environment variables, which win over the
//! defaults. A `.env` file in the working directory is loaded first.

use crate::error::{Result, StorageError};
use crate::game::{Engine, StatsRecorder};
use crate::storage::JsonStore;
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{Dictionary, WordListManager};
use dotenvy::dotenv;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{info, warn};

pub const DATA_DIR_VAR: &str = "KVORDLE_DATA_DIR";
pub const WORDLIST_VAR: &str = "KVORDLE_WORDLIST";
pub const DEFAULT_DATA_DIR: &str = ".kvordle";

const CUSTOM_WORDS_FILE: &str = "custom_words.json";
const STATS_FILE: &str = "stats.json";
const LOG_FILE: &str = "kvordle.log";

/// Engine backed by JSON files
pub type FileEngine = Engine<JsonStore, JsonStore>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding custom words, statistics and the TUI log
    pub data_dir: PathBuf,
    /// Replacement for the embedded base dictionary
    pub wordlist: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from flags and the environment
    #[must_use]
    pub fn load(data_dir: Option<PathBuf>, wordlist: Option<PathBuf>) -> Self {
        // Runs before logging is set up
        dotenv().ok();

        Self::resolve(
            data_dir,
            wordlist,
            env::var_os(DATA_DIR_VAR),
            env::var_os(WORDLIST_VAR),
        )
    }

    fn resolve(
        data_dir: Option<PathBuf>,
        wordlist: Option<PathBuf>,
        data_dir_env: Option<OsString>,
        wordlist_env: Option<OsString>,
    ) -> Self {
        let data_dir = data_dir
            .or_else(|| data_dir_env.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let wordlist = wordlist.or_else(|| wordlist_env.map(PathBuf::from));

        Self { data_dir, wordlist }
    }

    #[must_use]
    pub fn custom_words_path(&self) -> PathBuf {
        self.data_dir.join(CUSTOM_WORDS_FILE)
    }

    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    /// The base dictionary: the word file if one is configured, else the
    /// embedded list
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the word file cannot be read.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let Some(path) = &self.wordlist else {
            return Ok(Dictionary::embedded());
        };

        let words = load_from_file(path).map_err(StorageError::from)?;
        if words.is_empty() {
            warn!(path = %path.display(), "Word file has no valid words");
        }
        info!(path = %path.display(), words = words.len(), "Loaded word file");
        Ok(Dictionary::from_words(words))
    }

    /// Build an engine over the configured files
    ///
    /// # Errors
    /// Returns an error if the word file or either JSON file cannot be read.
    pub fn open_engine(&self) -> Result<FileEngine> {
        let words = WordListManager::open(
            self.dictionary()?,
            JsonStore::new(self.custom_words_path()),
        )?;
        let stats = StatsRecorder::open(JsonStore::new(self.stats_path()))?;
        Ok(Engine::new(words, stats))
    }
}
