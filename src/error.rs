//! Error types for the game engine
//!
//! Every failure is reported without mutating session, word list or
//! statistics state.

use std::io;
use thiserror::Error;

/// A string that is not a valid five-letter word
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("Word must not contain whitespace")]
    Whitespace,

    #[error("Letter '{0}' is not in the Russian alphabet")]
    NotInAlphabet(char),
}

/// Raw letter sequences handed to the evaluator had the wrong length
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Guess has {guess} letters but target has {target}, expected 5")]
    LengthMismatch { guess: usize, target: usize },
}

/// Rejected input on an active session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Row is incomplete: {filled} of {required} letters entered")]
    IncompleteRow { filled: usize, required: usize },

    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] WordError),

    #[error("Word not found in dictionary: {0}")]
    NotInDictionary(String),
}

/// Persistence failures
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A finished game whose outcome could not be persisted
///
/// Carried on the final `RowReport` rather than returned as an error, since the
/// session itself has already ended.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Game result was not saved: {reason}")]
pub struct StatsNotSaved {
    pub reason: String,
}

impl From<&StorageError> for StatsNotSaved {
    fn from(err: &StorageError) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}

/// Why a word was refused as a duplicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateOf {
    /// Already part of the base dictionary
    BaseDictionary,
    /// Already added to the custom list
    CustomList,
}

impl std::fmt::Display for DuplicateOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BaseDictionary => write!(f, "already in the base dictionary"),
            Self::CustomList => write!(f, "already added"),
        }
    }
}

/// Custom word list failures
#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("Word '{word}' is {reason}")]
    Duplicate { word: String, reason: DuplicateOf },

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("No words available to draw a target from")]
    Empty,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Crate-level error
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    WordList(#[from] WordListError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type using the crate error
pub type Result<T> = std::result::Result<T, Error>;
