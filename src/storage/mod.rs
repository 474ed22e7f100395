//! Persistence for the custom word list and statistics
//!
//! The engine only needs whole-value `load` and `save`. Each add, remove or
//! recorded outcome calls `save` once with the complete new value.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::core::Word;
use crate::error::StorageError;
use crate::game::StatsAccumulator;
use std::collections::BTreeSet;

/// Durable set of custom words
pub trait WordListStore: Send + Sync {
    /// Load the saved words; an empty set if nothing was saved yet
    ///
    /// # Errors
    /// Returns `StorageError` if the backing storage cannot be read or parsed.
    fn load(&self) -> Result<BTreeSet<Word>, StorageError>;

    /// Replace the saved words
    ///
    /// # Errors
    /// Returns `StorageError` if the backing storage cannot be written.
    fn save(&self, words: &BTreeSet<Word>) -> Result<(), StorageError>;
}

/// Durable statistics snapshot
pub trait StatsStore: Send + Sync {
    /// Load the saved statistics; zeroed if nothing was saved yet
    ///
    /// # Errors
    /// Returns `StorageError` if the backing storage cannot be read or parsed.
    fn load(&self) -> Result<StatsAccumulator, StorageError>;

    /// Replace the saved statistics
    ///
    /// # Errors
    /// Returns `StorageError` if the backing storage cannot be written.
    fn save(&self, stats: &StatsAccumulator) -> Result<(), StorageError>;
}
