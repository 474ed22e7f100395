//! In-memory storage for tests and throwaway sessions

use super::{StatsStore, WordListStore};
use crate::core::Word;
use crate::error::StorageError;
use crate::game::StatsAccumulator;
use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

/// Keeps the last saved value in memory
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    value: Mutex<T>,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    /// The last saved value
    pub fn snapshot(&self) -> T {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, value: &T) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.clone();
    }
}

impl WordListStore for MemoryStore<BTreeSet<Word>> {
    fn load(&self) -> Result<BTreeSet<Word>, StorageError> {
        Ok(self.snapshot())
    }

    fn save(&self, words: &BTreeSet<Word>) -> Result<(), StorageError> {
        self.replace(words);
        Ok(())
    }
}

impl StatsStore for MemoryStore<StatsAccumulator> {
    fn load(&self) -> Result<StatsAccumulator, StorageError> {
        Ok(self.snapshot())
    }

    fn save(&self, stats: &StatsAccumulator) -> Result<(), StorageError> {
        self.replace(stats);
        Ok(())
    }
}
