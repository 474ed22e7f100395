//! JSON file storage

use super::{StatsStore, WordListStore};
use crate::core::Word;
use crate::error::StorageError;
use crate::game::StatsAccumulator;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single JSON document on disk
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read<T: DeserializeOwned + Default>(&self) -> Result<T, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(T::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved file, starting empty");
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write<T: Serialize>(&self, value: &T) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(value)?;
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "Saved");
        Ok(())
    }
}

impl WordListStore for JsonStore {
    fn load(&self) -> Result<BTreeSet<Word>, StorageError> {
        self.read()
    }

    fn save(&self, words: &BTreeSet<Word>) -> Result<(), StorageError> {
        self.write(words)
    }
}

impl StatsStore for JsonStore {
    fn load(&self) -> Result<StatsAccumulator, StorageError> {
        self.read()
    }

    fn save(&self, stats: &StatsAccumulator) -> Result<(), StorageError> {
        self.write(stats)
    }
}
