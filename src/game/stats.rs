//! Statistics across completed sessions

use crate::core::MAX_ATTEMPTS;
use crate::error::StorageError;
use crate::storage::StatsStore;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Running totals over every finished game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsAccumulator {
    pub total_games: u64,
    pub games_won: u64,
    /// Sum of attempts over won games only
    pub attempts_sum: u64,
    /// Wins by attempt count; index 0 is unused
    pub guess_distribution: [u64; MAX_ATTEMPTS + 1],
}

/// Derived figures for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_games: u64,
    /// Percentage of games won (0-100)
    pub win_rate: f64,
    /// Mean attempts per won game
    pub average_attempts: f64,
}

impl StatsAccumulator {
    /// Add one finished game
    ///
    /// `attempts_used` counts every guess made, including the winning one.
    pub fn record_outcome(&mut self, won: bool, attempts_used: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            self.attempts_sum += attempts_used as u64;
            if let Some(slot) = self.guess_distribution.get_mut(attempts_used) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.attempts_sum as f64 / self.games_won as f64
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_games: self.total_games,
            win_rate: self.win_rate(),
            average_attempts: self.average_attempts(),
        }
    }
}

/// Process-wide statistics backed by a store
///
/// Each recorded outcome is saved before it becomes visible; if the save
/// fails the in-memory totals are left as they were.
pub struct StatsRecorder<S: StatsStore> {
    stats: Mutex<StatsAccumulator>,
    store: S,
}

impl<S: StatsStore> StatsRecorder<S> {
    /// Load saved statistics from `store`
    ///
    /// # Errors
    /// Returns `StorageError` if the store cannot be read.
    pub fn open(store: S) -> Result<Self, StorageError> {
        let stats = store.load()?;
        info!(total_games = stats.total_games, "Statistics loaded");
        Ok(Self {
            stats: Mutex::new(stats),
            store,
        })
    }

    /// Record a finished game and persist it
    ///
    /// # Errors
    /// Returns `StorageError` if the store rejects the update.
    pub fn record_outcome(&self, won: bool, attempts_used: usize) -> Result<(), StorageError> {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);

        let mut updated = stats.clone();
        updated.record_outcome(won, attempts_used);
        self.store.save(&updated)?;
        *stats = updated;

        info!(won, attempts_used, total_games = stats.total_games, "Outcome recorded");
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        self.totals().snapshot()
    }

    /// Copy of the raw totals
    #[must_use]
    pub fn totals(&self) -> StatsAccumulator {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
