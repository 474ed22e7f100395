//! Game engine
//!
//! Connects sessions to the shared word list and statistics. The engine owns
//! no session; callers keep their `Session` and pass it in, so any number of
//! games can run against one engine.

use super::session::{Session, Turn};
use super::stats::{StatsRecorder, StatsSnapshot};
use crate::error::{GameError, StatsNotSaved, WordListError};
use crate::storage::{StatsStore, WordListStore};
use crate::wordlists::WordListManager;
use rand::Rng;
use tracing::{error, info};

/// Shared word list and statistics for all sessions
pub struct Engine<W: WordListStore, S: StatsStore> {
    words: WordListManager<W>,
    stats: StatsRecorder<S>,
}

impl<W: WordListStore, S: StatsStore> Engine<W, S> {
    pub const fn new(words: WordListManager<W>, stats: StatsRecorder<S>) -> Self {
        Self { words, stats }
    }

    /// Start a game against a random target
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if there is nothing to draw from.
    pub fn new_session<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Session, WordListError> {
        let target = self.words.draw_target(rng)?;
        info!("New game started");
        Ok(Session::new(target))
    }

    /// Submit the typed row, recording the outcome if the game ends
    ///
    /// If the outcome cannot be saved the final report carries `stats_error`.
    ///
    /// # Errors
    /// Same as [`Session::submit`].
    pub fn submit(&self, session: &mut Session) -> Result<Turn, GameError> {
        let mut turn = session.submit(&self.words)?;
        self.settle(session, &mut turn);
        Ok(turn)
    }

    /// Submit a whole word, recording the outcome if the game ends
    ///
    /// # Errors
    /// Same as [`Session::submit_guess`].
    pub fn submit_guess(&self, session: &mut Session, raw: &str) -> Result<Turn, GameError> {
        let mut turn = session.submit_guess(raw, &self.words)?;
        self.settle(session, &mut turn);
        Ok(turn)
    }

    // A session yields an outcome on exactly one turn; later input is
    // ignored, so each finished game is recorded at most once.
    fn settle(&self, session: &Session, turn: &mut Turn) {
        let Turn::Evaluated(report) = turn else {
            return;
        };
        let Some(outcome) = &report.outcome else {
            return;
        };

        if let Err(e) = self
            .stats
            .record_outcome(outcome.is_win(), session.attempts().len())
        {
            error!(error = %e, "Failed to record game outcome");
            report.stats_error = Some(StatsNotSaved::from(&e));
        }
    }

    #[must_use]
    pub const fn words(&self) -> &WordListManager<W> {
        &self.words
    }

    #[must_use]
    pub const fn stats(&self) -> &StatsRecorder<S> {
        &self.stats
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
