//! Game sessions, statistics and the engine tying them together

mod engine;
pub mod session;
mod stats;

pub use engine::Engine;
pub use session::{Outcome, Phase, RowReport, Session, Turn};
pub use stats::{StatsAccumulator, StatsRecorder, StatsSnapshot};
