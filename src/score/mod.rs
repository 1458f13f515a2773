//! Score module - kill counting and high score persistence.

mod store;
mod tracker;

pub use store::{HighScoreStore, MemoryHighScoreStore, RonHighScoreStore};
pub use tracker::{RunSummary, ScoreTracker};
