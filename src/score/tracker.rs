//! Run score and the persisted best score.

use bevy::prelude::*;

use super::store::HighScoreStore;

/// Final tally handed out when a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub high_score: u32,
    pub new_record: bool,
}

/// Counts kills for the current run and flushes records to the store.
pub struct ScoreTracker {
    score: u32,
    high_score: u32,
    store: Box<dyn HighScoreStore>,
}

impl ScoreTracker {
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.get_high_score();
        Self {
            score: 0,
            high_score,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score known to the store as of the last run start or end.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Zero the score and re-read the stored best.
    pub fn start_run(&mut self) {
        self.score = 0;
        self.high_score = self.store.get_high_score();
    }

    /// Count one creature death; returns the new score.
    pub fn record_kill(&mut self) -> u32 {
        self.score = self.score.saturating_add(1);
        self.score
    }

    /// Persist the score if it beats the stored best.
    pub fn finish_run(&mut self) -> RunSummary {
        let new_record = self.score > self.high_score;
        if new_record {
            self.high_score = self.score;
            self.store.set_high_score(self.score);
            info!("New high score: {}", self.score);
        }
        RunSummary {
            score: self.score,
            high_score: self.high_score,
            new_record,
        }
    }
}

impl std::fmt::Debug for ScoreTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreTracker")
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .finish_non_exhaustive()
    }
}
