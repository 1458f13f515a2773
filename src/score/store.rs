//! High score persistence behind a narrow get/set interface.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::DataLoadError;

/// Where the best score survives between runs.
pub trait HighScoreStore: Send + Sync {
    fn get_high_score(&self) -> u32;
    fn set_high_score(&mut self, score: u32);
}

/// Keeps the high score for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    high_score: u32,
}

impl MemoryHighScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn get_high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, score: u32) {
        self.high_score = score;
    }
}

/// On-disk layout of the high score file.
#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Persists the high score as a small RON file.
#[derive(Debug, Clone)]
pub struct RonHighScoreStore {
    path: PathBuf,
}

impl RonHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored value; a missing file is reported as `FileNotFound`.
    pub fn load(&self) -> Result<u32, DataLoadError> {
        let display = self.path.display().to_string();
        if !self.path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;

        let record: HighScoreRecord =
            ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
                path: display,
                details: e.to_string(),
            })?;

        Ok(record.high_score)
    }

    /// Write the value, creating the parent directory if needed.
    pub fn save(&self, high_score: u32) -> Result<(), DataLoadError> {
        let display = self.path.display().to_string();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DataLoadError::WriteError {
                path: display.clone(),
                details: e.to_string(),
            })?;
        }

        let contents = ron::ser::to_string_pretty(
            &HighScoreRecord { high_score },
            ron::ser::PrettyConfig::default(),
        )
        .map_err(|e| DataLoadError::SerializeError {
            details: e.to_string(),
        })?;

        fs::write(&self.path, contents).map_err(|e| DataLoadError::WriteError {
            path: display,
            details: e.to_string(),
        })
    }
}

impl HighScoreStore for RonHighScoreStore {
    fn get_high_score(&self) -> u32 {
        match self.load() {
            Ok(score) => score,
            Err(DataLoadError::FileNotFound(_)) => 0,
            Err(e) => {
                warn!("{}. Treating high score as 0.", e);
                0
            }
        }
    }

    fn set_high_score(&mut self, score: u32) {
        match self.save(score) {
            Ok(()) => info!("Saved high score {} to {}", score, self.path.display()),
            Err(e) => error!("{}", e),
        }
    }
}
