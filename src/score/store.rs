//! High-score persistence
//!
//! A single integer stored as a JSON object, loaded once at startup and
//! rewritten whenever a round beats the previous best. The rest of the
//! crate never sees a persistence error: an unreadable file loads as zero
//! and a failed save is skipped while the in-memory score keeps counting.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk shape of the score file
#[derive(Debug, Serialize, Deserialize)]
struct ScoreRecord {
    high_score: u32,
}

/// File-backed store for the persisted high score
#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// File name used when no explicit path is given
    pub const DEFAULT_FILE: &'static str = "high_score.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted high score. A missing, unreadable, or malformed
    /// file counts as "no prior score".
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(high_score) => high_score,
            Err(err) => {
                debug!("no usable high score at {}: {:#}", self.path.display(), err);
                0
            }
        }
    }

    /// Overwrite the persisted high score. Failures are logged and the
    /// player keeps playing with the in-memory value.
    pub fn save(&self, high_score: u32) {
        if let Err(err) = self.try_save(high_score) {
            warn!("failed to persist high score to {}: {:#}", self.path.display(), err);
        }
    }

    fn try_load(&self) -> Result<u32> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let record: ScoreRecord = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(record.high_score)
    }

    fn try_save(&self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&ScoreRecord { high_score })
            .context("failed to serialize high score")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ScoreStore {
        ScoreStore::new(dir.path().join(ScoreStore::DEFAULT_FILE))
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(42);

        // A fresh handle on the same path sees the value
        let reopened = store_in(&dir);
        assert_eq!(reopened.load(), 42);
    }

    #[test]
    fn test_missing_file_loads_as_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), 0);
    }

    #[test]
    fn test_malformed_file_loads_as_zero() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json at all").unwrap();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(10);
        store.save(25);
        assert_eq!(store.load(), 25);
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(7);

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["high_score"], 7);
    }
}
