//! JSON file store: one pretty-printed blob on disk.
//!
//! Writes go through a temp file and an atomic rename under an exclusive
//! lock, so a crash mid-save can never leave a torn blob behind.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::warn;

use crate::domain::EngineState;

use super::{StateStore, migrate};

/// File-backed state store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted in a data directory (`<dir>/state.json`)
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> EngineState {
        let mut state = if self.path.exists() {
            match std::fs::read_to_string(&self.path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(state) => state,
                    Err(e) => {
                        warn!(
                            "unparsable state blob at {}, starting fresh: {e}",
                            self.path.display()
                        );
                        EngineState::default()
                    }
                },
                Err(e) => {
                    warn!(
                        "failed to read state blob at {}, starting fresh: {e}",
                        self.path.display()
                    );
                    EngineState::default()
                }
            }
        } else {
            EngineState::default()
        };
        migrate(&mut state);
        state
    }

    fn save(&self, state: &EngineState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(state).with_context(|| "Failed to serialize state")?;

        // Exclusive lock keeps concurrent CLI invocations from interleaving
        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire state lock")?;

        // Write to temp file first (atomic write pattern)
        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write state content")?;
        temp_file
            .sync_all()
            .with_context(|| "Failed to sync state file")?;

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename state file: {}", self.path.display()))?;

        // Lock is released when lock_file is dropped
        Ok(())
    }
}
