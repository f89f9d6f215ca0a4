//! Persistent command history.
//!
//! A small JSON file under the user data directory holding the recent
//! commands, capped in size, with consecutive duplicates suppressed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::fs_manager::PathManager;

const MAX_HISTORY: usize = 1000;

/// On-disk format of the history file.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    commands: Vec<String>,
    last_updated: DateTime<Utc>,
}

/// Persistent command history with deduplication and a size cap.
pub struct CommandHistory {
    path: PathBuf,
    entries: Vec<String>,
}

impl CommandHistory {
    /// Open the history at the default location, loading existing entries.
    /// A missing or unreadable file starts an empty history.
    pub fn open_default() -> Self {
        Self::with_path(PathManager::history_file())
    }

    /// Open a history backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        let entries = Self::load(&path);
        Self { path, entries }
    }

    fn load(path: &Path) -> Vec<String> {
        let Ok(raw) = fs::read_to_string(path) else {
            return Vec::new();
        };

        match serde_json::from_str::<HistoryFile>(&raw) {
            Ok(file) => file.commands,
            Err(err) => {
                debug!("Ignoring unreadable history file: {}", err);
                Vec::new()
            }
        }
    }

    /// Append a command and persist. Consecutive duplicates are dropped.
    pub fn add(&mut self, command: &str) -> Result<(), AppError> {
        if self.entries.last().map(String::as_str) == Some(command) {
            return Ok(());
        }

        self.entries.push(command.to_string());
        if self.entries.len() > MAX_HISTORY {
            let excess = self.entries.len() - MAX_HISTORY;
            self.entries.drain(..excess);
        }
        self.save()
    }

    /// Write the history file, creating its parent directory if needed.
    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = HistoryFile {
            commands: self.entries.clone(),
            last_updated: Utc::now(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }

    /// Remove all entries and delete the backing file.
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.entries.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries containing the query, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&query_lower))
            .map(String::as_str)
            .collect()
    }
}
