use std::path::PathBuf;

use tracing::warn;

/// Resolves the per-user data directory where SecMentor keeps its files.
pub struct PathManager;

impl PathManager {
    /// The data directory: `$XDG_DATA_HOME/secmentor` when set, otherwise
    /// `~/.local/share/secmentor`. Falls back to the current directory when
    /// neither variable resolves.
    pub fn data_dir() -> PathBuf {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            if !xdg.is_empty() {
                return PathBuf::from(xdg).join("secmentor");
            }
        }

        if let Ok(home) = std::env::var("HOME") {
            if !home.is_empty() {
                return PathBuf::from(home)
                    .join(".local")
                    .join("share")
                    .join("secmentor");
            }
        }

        warn!("No XDG_DATA_HOME or HOME set, storing data in current directory");
        match std::env::current_dir() {
            Ok(dir) => dir.join(".secmentor"),
            Err(_) => PathBuf::from(".secmentor"),
        }
    }

    /// Path of the persistent command history file.
    pub fn history_file() -> PathBuf {
        Self::data_dir().join("history.json")
    }
}
