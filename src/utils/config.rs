//! Application configuration

use crate::ranker::SortKey;
use crate::utils::platform;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Persisted user settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Where downloads land
    pub download_dir: PathBuf,

    /// Default attribute used to order the format list
    pub sort_key: SortKey,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            download_dir: platform::default_download_dir(),
            sort_key: SortKey::default(),
        }
    }
}

impl AppSettings {
    /// Location of the config file
    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.json")
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable. A broken config must never take the program down.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Ignoring malformed config {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist settings as pretty-printed JSON, creating the parent directory
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }

    /// The download directory to actually use. A configured directory that no
    /// longer exists falls back to the platform default, like the original
    /// re-checked its persisted path on every query.
    pub fn effective_download_dir(&self) -> PathBuf {
        if self.download_dir.is_dir() {
            self.download_dir.clone()
        } else {
            warn!(
                "Configured download dir {:?} does not exist, using default",
                self.download_dir
            );
            platform::default_download_dir()
        }
    }
}
