//! yt-dlp wrapper for video metadata extraction
//!
//! Queries yt-dlp for available formats without downloading anything. Works with
//! a binary shipped next to the executable or a system-installed yt-dlp.

use crate::extractor::models::VideoInfo;
use crate::extractor::traits::Extractor;
use crate::utils::error::VidpickError;
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Metadata extractor backed by the yt-dlp binary
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Initialize the extractor and verify yt-dlp availability.
    ///
    /// Search order:
    /// 1. Next to the current executable
    /// 2. System PATH
    /// 3. Common installation paths (Homebrew, ~/.local/bin, etc.)
    pub fn new() -> Result<Self> {
        let ytdlp_path = match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                error!("yt-dlp not found anywhere!");
                return Err(VidpickError::YtDlpNotFound.into());
            }
        };

        Ok(Self { ytdlp_path })
    }

    /// Path of the yt-dlp binary in use
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "yt-dlp"
    }

    /// Extract video information without downloading.
    /// Uses: yt-dlp --dump-json --no-download --no-playlist
    async fn extract_info(&self, url: &str) -> Result<VideoInfo> {
        debug!("Extracting video info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--no-warnings")
            .arg("--no-playlist")
            .arg(url)
            .output()
            .await
            .map_err(VidpickError::IoError)?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp extraction failed: {}", error_msg);
            return Err(VidpickError::ExtractionError(error_msg.trim().to_string()).into());
        }

        let json_str = String::from_utf8(output.stdout)?;
        let video_info: VideoInfo =
            serde_json::from_str(&json_str).map_err(VidpickError::SerializationError)?;

        debug!(
            "Extracted \"{}\" with {} formats",
            video_info.title,
            video_info.formats.len()
        );
        Ok(video_info)
    }
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find the yt-dlp binary, preferring a copy shipped next to the executable
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(local) = find_next_to_exe() {
        info!("Using yt-dlp next to executable: {:?}", local);
        return Some(local);
    }

    if let Some(system) = find_in_path() {
        info!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        info!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found anywhere!");
    None
}

/// Check for yt-dlp placed alongside the current executable
fn find_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;

    for name in ["yt-dlp", "yt-dlp.exe"] {
        let candidate = exe_dir.join(name);
        if candidate.exists() && is_executable(&candidate) {
            return Some(candidate);
        }
    }

    None
}

/// Find yt-dlp in system PATH
fn find_in_path() -> Option<PathBuf> {
    which::which("yt-dlp").ok().filter(|path| path.exists())
}

/// Find yt-dlp in common installation paths
fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel) / manual installs
        "/usr/local/bin/yt-dlp",
        // System
        "/usr/bin/yt-dlp",
        // pip user install
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = if let Some(rest) = path_str.strip_prefix("~/") {
            dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(path_str))
        } else {
            PathBuf::from(path_str)
        };

        if expanded.exists() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

/// Check if a file is executable
fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            return metadata.permissions().mode() & 0o111 != 0;
        }
        false
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}
