//! Download hand-off to yt-dlp
//!
//! Downloading itself is delegated to a spawned yt-dlp process; this module only
//! builds the invocation for a chosen format id and returns the child handle.

use crate::extractor::ytdlp::find_ytdlp;
use crate::utils::error::VidpickError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::process::{Child, Command as AsyncCommand};
use tracing::{debug, info, warn};

/// yt-dlp updates itself when the binary is at least this old.
const UPDATE_CHECK_INTERVAL: Duration = Duration::from_secs(10 * 24 * 60 * 60);

/// Everything needed to start one download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub format_id: String,
    pub download_dir: PathBuf,
}

/// Seam between the CLI and the process that performs the download.
pub trait DownloadInvoker: Send + Sync {
    /// Spawn the download process and hand back its child handle
    fn invoke(&self, request: &DownloadRequest) -> Result<Child>;
}

/// Production invoker spawning the yt-dlp binary
pub struct YtDlpInvoker {
    ytdlp_path: PathBuf,
}

impl YtDlpInvoker {
    pub fn new() -> Result<Self> {
        let ytdlp_path = find_ytdlp().ok_or(VidpickError::YtDlpNotFound)?;
        Ok(Self { ytdlp_path })
    }

    pub fn with_path(ytdlp_path: PathBuf) -> Self {
        Self { ytdlp_path }
    }

    /// Argument list for one download invocation.
    ///
    /// The chosen format is merged with the best audio stream; the bare format
    /// id is the fallback alternative when merging is not possible. Filenames
    /// are restricted and trimmed so results land safely on any filesystem.
    pub fn build_args(&self, request: &DownloadRequest) -> Vec<String> {
        let mut args = vec![
            request.url.clone(),
            "-f".to_string(),
            format!("{id}+ba/{id}", id = request.format_id),
            "-P".to_string(),
            request.download_dir.display().to_string(),
            "--windows-filenames".to_string(),
            "--restrict-filenames".to_string(),
            "--trim-filenames".to_string(),
            "50".to_string(),
            "--quiet".to_string(),
            "--progress".to_string(),
            "--no-mtime".to_string(),
            "--force-overwrites".to_string(),
            "--no-part".to_string(),
        ];

        if binary_is_stale(&self.ytdlp_path, UPDATE_CHECK_INTERVAL) {
            info!("yt-dlp binary is stale, requesting self-update");
            args.push("-U".to_string());
        }

        args
    }
}

impl DownloadInvoker for YtDlpInvoker {
    fn invoke(&self, request: &DownloadRequest) -> Result<Child> {
        let args = self.build_args(request);
        debug!("Spawning {:?} {:?}", self.ytdlp_path, args);

        // stdout/stderr stay inherited so yt-dlp's progress reaches the terminal
        let child = AsyncCommand::new(&self.ytdlp_path)
            .args(&args)
            .spawn()
            .map_err(|e| VidpickError::InvocationError(e.to_string()))?;

        Ok(child)
    }
}

/// True when the binary's mtime is older than `max_age`. Unreadable metadata
/// counts as fresh so a download never fails on the staleness check alone.
fn binary_is_stale(path: &Path, max_age: Duration) -> bool {
    let modified = match std::fs::metadata(path).and_then(|meta| meta.modified()) {
        Ok(modified) => modified,
        Err(e) => {
            warn!("Could not read mtime of {:?}: {}", path, e);
            return false;
        }
    };

    match SystemTime::now().duration_since(modified) {
        Ok(age) => age >= max_age,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn request() -> DownloadRequest {
        DownloadRequest {
            url: "https://example.com/watch?v=abc".to_string(),
            format_id: "137".to_string(),
            download_dir: PathBuf::from("/tmp/downloads"),
        }
    }

    #[test]
    fn test_build_args_layout() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let invoker = YtDlpInvoker::with_path(temp.path().to_path_buf());

        let args = invoker.build_args(&request());
        assert_eq!(args[0], "https://example.com/watch?v=abc");
        assert_eq!(args[1], "-f");
        assert_eq!(args[2], "137+ba/137");
        assert_eq!(args[3], "-P");
        assert_eq!(args[4], "/tmp/downloads");
        assert!(args.contains(&"--no-part".to_string()));
        assert!(args.contains(&"--restrict-filenames".to_string()));
    }

    #[test]
    fn test_fresh_binary_skips_update_flag() {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        temp.write_all(b"#!/bin/sh\n").unwrap();
        let invoker = YtDlpInvoker::with_path(temp.path().to_path_buf());

        let args = invoker.build_args(&request());
        assert!(!args.contains(&"-U".to_string()));
    }

    #[test]
    fn test_missing_binary_counts_as_fresh() {
        assert!(!binary_is_stale(
            Path::new("/nonexistent/yt-dlp"),
            Duration::from_secs(1)
        ));
    }

    #[test]
    fn test_zero_interval_marks_existing_binary_stale() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        assert!(binary_is_stale(temp.path(), Duration::ZERO));
    }
}
