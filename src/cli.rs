//! Command handlers behind the CLI dispatcher
//!
//! Handlers take the extractor and invoker seams as trait objects so tests can
//! drive them with canned collaborators.

use crate::extractor::Extractor;
use crate::invoker::{DownloadInvoker, DownloadRequest};
use crate::ranker::{self, RankedEntry, SortKey};
use crate::utils::{is_valid_url, AppSettings, VidpickError};
use anyhow::Result;
use path_absolutize::Absolutize;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Resolve the sort key for a query: explicit flag first, then the persisted
/// setting. An unrecognized token warns and falls back instead of failing.
pub fn resolve_sort_key(flag: Option<&str>, settings: &AppSettings) -> SortKey {
    match flag {
        Some(token) => match SortKey::from_str(token) {
            Ok(key) => key,
            Err(e) => {
                warn!(
                    "{} (expected one of {:?}), falling back to {}",
                    e,
                    SortKey::TOKENS,
                    settings.sort_key
                );
                settings.sort_key
            }
        },
        None => settings.sort_key,
    }
}

/// Query available formats for `url` and rank them for display.
pub async fn list_formats(
    extractor: &dyn Extractor,
    url: &str,
    sort_key: SortKey,
) -> Result<(String, Vec<RankedEntry>)> {
    if !is_valid_url(url) {
        return Err(VidpickError::InvalidUrl(url.to_string()).into());
    }

    let info = extractor.extract_info(url).await?;
    let descriptors = info.formats.iter().map(|f| f.to_descriptor()).collect();
    let entries = ranker::rank(descriptors, sort_key).map_err(VidpickError::from)?;

    Ok((info.title, entries))
}

/// Render the result list: title line, then one numbered line per entry with
/// the format id the user passes back to `download`.
pub fn render_listing(title: &str, entries: &[RankedEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    for (index, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<14} {}",
            index + 1,
            entry.descriptor.id,
            entry.label
        );
    }
    out
}

/// Hand a chosen format off to the download process and wait for it.
pub async fn download(
    invoker: &dyn DownloadInvoker,
    url: &str,
    format_id: &str,
    download_dir: PathBuf,
) -> Result<()> {
    if !is_valid_url(url) {
        return Err(VidpickError::InvalidUrl(url.to_string()).into());
    }

    let request = DownloadRequest {
        url: url.to_string(),
        format_id: format_id.to_string(),
        download_dir,
    };

    info!(
        "Downloading format {} of {} into {:?}",
        request.format_id, request.url, request.download_dir
    );

    let mut child = invoker.invoke(&request)?;
    let status = child.wait().await?;

    if !status.success() {
        return Err(VidpickError::InvocationError(format!("yt-dlp exited with {}", status)).into());
    }

    Ok(())
}

/// Apply `config` flag updates; returns whether anything changed.
///
/// User-supplied directories are absolutized before persisting. An invalid
/// sort token warns and leaves the persisted key untouched.
pub fn update_settings(
    settings: &mut AppSettings,
    download_dir: Option<PathBuf>,
    sort: Option<&str>,
) -> Result<bool> {
    let mut changed = false;

    if let Some(dir) = download_dir {
        settings.download_dir = dir.absolutize()?.to_path_buf();
        changed = true;
    }

    if let Some(token) = sort {
        match SortKey::from_str(token) {
            Ok(key) => {
                settings.sort_key = key;
                changed = true;
            }
            Err(e) => warn!(
                "{} (expected one of {:?}), keeping {}",
                e,
                SortKey::TOKENS,
                settings.sort_key
            ),
        }
    }

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranker::FormatDescriptor;

    fn settings_with(sort_key: SortKey) -> AppSettings {
        AppSettings {
            sort_key,
            ..AppSettings::default()
        }
    }

    #[test]
    fn test_resolve_sort_key_prefers_flag() {
        let settings = settings_with(SortKey::Fps);
        assert_eq!(resolve_sort_key(Some("size"), &settings), SortKey::FileSize);
    }

    #[test]
    fn test_resolve_sort_key_uses_setting_without_flag() {
        let settings = settings_with(SortKey::TotalBitrate);
        assert_eq!(resolve_sort_key(None, &settings), SortKey::TotalBitrate);
    }

    #[test]
    fn test_resolve_sort_key_falls_back_on_bad_token() {
        let settings = settings_with(SortKey::Fps);
        assert_eq!(resolve_sort_key(Some("loudness"), &settings), SortKey::Fps);
    }

    #[test]
    fn test_render_listing_numbers_entries() {
        let entry = RankedEntry {
            descriptor: FormatDescriptor {
                id: "137".to_string(),
                container: "mp4".to_string(),
                has_video: true,
                has_audio: false,
                resolution: Some((1920, 1080)),
                fps: None,
                file_size: None,
                total_bitrate: None,
            },
            label: "mp4 ┃ 1920x1080 ┃ size unknown".to_string(),
        };

        let listing = render_listing("Sample", &[entry]);
        let mut lines = listing.lines();
        assert_eq!(lines.next(), Some("Sample"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("  1. 137"));
        assert!(first.ends_with("mp4 ┃ 1920x1080 ┃ size unknown"));
    }

    #[test]
    fn test_update_settings_reports_changes() {
        let mut settings = AppSettings::default();
        assert!(!update_settings(&mut settings, None, None).unwrap());

        assert!(update_settings(&mut settings, None, Some("fps")).unwrap());
        assert_eq!(settings.sort_key, SortKey::Fps);

        // invalid token keeps the previous key and reports no change
        assert!(!update_settings(&mut settings, None, Some("loudness")).unwrap());
        assert_eq!(settings.sort_key, SortKey::Fps);
    }

    #[test]
    fn test_update_settings_absolutizes_dir() {
        let mut settings = AppSettings::default();
        assert!(update_settings(&mut settings, Some(PathBuf::from("downloads")), None).unwrap());
        assert!(settings.download_dir.is_absolute());
    }
}
