//! Data structures for format ranking

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One downloadable variant of a video, as reported by the metadata extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatDescriptor {
    /// Opaque token identifying the format; unique within one query result.
    pub id: String,
    /// File container / extension ("mp4", "m4a", ...).
    pub container: String,
    pub has_video: bool,
    pub has_audio: bool,
    /// (width, height); absent for audio-only formats.
    pub resolution: Option<(u32, u32)>,
    pub fps: Option<f64>,
    /// Size in bytes; may be an estimate, absent when unknown.
    pub file_size: Option<u64>,
    /// Total bitrate in bits per second.
    pub total_bitrate: Option<f64>,
}

impl FormatDescriptor {
    /// A descriptor carrying neither stream is invalid and gets discarded.
    pub fn is_valid(&self) -> bool {
        self.has_video || self.has_audio
    }

    pub fn is_audio_only(&self) -> bool {
        !self.has_video && self.has_audio
    }
}

/// User-selected attribute used to order formats for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Resolution,
    FileSize,
    #[serde(rename = "bitrate")]
    TotalBitrate,
    Fps,
}

impl SortKey {
    /// Accepted tokens for CLI/config input, one per variant.
    pub const TOKENS: [&'static str; 4] = ["resolution", "filesize", "bitrate", "fps"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Resolution => "resolution",
            SortKey::FileSize => "filesize",
            SortKey::TotalBitrate => "bitrate",
            SortKey::Fps => "fps",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resolution" | "res" => Ok(SortKey::Resolution),
            "filesize" | "size" => Ok(SortKey::FileSize),
            "bitrate" | "tbr" => Ok(SortKey::TotalBitrate),
            "fps" => Ok(SortKey::Fps),
            other => Err(RankError::InvalidSortKey(other.to_string())),
        }
    }
}

/// A descriptor paired with its display label, ready for presentation.
///
/// Built fresh per query and discarded once the user picks or cancels.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub descriptor: FormatDescriptor,
    pub label: String,
}

/// Errors from the ranking core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("no downloadable formats found")]
    EmptyInput,

    #[error("unrecognized sort key: {0}")]
    InvalidSortKey(String),
}
