//! Error handling for vidpick

use crate::ranker::RankError;
use thiserror::Error;

/// Main error type for vidpick
#[derive(Debug, Error)]
pub enum VidpickError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("failed to extract video info: {0}")]
    ExtractionError(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("download process failed: {0}")]
    InvocationError(String),

    #[error(transparent)]
    Ranking(#[from] RankError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
