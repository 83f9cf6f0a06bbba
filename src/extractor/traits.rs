use crate::extractor::models::VideoInfo;
use crate::ranker::FormatDescriptor;
use anyhow::Result;
use async_trait::async_trait;

/// Seam between the CLI and the metadata-extraction backend.
///
/// The ranker never touches the network or spawns processes; whatever produces
/// the format list lives behind this trait, so tests can feed canned metadata.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g. "yt-dlp")
    fn id(&self) -> &'static str;

    /// Extracts metadata for a single video URL
    async fn extract_info(&self, url: &str) -> Result<VideoInfo>;

    /// Gets format descriptors for a URL (calls extract_info internally)
    async fn get_formats(&self, url: &str) -> Result<Vec<FormatDescriptor>> {
        let info = self.extract_info(url).await?;
        Ok(info.formats.iter().map(|f| f.to_descriptor()).collect())
    }
}
