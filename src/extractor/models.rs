//! Data structures for yt-dlp metadata

use crate::ranker::FormatDescriptor;
use serde::{Deserialize, Serialize};

/// Video information as dumped by `yt-dlp --dump-json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    #[serde(alias = "webpage_url")]
    pub url: String,
    #[serde(default)]
    pub duration: Option<f64>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
    #[serde(default)]
    pub formats: Vec<RawFormat>,
    pub extractor: Option<String>,
}

/// One raw format record from yt-dlp, before mapping into a descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFormat {
    pub format_id: String,
    #[serde(default)]
    pub ext: Option<String>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<f64>,
    #[serde(default)]
    pub filesize: Option<u64>,
    /// yt-dlp's estimate when the exact size is unknown; emitted as a float
    #[serde(default)]
    pub filesize_approx: Option<f64>,
    /// Total bitrate in kbit/s
    pub tbr: Option<f64>,
    pub format_note: Option<String>,
    pub resolution: Option<String>,
}

impl RawFormat {
    /// Map a raw yt-dlp record into the ranker's descriptor.
    ///
    /// Stream presence follows yt-dlp's convention: a codec field of "none"
    /// means the stream is absent. Some extractors omit `vcodec` entirely but
    /// still report dimensions, so a width+height pair also counts as video.
    pub fn to_descriptor(&self) -> FormatDescriptor {
        let dimensions = self.width.zip(self.height);
        let has_video = codec_present(self.vcodec.as_deref()) || dimensions.is_some();
        let has_audio = codec_present(self.acodec.as_deref());

        let resolution = dimensions
            .or_else(|| self.resolution.as_deref().and_then(parse_resolution));

        FormatDescriptor {
            id: self.format_id.clone(),
            container: self
                .ext
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            has_video,
            has_audio,
            resolution,
            fps: self.fps,
            file_size: self
                .filesize
                .or_else(|| self.filesize_approx.map(|approx| approx as u64)),
            total_bitrate: self.tbr.map(|kbps| kbps * 1000.0),
        }
    }
}

fn codec_present(codec: Option<&str>) -> bool {
    codec.is_some_and(|c| !c.is_empty() && c != "none")
}

/// Parse a "1920x1080" resolution string; "audio only" and friends map to None.
fn parse_resolution(resolution: &str) -> Option<(u32, u32)> {
    let (width, height) = resolution.split_once('x')?;
    Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(format_id: &str) -> RawFormat {
        RawFormat {
            format_id: format_id.to_string(),
            ext: Some("mp4".to_string()),
            vcodec: None,
            acodec: None,
            width: None,
            height: None,
            fps: None,
            filesize: None,
            filesize_approx: None,
            tbr: None,
            format_note: None,
            resolution: None,
        }
    }

    #[test]
    fn test_video_with_audio_maps_both_streams() {
        let mut format = raw("22");
        format.vcodec = Some("avc1.64001F".to_string());
        format.acodec = Some("mp4a.40.2".to_string());
        format.width = Some(1280);
        format.height = Some(720);
        format.fps = Some(30.0);
        format.filesize = Some(10_000_000);
        format.tbr = Some(1200.5);

        let desc = format.to_descriptor();
        assert!(desc.has_video && desc.has_audio);
        assert_eq!(desc.id, "22");
        assert_eq!(desc.container, "mp4");
        assert_eq!(desc.resolution, Some((1280, 720)));
        assert_eq!(desc.file_size, Some(10_000_000));
        assert_eq!(desc.total_bitrate, Some(1_200_500.0));
    }

    #[test]
    fn test_audio_only_has_no_video() {
        let mut format = raw("140");
        format.ext = Some("m4a".to_string());
        format.vcodec = Some("none".to_string());
        format.acodec = Some("mp4a.40.2".to_string());

        let desc = format.to_descriptor();
        assert!(!desc.has_video);
        assert!(desc.has_audio);
        assert!(desc.is_audio_only());
        assert_eq!(desc.resolution, None);
    }

    #[test]
    fn test_storyboard_maps_to_invalid_descriptor() {
        let mut format = raw("sb0");
        format.vcodec = Some("none".to_string());
        format.acodec = Some("none".to_string());

        assert!(!format.to_descriptor().is_valid());
    }

    #[test]
    fn test_dimensions_count_as_video_when_vcodec_missing() {
        let mut format = raw("http-720");
        format.width = Some(1280);
        format.height = Some(720);

        let desc = format.to_descriptor();
        assert!(desc.has_video);
        assert_eq!(desc.resolution, Some((1280, 720)));
    }

    #[test]
    fn test_resolution_string_fallback() {
        let mut format = raw("hls-1");
        format.vcodec = Some("avc1".to_string());
        format.resolution = Some("1920x1080".to_string());

        assert_eq!(format.to_descriptor().resolution, Some((1920, 1080)));

        format.resolution = Some("audio only".to_string());
        assert_eq!(format.to_descriptor().resolution, None);
    }

    #[test]
    fn test_filesize_approx_fallback() {
        let mut format = raw("137");
        format.vcodec = Some("avc1".to_string());
        format.filesize_approx = Some(1234567.8);

        assert_eq!(format.to_descriptor().file_size, Some(1234567));
    }

    #[test]
    fn test_parse_dump_json_payload() {
        let payload = r#"{
            "id": "abc123",
            "title": "Sample",
            "webpage_url": "https://example.com/watch?v=abc123",
            "duration": 63.5,
            "thumbnail": null,
            "uploader": "someone",
            "extractor": "youtube",
            "formats": [
                {"format_id": "140", "ext": "m4a", "vcodec": "none", "acodec": "mp4a.40.2",
                 "width": null, "height": null, "fps": null, "tbr": 129.5,
                 "format_note": "medium", "resolution": "audio only"},
                {"format_id": "137", "ext": "mp4", "vcodec": "avc1.640028", "acodec": "none",
                 "width": 1920, "height": 1080, "fps": 23.98, "filesize": 55555555,
                 "tbr": 4400.0, "format_note": "1080p", "resolution": "1920x1080"}
            ]
        }"#;

        let info: VideoInfo = serde_json::from_str(payload).unwrap();
        assert_eq!(info.title, "Sample");
        assert_eq!(info.formats.len(), 2);
        assert!(info.formats[0].to_descriptor().is_audio_only());
        assert!(info.formats[1].to_descriptor().has_video);
    }
}
