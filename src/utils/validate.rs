//! URL validation

use url::Url;

/// True for absolute http(s) URLs with a host, the only inputs worth handing
/// to yt-dlp. Everything else gets rejected before any process is spawned.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input.trim()) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}
