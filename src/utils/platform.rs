//! Platform directories for vidpick
//!
//! Config lives under the platform config directory; downloads default to the
//! user's Downloads folder, matching the original behavior of saving next to
//! everything else the user downloads.

use std::path::PathBuf;

/// Configuration directory
/// - macOS: ~/Library/Application Support/vidpick
/// - Windows: %APPDATA%\vidpick
/// - Linux: ~/.config/vidpick
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vidpick")
}

/// Default download directory: ~/Downloads, falling back to the home directory
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_app_name() {
        assert!(config_dir().ends_with("vidpick"));
    }

    #[test]
    fn test_default_download_dir_is_not_empty() {
        assert!(!default_download_dir().as_os_str().is_empty());
    }
}
