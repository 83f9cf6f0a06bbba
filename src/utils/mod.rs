//! Utility modules for error handling and configuration

pub mod config;
pub mod error;
pub mod platform;
pub mod validate;

// Re-export for convenience
pub use config::AppSettings;
pub use error::VidpickError;
pub use validate::is_valid_url;
