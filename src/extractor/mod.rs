pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::{RawFormat, VideoInfo};
pub use traits::Extractor;
pub use ytdlp::YtDlpExtractor;
