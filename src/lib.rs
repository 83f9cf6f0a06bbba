//! vidpick library
//!
//! Takes a video URL, queries yt-dlp for the available formats, ranks them into
//! a display-ready list, and hands the chosen format back to a spawned yt-dlp
//! process for the actual download.

pub mod cli;
pub mod extractor;
pub mod invoker;
pub mod ranker;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{Extractor, RawFormat, VideoInfo, YtDlpExtractor};
pub use invoker::{DownloadInvoker, DownloadRequest, YtDlpInvoker};
pub use ranker::{rank, FormatDescriptor, RankError, RankedEntry, SortKey};
pub use utils::{AppSettings, VidpickError};
