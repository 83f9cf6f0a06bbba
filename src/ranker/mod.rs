pub mod engine;
pub mod label;
pub mod models;

pub use engine::rank;
pub use models::{FormatDescriptor, RankError, RankedEntry, SortKey};
