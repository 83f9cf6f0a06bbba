//! Format ranking engine
//!
//! Turns the raw format list from the extractor into a deterministically ordered,
//! display-ready sequence: invalid records dropped, duplicates removed, video-capable
//! formats ahead of audio-only ones, each group sorted by the requested key.

use crate::ranker::label::render_label;
use crate::ranker::models::{FormatDescriptor, RankError, RankedEntry, SortKey};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Rank a set of format descriptors for display.
///
/// Every valid input descriptor appears exactly once in the output. Within each
/// group the sort is descending on the requested attribute; descriptors missing
/// that attribute go to the end of their group, and ties fall back to `id`
/// ascending so repeated queries render identically.
pub fn rank(
    descriptors: Vec<FormatDescriptor>,
    sort_key: SortKey,
) -> Result<Vec<RankedEntry>, RankError> {
    let mut seen = HashSet::new();
    let valid: Vec<FormatDescriptor> = descriptors
        .into_iter()
        .filter(|d| d.is_valid())
        .filter(|d| seen.insert(d.id.clone()))
        .collect();

    if valid.is_empty() {
        return Err(RankError::EmptyInput);
    }

    let (mut video, mut audio): (Vec<_>, Vec<_>) =
        valid.into_iter().partition(|d| !d.is_audio_only());

    video.sort_by(|a, b| compare_by(a, b, sort_key));
    audio.sort_by(|a, b| compare_by(a, b, sort_key));

    Ok(video
        .into_iter()
        .chain(audio)
        .map(|descriptor| {
            let label = render_label(&descriptor);
            RankedEntry { descriptor, label }
        })
        .collect())
}

/// Descending on the sort attribute, missing values last, then `id` ascending.
fn compare_by(a: &FormatDescriptor, b: &FormatDescriptor, sort_key: SortKey) -> Ordering {
    let by_attribute = match sort_key {
        SortKey::Resolution => cmp_desc(a.resolution, b.resolution),
        SortKey::FileSize => cmp_desc(a.file_size, b.file_size),
        SortKey::TotalBitrate => cmp_desc_f64(a.total_bitrate, b.total_bitrate),
        SortKey::Fps => cmp_desc_f64(a.fps, b.fps),
    };
    by_attribute.then_with(|| a.id.cmp(&b.id))
}

fn cmp_desc<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_desc_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
