//! Display labels for ranked formats

use crate::ranker::models::FormatDescriptor;

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;
const GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Render the one-line label shown next to a format in the result list.
///
/// Layout: container, resolution (or "audio"), fps when known, then file size
/// (or "size unknown"), separated by "┃".
pub fn render_label(descriptor: &FormatDescriptor) -> String {
    let mut parts = vec![descriptor.container.clone(), resolution_part(descriptor)];

    if let Some(fps) = descriptor.fps {
        parts.push(format_fps(fps));
    }

    parts.push(match descriptor.file_size {
        Some(bytes) => format_size(bytes),
        None => "size unknown".to_string(),
    });

    parts.join(" ┃ ")
}

fn resolution_part(descriptor: &FormatDescriptor) -> String {
    match descriptor.resolution {
        Some((width, height)) => format!("{}x{}", width, height),
        None if descriptor.is_audio_only() => "audio".to_string(),
        None => "video".to_string(),
    }
}

fn format_fps(fps: f64) -> String {
    if fps.fract() == 0.0 {
        format!("{:.0} fps", fps)
    } else {
        format!("{:.2} fps", fps)
    }
}

/// Format a byte count in human-readable form (B, KB, MB, GB).
pub fn format_size(bytes: u64) -> String {
    let bytes_f = bytes as f64;
    if bytes_f >= GB {
        format!("{:.2} GB", bytes_f / GB)
    } else if bytes_f >= MB {
        format!("{:.2} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}
