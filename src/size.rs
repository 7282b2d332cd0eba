//! Human-readable size labels for download captions.

use crate::config::Locale;
use std::path::Path;

/// Units below the terminal `TB`, in ascending order.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// The size label for an artifact: either an exact formatted size, or a
/// fallback when the file could not be stat'ed. The fallback is its own
/// variant, not a pre-rendered string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SizeLabel {
    /// A formatted size, e.g. `1.5KB`.
    Exact(String),

    /// The file could not be stat'ed; rendered with the locale's unknown
    /// sentinel.
    Unknown,
}

impl SizeLabel {
    /// Stats `path` and produces its size label. A stat failure degrades
    /// to [`SizeLabel::Unknown`] rather than failing the page build.
    pub fn for_file(path: &Path) -> SizeLabel {
        match std::fs::metadata(path) {
            Ok(meta) => SizeLabel::Exact(format_bytes(meta.len())),
            Err(err) => {
                tracing::warn!("stat {}: {}", path.display(), err);
                SizeLabel::Unknown
            }
        }
    }

    /// Renders the label as presentable text.
    pub fn render<'a>(&'a self, locale: &'a Locale) -> &'a str {
        match self {
            SizeLabel::Exact(size) => size,
            SizeLabel::Unknown => &locale.unknown,
        }
    }
}

/// Formats a byte count scaled to the largest unit in B, KB, MB, GB, TB
/// for which the scaled value stays below 1024, with one decimal place
/// and no space before the unit: `1536` becomes `1.5KB`, `10` becomes
/// `10.0B`. TB is terminal, so values past GB are not capped.
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in &UNITS {
        if size < 1024.0 {
            return format!("{:.1}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}TB", size)
}
