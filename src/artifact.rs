//! Platform descriptors and release-artifact enumeration.

use crate::checksum::SHA256_SUFFIX;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file-name pattern of the form `<prefix>*<suffix>`, the only shape
/// the release naming scheme uses.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Pattern {
    /// Whether `file_name` matches. The length guard keeps the prefix and
    /// suffix from overlapping on the same characters.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.len() >= self.prefix.len() + self.suffix.len()
            && file_name.starts_with(self.prefix)
            && file_name.ends_with(self.suffix)
    }
}

/// One of the fixed platforms a release ships for.
pub struct Platform {
    /// Display name for the platform card heading.
    pub name: &'static str,

    /// Icon glyph shown before the name.
    pub icon: &'static str,

    /// File-name pattern selecting the platform's artifacts.
    pub pattern: Pattern,
}

/// The shipped platforms, in the order their cards appear on the page.
pub static PLATFORMS: [Platform; 3] = [
    Platform {
        name: "Linux",
        icon: "🐧",
        pattern: Pattern {
            prefix: "amo_linux_",
            suffix: "",
        },
    },
    Platform {
        name: "macOS",
        icon: "🍎",
        pattern: Pattern {
            prefix: "amo_darwin_",
            suffix: "",
        },
    },
    Platform {
        name: "Windows",
        icon: "🪟",
        pattern: Pattern {
            prefix: "amo_windows_",
            suffix: ".exe",
        },
    },
];

/// A release artifact eligible for listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Bare file name, used for the link target and label.
    pub file_name: String,

    /// Full path, used to stat the file for its size caption.
    pub path: PathBuf,
}

/// Enumerates the regular files directly under `dir` matching `pattern`,
/// excluding checksum sidecars, sorted by file name.
pub fn scan(dir: &Path, pattern: Pattern) -> Vec<Artifact> {
    let mut artifacts = Vec::new();
    let walk = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()));
    for result in walk {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("scanning {}: {}", dir.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.ends_with(SHA256_SUFFIX) || !pattern.matches(&file_name) {
            continue;
        }
        artifacts.push(Artifact {
            file_name,
            path: entry.into_path(),
        });
    }
    artifacts
}
