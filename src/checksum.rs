//! Discovery and parsing of checksum sidecar files.
//!
//! Every artifact may ship with a sidecar named `<artifact>.sha256` whose
//! first whitespace-delimited token is the hex digest (the format written
//! by `sha256sum`). Sidecars without a corresponding artifact, and
//! sidecars that cannot be read or hold no token, are skipped; a bad
//! entry never aborts the rest of the listing.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Suffix that marks a checksum sidecar file.
pub const SHA256_SUFFIX: &str = ".sha256";

/// A checksum listing entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checksum {
    /// The artifact file name the digest belongs to.
    pub file_name: String,

    /// The hex digest from the sidecar.
    pub digest: String,
}

/// Enumerates the checksum sidecars directly under `dir` whose artifact
/// exists, sorted by file name.
pub fn scan(dir: &Path) -> Vec<Checksum> {
    let mut checksums = Vec::new();
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
        let sidecar_name = entry.file_name().to_string_lossy().into_owned();
        let file_name = match sidecar_name.strip_suffix(SHA256_SUFFIX) {
            Some(file_name) => file_name,
            None => continue,
        };
        if !dir.join(file_name).is_file() {
            continue;
        }
        if let Some(digest) = read_digest(entry.path()) {
            checksums.push(Checksum {
                file_name: file_name.to_owned(),
                digest,
            });
        }
    }
    checksums
}

/// Reads the digest token from a sidecar, or `None` when the sidecar is
/// unreadable or holds no token.
fn read_digest(path: &Path) -> Option<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!("reading {}: {}", path.display(), err);
            return None;
        }
    };
    match contents.split_whitespace().next() {
        Some(token) => Some(token.to_owned()),
        None => {
            tracing::warn!("checksum file {} holds no digest", path.display());
            None
        }
    }
}
