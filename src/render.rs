//! HTML fragment rendering for platform cards and the checksum listing.
//!
//! Fragments are plain string concatenation: the values injected here are
//! file names and digests from the release directory plus trusted
//! microcopy, and the surrounding template expects unescaped markup.

use crate::arch::Arch;
use crate::artifact::{Artifact, Platform};
use crate::checksum::Checksum;
use crate::config::Locale;
use crate::size::SizeLabel;

/// Renders the card for one platform: a heading with the platform icon
/// and name, then one download link and caption per artifact. An empty
/// artifact set renders the empty string, omitting the card entirely.
pub fn platform_section(
    platform: &Platform,
    artifacts: &[Artifact],
    locale: &Locale,
) -> String {
    if artifacts.is_empty() {
        return String::new();
    }

    let mut section = format!(
        r#"                <div class="platform-card">
                    <h3><span class="platform-icon">{}</span>{}</h3>"#,
        platform.icon, platform.name
    );

    for artifact in artifacts {
        let arch = Arch::classify(&artifact.file_name);
        let size = SizeLabel::for_file(&artifact.path);
        section.push_str(&format!(
            r#"
                    <a href="{name}" class="download-link">{name}</a>
                    <div class="file-info">{arch} • {size}</div>"#,
            name = artifact.file_name,
            arch = arch.render(locale),
            size = size.render(locale),
        ));
    }

    section.push_str(
        r#"
                </div>"#,
    );

    section
}

/// Renders the checksum listing, one block per entry. An empty entry set
/// renders the empty string.
pub fn checksums_section(checksums: &[Checksum]) -> String {
    let mut section = String::new();
    for checksum in checksums {
        section.push_str(&format!(
            r#"
                <div class="checksum-item">
                    <div class="checksum-filename">{}</div>
                    <div class="checksum-hash">{}</div>
                </div>"#,
            checksum.file_name, checksum.digest
        ));
    }
    section
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::io::Result;
    use std::path::PathBuf;

    fn linux() -> &'static Platform {
        &crate::artifact::PLATFORMS[0]
    }

    #[test]
    fn test_platform_section_empty_set_omits_card() {
        assert_eq!(
            "",
            platform_section(linux(), &[], &Locale::english())
        );
    }

    #[test]
    fn test_platform_section_card() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("amo_linux_amd64");
        fs::write(&path, b"0123456789")?;
        let artifacts = vec![Artifact {
            file_name: "amo_linux_amd64".to_owned(),
            path,
        }];

        let section =
            platform_section(linux(), &artifacts, &Locale::english());
        assert!(section.contains(r#"<div class="platform-card">"#));
        assert!(section
            .contains(r#"<h3><span class="platform-icon">🐧</span>Linux</h3>"#));
        assert!(section.contains(
            r#"<a href="amo_linux_amd64" class="download-link">amo_linux_amd64</a>"#
        ));
        assert!(section.contains("64-bit • 10.0B"));
        assert!(section.trim_end().ends_with("</div>"));
        Ok(())
    }

    #[test]
    fn test_platform_section_unknown_size_sentinel() {
        let artifacts = vec![Artifact {
            file_name: "amo_linux_amd64".to_owned(),
            path: PathBuf::from("/no/such/artifact"),
        }];
        let section =
            platform_section(linux(), &artifacts, &Locale::chinese());
        assert!(section.contains("64位 • 未知"));
    }

    #[test]
    fn test_checksums_section() {
        let checksums = vec![Checksum {
            file_name: "amo_linux_amd64".to_owned(),
            digest: "abcd1234".to_owned(),
        }];
        let section = checksums_section(&checksums);
        assert!(section.contains(
            r#"<div class="checksum-filename">amo_linux_amd64</div>"#
        ));
        assert!(
            section.contains(r#"<div class="checksum-hash">abcd1234</div>"#)
        );
    }

    #[test]
    fn test_checksums_section_empty() {
        assert_eq!("", checksums_section(&[]));
    }
}
