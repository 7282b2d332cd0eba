//! Architecture labels derived from artifact file names.

use crate::config::Locale;

/// The CPU/platform label shown under a download link. Artifact names
/// encode the platform and architecture as substrings, so classification
/// is a substring check rather than a parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arch {
    /// Plain 64-bit builds (Linux and Windows on amd64).
    SixtyFourBit,

    /// macOS on amd64.
    Intel,

    /// Linux on arm64.
    Arm64,

    /// macOS on arm64.
    AppleSilicon,

    /// 32-bit ARM, any platform.
    ArmV7,

    /// No recognized architecture/platform combination.
    Unknown,
}

impl Arch {
    /// Classifies a file name. The CPU substring is checked in order
    /// amd64, arm64, armv7, and within amd64/arm64 the platform substring
    /// in order linux, darwin, windows; the first matching rule wins. A
    /// CPU match with no recognized platform is [`Arch::Unknown`].
    pub fn classify(file_name: &str) -> Arch {
        if file_name.contains("amd64") {
            if file_name.contains("linux") {
                Arch::SixtyFourBit
            } else if file_name.contains("darwin") {
                Arch::Intel
            } else if file_name.contains("windows") {
                Arch::SixtyFourBit
            } else {
                Arch::Unknown
            }
        } else if file_name.contains("arm64") {
            if file_name.contains("linux") {
                Arch::Arm64
            } else if file_name.contains("darwin") {
                Arch::AppleSilicon
            } else {
                Arch::Unknown
            }
        } else if file_name.contains("armv7") {
            Arch::ArmV7
        } else {
            Arch::Unknown
        }
    }

    /// Renders the label as presentable text. The 64-bit and unknown
    /// labels vary by locale; the marketing names do not.
    pub fn render<'a>(&self, locale: &'a Locale) -> &'a str {
        match self {
            Arch::SixtyFourBit => &locale.sixty_four_bit,
            Arch::Intel => "Intel",
            Arch::Arm64 => "ARM64",
            Arch::AppleSilicon => "Apple Silicon",
            Arch::ArmV7 => "ARMv7",
            Arch::Unknown => &locale.unknown,
        }
    }
}
