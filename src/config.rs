use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Microcopy and output placement for one language edition of the page.
/// The two built-in locales ([`Locale::english`] and [`Locale::chinese`])
/// cover the shipped editions; arbitrary locales can be loaded from a YAML
/// file via [`Locale::from_file`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Locale {
    /// Subdirectory of the release directory that receives the page and
    /// the installer scripts, or `None` for the release directory itself.
    #[serde(default)]
    pub subdirectory: Option<PathBuf>,

    /// Label for plain 64-bit builds.
    pub sixty_four_bit: String,

    /// Sentinel for values that could not be computed, e.g. the size of a
    /// file that cannot be stat'ed.
    pub unknown: String,

    /// Description of the Unix shell installer, used in log output.
    pub install_sh: String,

    /// Description of the PowerShell installer, used in log output.
    pub install_ps1: String,

    /// Description of the batch-file installer, used in log output.
    pub install_bat: String,
}

impl Locale {
    /// The default English edition, written to the top-level directory.
    pub fn english() -> Locale {
        Locale {
            subdirectory: None,
            sixty_four_bit: "64-bit".to_owned(),
            unknown: "Unknown".to_owned(),
            install_sh: "Unix/Linux/macOS installation script".to_owned(),
            install_ps1: "Windows PowerShell installation script".to_owned(),
            install_bat: "Windows Batch installation script".to_owned(),
        }
    }

    /// The Chinese edition, written to the `zh` subdirectory.
    pub fn chinese() -> Locale {
        Locale {
            subdirectory: Some(PathBuf::from("zh")),
            sixty_four_bit: "64位".to_owned(),
            unknown: "未知".to_owned(),
            install_sh: "Unix/Linux/macOS 安装脚本".to_owned(),
            install_ps1: "Windows PowerShell 安装脚本".to_owned(),
            install_bat: "Windows 批处理安装脚本".to_owned(),
        }
    }

    /// Looks up a built-in locale by its command-line name.
    pub fn builtin(name: &str) -> Option<Locale> {
        match name {
            "en" => Some(Locale::english()),
            "zh" => Some(Locale::chinese()),
            _ => None,
        }
    }

    /// Loads a locale definition from a YAML file.
    pub fn from_file(path: &Path) -> Result<Locale> {
        let file = match File::open(path) {
            Err(e) => {
                return Err(anyhow!(
                    "Opening locale file `{}`: {}",
                    path.display(),
                    e
                ))
            }
            Ok(file) => file,
        };
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Descriptions for the installer scripts, in the same order as
    /// [`crate::scripts::INSTALLER_SCRIPTS`].
    pub fn script_descriptions(&self) -> [&str; 3] {
        [&self.install_sh, &self.install_ps1, &self.install_bat]
    }
}

/// Fully-resolved invocation parameters for one page build.
pub struct Config {
    /// Path to the HTML page template.
    pub template: PathBuf,

    /// The release tag, e.g. `v1.2.3`.
    pub tag_name: String,

    /// The human-readable release name.
    pub release_name: String,

    /// The directory scanned for artifacts and checksum sidecars. This
    /// is also the output root; it is never implied by the working
    /// directory.
    pub release_directory: PathBuf,

    /// The directory holding the installer scripts to copy next to the
    /// generated page.
    pub scripts_directory: PathBuf,

    /// Microcopy and output placement for the page.
    pub locale: Locale,
}

/// The directory holding the running executable. The installer scripts
/// are expected to live next to the generator unless the caller overrides
/// the location.
pub fn default_scripts_directory() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_owned()),
        None => Err(anyhow!(
            "Executable path `{}` has no parent directory",
            exe.display()
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_names() {
        assert_eq!(Some(Locale::english()), Locale::builtin("en"));
        assert_eq!(Some(Locale::chinese()), Locale::builtin("zh"));
        assert_eq!(None, Locale::builtin("eo"));
    }

    #[test]
    fn test_chinese_writes_to_subdirectory() {
        assert_eq!(Some(PathBuf::from("zh")), Locale::chinese().subdirectory);
        assert_eq!(None, Locale::english().subdirectory);
    }

    #[test]
    fn test_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            concat!(
                "subdirectory: fr\n",
                "sixty_four_bit: 64-bit\n",
                "unknown: Inconnu\n",
                "install_sh: Script d'installation Unix/Linux/macOS\n",
                "install_ps1: Script d'installation Windows PowerShell\n",
                "install_bat: Script d'installation Windows Batch\n",
            )
            .as_bytes(),
        )?;
        let locale = Locale::from_file(file.path())?;
        assert_eq!(Some(PathBuf::from("fr")), locale.subdirectory);
        assert_eq!("Inconnu", locale.unknown);
        Ok(())
    }

    #[test]
    fn test_from_file_subdirectory_defaults_to_none() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            concat!(
                "sixty_four_bit: 64-bit\n",
                "unknown: Unknown\n",
                "install_sh: a\n",
                "install_ps1: b\n",
                "install_bat: c\n",
            )
            .as_bytes(),
        )?;
        assert_eq!(None, Locale::from_file(file.path())?.subdirectory);
        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Locale::from_file(Path::new("/no/such/locale.yaml")).is_err());
    }
}
