//! Installer-script propagation.
//!
//! Every generated page ships with the installer scripts next to it. A
//! missing or uncopyable script degrades to a warning; the page itself
//! has already been written by the time the scripts are copied.

use crate::config::Locale;
use std::path::Path;

/// The installer scripts shipped next to every generated page, in the
/// fixed order they are processed.
pub const INSTALLER_SCRIPTS: [&str; 3] =
    ["install.sh", "install.ps1", "install.bat"];

/// Copies each installer script from `scripts_dir` into `output_dir`.
pub fn copy_installer_scripts(
    scripts_dir: &Path,
    output_dir: &Path,
    locale: &Locale,
) {
    let descriptions = locale.script_descriptions();
    for (script, description) in
        INSTALLER_SCRIPTS.iter().zip(descriptions.iter())
    {
        let source = scripts_dir.join(script);
        if !source.is_file() {
            tracing::warn!("{} not found at {}", script, source.display());
            continue;
        }
        match std::fs::copy(&source, output_dir.join(script)) {
            Ok(_) => tracing::info!("copied {} ({})", script, description),
            Err(err) => {
                tracing::warn!("copying {}: {}", script, err);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::io::Result;

    #[test]
    fn test_copies_present_scripts_and_skips_missing() -> Result<()> {
        let scripts = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        fs::write(scripts.path().join("install.sh"), b"#!/bin/sh\n")?;
        fs::write(scripts.path().join("install.bat"), b"@echo off\r\n")?;

        copy_installer_scripts(
            scripts.path(),
            output.path(),
            &Locale::english(),
        );

        assert_eq!(
            "#!/bin/sh\n",
            fs::read_to_string(output.path().join("install.sh"))?
        );
        assert!(output.path().join("install.bat").is_file());
        assert!(!output.path().join("install.ps1").exists());
        Ok(())
    }

    #[test]
    fn test_missing_scripts_directory_is_nonfatal() -> Result<()> {
        let output = tempfile::tempdir()?;
        copy_installer_scripts(
            Path::new("/no/such/scripts"),
            output.path(),
            &Locale::english(),
        );
        assert!(!output.path().join("install.sh").exists());
        Ok(())
    }
}
