//! Exports the [`build_page`] function which stitches together the
//! high-level steps of generating the download page: loading the template
//! ([`crate::template`]), collecting artifacts and checksums
//! ([`crate::artifact`], [`crate::checksum`]), rendering the page
//! sections ([`crate::render`]), writing the output file, and copying the
//! installer scripts next to it ([`crate::scripts`]).

use crate::artifact::{self, PLATFORMS};
use crate::checksum;
use crate::config::Config;
use crate::render;
use crate::scripts::copy_installer_scripts;
use crate::template::Template;
use std::fmt;
use std::path::PathBuf;

/// Builds the download page from a [`Config`] and returns the path of the
/// written page.
///
/// Platform cards are rendered in the fixed order of
/// [`PLATFORMS`] (Linux, macOS, Windows); a platform with no artifacts
/// contributes nothing. The template is read before anything is written,
/// so a fatal template error leaves no partial output behind.
pub fn build_page(config: &Config) -> Result<PathBuf> {
    let template =
        Template::from_file(&config.template).map_err(|err| Error::OpenTemplateFile {
            path: config.template.clone(),
            err,
        })?;

    let mut download_sections = String::new();
    for platform in &PLATFORMS {
        let artifacts =
            artifact::scan(&config.release_directory, platform.pattern);
        download_sections.push_str(&render::platform_section(
            platform,
            &artifacts,
            &config.locale,
        ));
    }

    let checksums =
        render::checksums_section(&checksum::scan(&config.release_directory));

    let page = template.render(
        &config.tag_name,
        &config.release_name,
        &download_sections,
        &checksums,
    );

    let output_directory = match &config.locale.subdirectory {
        Some(subdirectory) => config.release_directory.join(subdirectory),
        None => config.release_directory.clone(),
    };
    std::fs::create_dir_all(&output_directory)?;

    let output_file = output_directory.join("index.html");
    std::fs::write(&output_file, page).map_err(|err| Error::WriteOutput {
        path: output_file.clone(),
        err,
    })?;
    tracing::info!("generated {}", output_file.display());

    copy_installer_scripts(
        &config.scripts_directory,
        &output_directory,
        &config.locale,
    );

    Ok(output_file)
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building the page. Everything here is fatal; the
/// recoverable per-file conditions (stat failures, bad checksum sidecars,
/// missing installer scripts) degrade inside their own modules instead of
/// surfacing as errors.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems while opening or reading the template
    /// file.
    OpenTemplateFile { path: PathBuf, err: std::io::Error },

    /// Returned for I/O problems while writing the rendered page.
    WriteOutput { path: PathBuf, err: std::io::Error },

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OpenTemplateFile { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::WriteOutput { path, err } => {
                write!(f, "Writing output file '{}': {}", path.display(), err)
            }
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenTemplateFile { path: _, err } => Some(err),
            Error::WriteOutput { path: _, err } => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
