//! Sources that produce a [`Catalogue`].
//!
//! The bundled catalogue is compiled into the binary; a file source lets
//! users point the directory at their own list without rebuilding.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::{Catalogue, CatalogueError};

/// Catalogue bundled with the crate at build time.
const BUNDLED_CATALOGUE: &str = include_str!("../../data/curricula.json");

/// Anything that can produce a validated catalogue.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogueSource {
    /// Loads and validates the catalogue.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] when the data cannot be read, parsed, or
    /// validated.
    fn load(&self) -> Result<Catalogue, CatalogueError>;

    /// Describes where the catalogue comes from, for logs and telemetry.
    fn describe(&self) -> String;
}

/// The catalogue compiled into the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalogue;

impl CatalogueSource for EmbeddedCatalogue {
    fn load(&self) -> Result<Catalogue, CatalogueError> {
        Catalogue::from_json(BUNDLED_CATALOGUE)
    }

    fn describe(&self) -> String {
        "bundled".to_owned()
    }
}

/// A JSON catalogue read from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCatalogue {
    path: Utf8PathBuf,
}

impl FileCatalogue {
    /// Creates a source for the catalogue at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the catalogue path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read(&self) -> Result<String, CatalogueError> {
        let io_error = |error: std::io::Error| CatalogueError::Io {
            path: self.path.to_string(),
            message: error.to_string(),
        };

        let file_name = self.path.file_name().ok_or_else(|| CatalogueError::Io {
            path: self.path.to_string(),
            message: "path has no file name".to_owned(),
        })?;
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        dir.read_to_string(file_name).map_err(io_error)
    }
}

impl CatalogueSource for FileCatalogue {
    fn load(&self) -> Result<Catalogue, CatalogueError> {
        let contents = self.read()?;
        Catalogue::from_json(&contents)
    }

    fn describe(&self) -> String {
        self.path.to_string()
    }
}

/// Loads a catalogue from `source`, logging where it came from.
///
/// # Errors
///
/// Propagates the source's [`CatalogueError`].
pub fn load_catalogue(source: &dyn CatalogueSource) -> Result<Catalogue, CatalogueError> {
    let description = source.describe();
    let catalogue = source.load().inspect_err(|error| {
        tracing::warn!("failed to load catalogue from {description}: {error}");
    })?;
    tracing::debug!("loaded {} curricula from {description}", catalogue.len());
    Ok(catalogue)
}
