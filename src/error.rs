//! Application-level error type surfaced by the CLI.

use thiserror::Error;

use crate::catalogue::CatalogueError;
use crate::directory::SelectionError;

/// Errors surfaced while configuring, loading, exporting, or running the TUI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CurriculaError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the problem.
        message: String,
    },

    /// The curriculum catalogue failed to load or validate.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// The initial filter selection names an unknown value.
    #[error("invalid initial selection: {0}")]
    Selection(#[from] SelectionError),

    /// Rendering an export failed.
    #[error("export failed: {message}")]
    Export {
        /// Description of the failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the operating system.
        message: String,
    },

    /// The terminal UI failed to start or crashed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from the TUI runtime.
        message: String,
    },
}

impl From<std::io::Error> for CurriculaError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
