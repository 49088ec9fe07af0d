//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.curricula.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `CURRICULA_CATALOGUE`, `CURRICULA_GRADES`, …
//! 4. **Command-line arguments** – `--catalogue`/`-c`, `--grades`/`-g`, …
//!
//! # Configuration File
//!
//! ```toml
//! catalogue = "district-curricula.json"
//! grades = "middle,high"
//! topics = "ai"
//! expand = "multi-grade"
//! view = "grouped"
//! log_file = "curricula.log"
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalogue::{CatalogueSource, EmbeddedCatalogue, FileCatalogue};
use crate::directory::{InitialSelection, SelectionError, ViewMode};
use crate::error::CurriculaError;
use crate::export::ExportFormat;

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Browse the directory in the interactive terminal UI.
    Browse,
    /// Write the filtered directory to a file or stdout and exit.
    Export,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// List values (`grades`, `topics`, `expand`) are comma separated so they
/// can travel through every layer as plain strings.
///
/// # Example
///
/// ```no_run
/// use curricula::CurriculaConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CurriculaConfig::load().expect("failed to load configuration");
/// let initial = config.initial_selection().expect("valid filters");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CURRICULA",
    discovery(
        dotfile_name = ".curricula.toml",
        config_file_name = "curricula.toml",
        app_name = "curricula"
    )
)]
pub struct CurriculaConfig {
    /// Path to a JSON catalogue replacing the bundled directory.
    ///
    /// Can be provided via:
    /// - CLI: `--catalogue <PATH>` or `-c <PATH>`
    /// - Environment: `CURRICULA_CATALOGUE`
    /// - Config file: `catalogue = "..."`
    #[ortho_config(cli_short = 'c')]
    pub catalogue: Option<String>,

    /// Comma-separated grade levels to pre-select.
    ///
    /// Can be provided via:
    /// - CLI: `--grades <LIST>` or `-g <LIST>`
    /// - Environment: `CURRICULA_GRADES`
    /// - Config file: `grades = "middle,high"`
    #[ortho_config(cli_short = 'g')]
    pub grades: Option<String>,

    /// Comma-separated topics to pre-select.
    ///
    /// Can be provided via:
    /// - CLI: `--topics <LIST>` or `-t <LIST>`
    /// - Environment: `CURRICULA_TOPICS`
    /// - Config file: `topics = "ai,data"`
    #[ortho_config(cli_short = 't')]
    pub topics: Option<String>,

    /// URL-style query selecting filters and expanded buckets, e.g.
    /// `grade=high&topic=ai&expand=high`.
    ///
    /// Can be provided via:
    /// - CLI: `--query <QUERY>` or `-q <QUERY>`
    /// - Environment: `CURRICULA_QUERY`
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Comma-separated buckets expanded on start.
    ///
    /// Can be provided via:
    /// - CLI: `--expand <LIST>` or `-x <LIST>`
    /// - Environment: `CURRICULA_EXPAND`
    /// - Config file: `expand = "high,multi-grade"`
    #[ortho_config(cli_short = 'x')]
    pub expand: Option<String>,

    /// Initial layout: `list` or `grouped`.
    ///
    /// Can be provided via:
    /// - CLI: `--view <VIEW>`
    /// - Environment: `CURRICULA_VIEW`
    /// - Config file: `view = "grouped"`
    #[ortho_config()]
    pub view: Option<String>,

    /// Export format (`markdown` or `jsonl`). Setting this skips the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--export <FORMAT>` or `-e <FORMAT>`
    /// - Environment: `CURRICULA_EXPORT`
    #[ortho_config(cli_short = 'e')]
    pub export: Option<String>,

    /// File to write the export to instead of stdout.
    ///
    /// Can be provided via:
    /// - CLI: `--output <PATH>` or `-o <PATH>`
    /// - Environment: `CURRICULA_OUTPUT`
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Jinja2 template used for the export instead of a built-in format.
    ///
    /// Can be provided via:
    /// - CLI: `--template <PATH>`
    /// - Environment: `CURRICULA_TEMPLATE`
    #[ortho_config()]
    pub template: Option<String>,

    /// Tracing filter directive, e.g. `curricula=debug`.
    ///
    /// Falls back to `RUST_LOG`, then to `warn`.
    #[ortho_config()]
    pub log_filter: Option<String>,

    /// File receiving log output. Without it the TUI writes no logs, since
    /// stderr shares the terminal.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// Emits telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl CurriculaConfig {
    /// Determines the operation mode.
    ///
    /// Returns `Export` when an export format or template is configured and
    /// `Browse` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.export.is_some() || self.template.is_some() {
            OperationMode::Export
        } else {
            OperationMode::Browse
        }
    }

    /// Returns the configured catalogue source.
    #[must_use]
    pub fn catalogue_source(&self) -> Box<dyn CatalogueSource> {
        match &self.catalogue {
            Some(path) => Box::new(FileCatalogue::new(Utf8PathBuf::from(path))),
            None => Box::new(EmbeddedCatalogue),
        }
    }

    /// Builds the initial selection from `query`, then adds `grades`,
    /// `topics`, and `expand`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when any value is unrecognised.
    pub fn initial_selection(&self) -> Result<InitialSelection, SelectionError> {
        let mut initial = match &self.query {
            Some(query) => InitialSelection::from_query(query)?,
            None => InitialSelection::default(),
        };
        if let Some(grades) = &self.grades {
            initial.add_grades(grades)?;
        }
        if let Some(topics) = &self.topics {
            initial.add_topics(topics)?;
        }
        if let Some(expand) = &self.expand {
            initial.add_expanded(expand)?;
        }
        Ok(initial)
    }

    /// Returns the configured view, defaulting to the list.
    ///
    /// # Errors
    ///
    /// Returns [`CurriculaError::Configuration`] for an unknown view name.
    pub fn view_mode(&self) -> Result<ViewMode, CurriculaError> {
        self.view.as_deref().map_or(Ok(ViewMode::default()), |view| {
            view.parse()
                .map_err(|message| CurriculaError::Configuration { message })
        })
    }

    /// Returns the built-in export format, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`CurriculaError::Configuration`] for an unknown format.
    pub fn export_format(&self) -> Result<Option<ExportFormat>, CurriculaError> {
        self.export.as_deref().map(str::parse).transpose()
    }
}
