//! TUI mode for browsing the curriculum directory.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lets users filter, group, and read curricula.

use std::io::{self, Write};

use bubbletea_rs::Program;

use curricula::tui::{DirectoryApp, StartupData, set_initial_directory};
use curricula::{Catalogue, CurriculaConfig, CurriculaError};

/// Runs the TUI over `catalogue`.
///
/// # Errors
///
/// Returns an error if:
/// - The initial selection or view name is invalid
/// - The TUI fails to initialise
pub async fn run(config: &CurriculaConfig, catalogue: Catalogue) -> Result<(), CurriculaError> {
    let initial = config.initial_selection()?;
    let view = config.view_mode()?;

    // Store startup data for Model::init() to retrieve. If already set, this
    // is a no-op and the existing data remains.
    if !set_initial_directory(StartupData {
        catalogue,
        initial,
        view,
    }) {
        tracing::debug!("startup data already set; reusing it");
    }

    run_tui().await.map_err(|error| CurriculaError::Tui {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `DirectoryApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // DirectoryApp::init() will retrieve data from module-level storage.
    let program = Program::<DirectoryApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
