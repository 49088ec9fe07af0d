//! Terminal User Interface for browsing the curriculum directory.
//!
//! This module provides an interactive TUI for filtering and browsing
//! curricula using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: [`app::DirectoryApp`], wrapping a
//!   [`DirectoryState`](crate::directory::DirectoryState) plus cursor, focus,
//!   and terminal size
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the startup data is handed over through module-level storage.
//! Call [`set_initial_directory`] before starting the program, and
//! `DirectoryApp::init()` will retrieve it.

use std::sync::OnceLock;

use crate::catalogue::Catalogue;
use crate::directory::{InitialSelection, ViewMode};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::DirectoryApp;

/// Everything `DirectoryApp::init()` needs to build its first state.
#[derive(Debug, Clone)]
pub struct StartupData {
    /// The validated catalogue to browse.
    pub catalogue: Catalogue,
    /// Filters and expanded buckets applied on start.
    pub initial: InitialSelection,
    /// Layout shown on start.
    pub view: ViewMode,
}

/// Startup data, set before the TUI program starts and read by
/// `DirectoryApp::init()`.
static STARTUP_DATA: OnceLock<StartupData> = OnceLock::new();

/// Sets the startup data for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the data was set, `false` if it was already set.
pub fn set_initial_directory(data: StartupData) -> bool {
    STARTUP_DATA.set(data).is_ok()
}

/// Gets a clone of the startup data, if it was set.
///
/// `OnceLock` does not support taking the value, so the data is cloned.
pub(crate) fn get_initial_directory() -> Option<StartupData> {
    STARTUP_DATA.get().cloned()
}
