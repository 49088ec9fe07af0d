//! Tracing subscriber setup.
//!
//! Export mode logs to stderr, leaving stdout for the exported document.
//! The TUI owns the terminal, so browse mode logs only when a log file is
//! configured.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use curricula::{CurriculaConfig, CurriculaError, OperationMode};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-filter` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber for `mode`.
///
/// # Errors
///
/// Returns [`CurriculaError::Configuration`] for an invalid filter directive
/// and [`CurriculaError::Io`] when the log file cannot be opened.
pub fn init(config: &CurriculaConfig, mode: OperationMode) -> Result<(), CurriculaError> {
    let filter = build_filter(config.log_filter.as_deref())?;

    match (mode, config.log_file.as_deref()) {
        (_, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CurriculaError::Io {
                    message: format!("failed to open log file '{path}': {e}"),
                })?;
            tracing_subscriber::fmt()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        (OperationMode::Export, None) => {
            tracing_subscriber::fmt()
                .with_writer(io::stderr)
                .with_env_filter(filter)
                .with_target(false)
                .init();
        }
        (OperationMode::Browse, None) => {}
    }
    Ok(())
}

fn build_filter(configured: Option<&str>) -> Result<EnvFilter, CurriculaError> {
    let directives = configured
        .map(str::to_owned)
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
    EnvFilter::try_new(&directives).map_err(|e| CurriculaError::Configuration {
        message: format!("invalid log filter '{directives}': {e}"),
    })
}
