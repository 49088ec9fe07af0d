//! Curricula CLI entrypoint: browse or export the curriculum directory.

use std::io::{self, Write};
use std::process::ExitCode;

use curricula::catalogue::load_catalogue;
use curricula::telemetry::{TelemetryEvent, sink_for};
use curricula::{CurriculaConfig, CurriculaError, OperationMode};
use ortho_config::OrthoConfig;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CurriculaError> {
    let config = load_config()?;
    let mode = config.operation_mode();
    logging::init(&config, mode)?;

    let telemetry = sink_for(config.telemetry);
    let source = config.catalogue_source();
    let catalogue = load_catalogue(source.as_ref())?;
    telemetry.record(TelemetryEvent::CatalogueLoaded {
        source: source.describe(),
        count: catalogue.len(),
    });

    match mode {
        OperationMode::Browse => cli::browse::run(&config, catalogue).await,
        OperationMode::Export => cli::export::run(&config, catalogue, telemetry.as_ref()),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CurriculaError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<CurriculaConfig, CurriculaError> {
    CurriculaConfig::load().map_err(|error| CurriculaError::Configuration {
        message: error.to_string(),
    })
}
