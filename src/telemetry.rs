//! Application telemetry events and sinks.
//!
//! The directory runs locally and transmits nothing, but it can emit
//! lightweight structured events (`--telemetry`) to support debugging: which
//! catalogue was loaded and what each export produced.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A catalogue was loaded and validated.
    CatalogueLoaded {
        /// Description of the catalogue source (`bundled` or a path).
        source: String,
        /// Number of curricula in the catalogue.
        count: usize,
    },
    /// An export finished writing.
    ExportRendered {
        /// Export format name (`markdown`, `jsonl`, or `template`).
        format: String,
        /// Number of curricula written.
        count: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Returns the sink selected by the `telemetry` flag.
#[must_use]
pub fn sink_for(enabled: bool) -> Box<dyn TelemetrySink> {
    if enabled {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    }
}
