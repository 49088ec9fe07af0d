//! Directory export operation for structured output.
//!
//! The export applies the configured filters exactly as the TUI would and
//! writes the visible curricula, grouped by grade band, to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use curricula::directory::DirectoryState;
use curricula::export::{ExportDocument, ExportFormat, write_jsonl, write_markdown, write_template};
use curricula::telemetry::{TelemetryEvent, TelemetrySink};
use curricula::{Catalogue, CurriculaConfig, CurriculaError};

/// How the export is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Renderer {
    /// A built-in format.
    Format(ExportFormat),
    /// A user-supplied Jinja2 template.
    Template(String),
}

impl Renderer {
    fn name(&self) -> String {
        match self {
            Self::Format(format) => format.to_string(),
            Self::Template(_) => "template".to_owned(),
        }
    }
}

/// Exports the filtered directory.
///
/// # Errors
///
/// Returns an error if:
/// - The initial selection is invalid
/// - The export format is invalid or missing
/// - The template cannot be read or rendered
/// - Writing to the output fails
pub fn run(
    config: &CurriculaConfig,
    catalogue: Catalogue,
    telemetry: &dyn TelemetrySink,
) -> Result<(), CurriculaError> {
    let renderer = select_renderer(config)?;
    let state = DirectoryState::new(catalogue).with_initial(config.initial_selection()?);
    let document = ExportDocument::from_state(&state);

    write_output(config.output.as_deref(), &document, &renderer)?;

    tracing::info!(
        "exported {} curricula as {}",
        document.curricula.len(),
        renderer.name()
    );
    telemetry.record(TelemetryEvent::ExportRendered {
        format: renderer.name(),
        count: document.curricula.len(),
    });
    Ok(())
}

/// Picks the renderer, preferring a template over a built-in format.
fn select_renderer(config: &CurriculaConfig) -> Result<Renderer, CurriculaError> {
    if let Some(path) = &config.template {
        return read_template(Utf8Path::new(path)).map(Renderer::Template);
    }
    config
        .export_format()?
        .map(Renderer::Format)
        .ok_or_else(|| CurriculaError::Configuration {
            message: "export format is required (use --export markdown or --export jsonl)"
                .to_owned(),
        })
}

fn read_template(path: &Utf8Path) -> Result<String, CurriculaError> {
    let io_error = |error: io::Error| CurriculaError::Io {
        message: format!("failed to read template '{path}': {error}"),
    };
    let file_name = path.file_name().ok_or_else(|| CurriculaError::Io {
        message: format!("template path '{path}' has no file name"),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    dir.read_to_string(file_name).map_err(io_error)
}

/// Writes the document to the configured output destination.
fn write_output(
    output: Option<&str>,
    document: &ExportDocument,
    renderer: &Renderer,
) -> Result<(), CurriculaError> {
    if let Some(path) = output {
        let file = File::create(path).map_err(|e| CurriculaError::Io {
            message: format!("failed to create output file '{path}': {e}"),
        })?;
        let mut writer = BufWriter::new(file);
        render(&mut writer, document, renderer)?;
        writer.flush().map_err(|e| CurriculaError::Io {
            message: format!("failed to flush output file: {e}"),
        })
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        render(&mut writer, document, renderer)
    }
}

fn render<W: Write>(
    writer: &mut W,
    document: &ExportDocument,
    renderer: &Renderer,
) -> Result<(), CurriculaError> {
    match renderer {
        Renderer::Format(ExportFormat::Markdown) => write_markdown(writer, document),
        Renderer::Format(ExportFormat::Jsonl) => write_jsonl(writer, document),
        Renderer::Template(template) => write_template(writer, document, template),
    }
}
