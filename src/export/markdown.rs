//! Markdown formatter for the filtered directory.
//!
//! Curricula are grouped under one heading per grade-band bucket. Buckets
//! with no visible curricula are omitted.

use std::io::Write;

use crate::error::CurriculaError;

use super::model::{ExportDocument, ExportedCurriculum, ExportedGroup};

/// Writes the directory in Markdown format to the given writer.
///
/// The output starts with the active filters and the results count,
/// followed by each non-empty bucket and its curriculum cards.
///
/// # Errors
///
/// Returns [`CurriculaError::Io`] if writing to the output fails.
pub fn write_markdown<W: Write>(
    writer: &mut W,
    document: &ExportDocument,
) -> Result<(), CurriculaError> {
    write_header(writer, document)?;

    if document.groups.is_empty() {
        writeln!(writer, "No curricula match the selected filters.")?;
        return Ok(());
    }

    for group in &document.groups {
        write_group(writer, group)?;
    }

    Ok(())
}

fn write_header<W: Write>(writer: &mut W, document: &ExportDocument) -> Result<(), CurriculaError> {
    let filters = if document.filters.is_empty() {
        "none".to_owned()
    } else {
        document.filters.join(", ")
    };
    writeln!(writer, "# Curriculum Directory")?;
    writeln!(writer)?;
    writeln!(writer, "**Filters:** {filters}")?;
    writeln!(writer)?;
    writeln!(writer, "{}", document.summary())?;
    writeln!(writer)?;
    Ok(())
}

fn write_group<W: Write>(writer: &mut W, group: &ExportedGroup) -> Result<(), CurriculaError> {
    writeln!(
        writer,
        "## {} {} ({})",
        group.icon,
        group.label,
        group.curricula.len()
    )?;
    writeln!(writer)?;
    for curriculum in &group.curricula {
        write_card(writer, curriculum)?;
    }
    Ok(())
}

/// Writes a single curriculum card.
fn write_card<W: Write>(
    writer: &mut W,
    curriculum: &ExportedCurriculum,
) -> Result<(), CurriculaError> {
    let cost = if curriculum.is_free { "Free" } else { "Not free" };
    writeln!(writer, "### {}", curriculum.name)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "*{}* · Grades {} · {cost}",
        curriculum.organization, curriculum.grade_range
    )?;
    writeln!(writer)?;
    writeln!(writer, "{}", curriculum.description)?;
    writeln!(writer)?;
    writeln!(writer, "- **Topics:** {}", curriculum.topic_labels.join(", "))?;
    if let Some(standards) = standards_line(curriculum) {
        writeln!(writer, "- **Standards:** {standards}")?;
    }
    writeln!(writer, "- **Link:** <{}>", curriculum.url)?;
    writeln!(writer)?;
    Ok(())
}

fn standards_line(curriculum: &ExportedCurriculum) -> Option<String> {
    let status = if curriculum.has_standards_alignment? {
        "aligned"
    } else {
        "not documented"
    };
    Some(match &curriculum.standards_notes {
        Some(notes) => format!("{status} ({notes})"),
        None => status.to_owned(),
    })
}
