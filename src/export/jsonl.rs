//! JSONL (JSON Lines) formatter for exported curricula.
//!
//! Generates machine-readable output with one JSON object per visible
//! curriculum, in catalogue order.

use std::io::Write;

use crate::error::CurriculaError;

use super::model::ExportDocument;

/// Writes the visible curricula in JSONL format to the given writer.
///
/// Each curriculum is serialised as a single JSON object on its own line.
/// Absent optional fields are omitted.
///
/// # Errors
///
/// Returns [`CurriculaError::Io`] if writing to the output fails, or if
/// JSON serialisation fails.
pub fn write_jsonl<W: Write>(
    writer: &mut W,
    document: &ExportDocument,
) -> Result<(), CurriculaError> {
    for curriculum in &document.curricula {
        serde_json::to_writer(&mut *writer, curriculum).map_err(|e| CurriculaError::Io {
            message: format!("JSON serialization failed: {e}"),
        })?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
#[expect(
    clippy::indexing_slicing,
    reason = "test assertions use known JSON fields"
)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::catalogue::Topic;
    use crate::directory::InitialSelection;
    use crate::export::test_helpers::sample_state;

    fn write_jsonl_to_string(document: &ExportDocument) -> String {
        let mut buffer = Vec::new();
        write_jsonl(&mut buffer, document).expect("write should succeed");
        String::from_utf8(buffer).expect("valid UTF-8")
    }

    #[rstest]
    fn writes_one_line_per_visible_curriculum() {
        let document = ExportDocument::from_state(&sample_state());

        let output = write_jsonl_to_string(&document);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        let ids: Vec<String> = lines
            .iter()
            .map(|line| {
                let value: Value = serde_json::from_str(line).expect("valid JSON");
                value["id"].as_str().expect("id is a string").to_owned()
            })
            .collect();
        assert_eq!(ids, vec!["blocks", "algebra", "ai-lab", "robots"]);
    }

    #[rstest]
    fn serialises_bucket_and_tags() {
        let mut initial = InitialSelection::default();
        initial.selection.toggle_topic(Topic::Robotics);
        let document = ExportDocument::from_state(&sample_state().with_initial(initial));

        let output = write_jsonl_to_string(&document);
        let value: Value =
            serde_json::from_str(output.trim_end()).expect("single valid JSON line");

        assert_eq!(value["bucket"], "multi-grade");
        assert_eq!(value["grades"], serde_json::json!(["elementary", "middle"]));
        assert_eq!(value["topics"], serde_json::json!(["robotics"]));
        assert_eq!(value["is_free"], true);
    }

    #[rstest]
    fn omits_absent_optional_fields() {
        let document = ExportDocument::from_state(&sample_state());

        let output = write_jsonl_to_string(&document);

        assert!(!output.contains("standards_notes"));
        assert!(!output.contains("has_standards_alignment"));
    }

    #[rstest]
    fn writes_nothing_when_no_curricula_match() {
        let mut initial = InitialSelection::default();
        initial.selection.toggle_topic(Topic::Web);
        let document = ExportDocument::from_state(&sample_state().with_initial(initial));

        assert!(write_jsonl_to_string(&document).is_empty());
    }
}
