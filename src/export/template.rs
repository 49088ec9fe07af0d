//! Template-driven directory export using Jinja2-compatible syntax.
//!
//! Users can supply a template file to control the structure of the
//! exported directory. Rendering uses `minijinja` with auto-escaping
//! disabled.
//!
//! # Available Variables
//!
//! - `generated_at`: export timestamp (RFC 3339)
//! - `filters`: labels of the active filters
//! - `summary`: the "Showing N of M curricula" read-out
//! - `curricula`: visible curricula in catalogue order
//! - `groups`: non-empty buckets, each with `key`, `label`, `icon`, and
//!   `curricula`
//!
//! Each curriculum exposes `id`, `name`, `organization`, `description`,
//! `grade_range`, `url`, `grades`, `topics`, `topic_labels`, `bucket`,
//! `is_free`, `has_standards_alignment`, and `standards_notes`.

use std::io::Write;

use chrono::Utc;
use minijinja::{Environment, context};

use crate::error::CurriculaError;

use super::model::ExportDocument;

/// Writes the directory using a user-provided Jinja2 template.
///
/// # Errors
///
/// Returns [`CurriculaError::Configuration`] if the template has syntax
/// errors, [`CurriculaError::Export`] if rendering fails, and
/// [`CurriculaError::Io`] if writing fails.
///
/// # Example Template
///
/// ```jinja2
/// {% for group in groups %}
/// ## {{ group.label }}
/// {% for c in group.curricula %}- {{ c.name }} ({{ c.url }})
/// {% endfor %}{% endfor %}
/// ```
pub fn write_template<W: Write>(
    writer: &mut W,
    document: &ExportDocument,
    template_content: &str,
) -> Result<(), CurriculaError> {
    let mut env = Environment::new();

    // Users control the output format.
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    env.add_template("export", template_content)
        .map_err(|e| CurriculaError::Configuration {
            message: format!("invalid template syntax: {e}"),
        })?;

    let ctx = context! {
        generated_at => Utc::now().to_rfc3339(),
        filters => &document.filters,
        summary => document.summary().to_string(),
        curricula => &document.curricula,
        groups => &document.groups,
    };

    let tmpl = env.get_template("export").map_err(|e| CurriculaError::Export {
        message: format!("failed to retrieve template: {e}"),
    })?;

    let output = tmpl.render(ctx).map_err(|e| CurriculaError::Export {
        message: format!("template rendering failed: {e}"),
    })?;

    writer
        .write_all(output.as_bytes())
        .map_err(|e| CurriculaError::Io {
            message: format!("failed to write template output: {e}"),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::catalogue::GradeLevel;
    use crate::directory::InitialSelection;
    use crate::export::test_helpers::{assert_contains, sample_state};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn render(document: &ExportDocument, template: &str) -> Result<String, CurriculaError> {
        let mut buffer = Vec::new();
        write_template(&mut buffer, document, template)?;
        String::from_utf8(buffer).map_err(|e| CurriculaError::Io {
            message: format!("invalid UTF-8 output: {e}"),
        })
    }

    #[rstest]
    #[case::name("name", "Curriculum blocks")]
    #[case::organization("organization", "Example Org")]
    #[case::url("url", "https://example.org/blocks")]
    #[case::bucket("bucket", "elementary")]
    #[case::topic_labels("topic_labels | join(', ')", "Computer Science")]
    fn substitutes_curriculum_fields(#[case] field: &str, #[case] expected: &str) -> TestResult {
        let document = ExportDocument::from_state(&sample_state());
        let template = format!("{{{{ curricula[0].{field} }}}}");

        let output = render(&document, &template)?;

        assert_eq!(output, expected);
        Ok(())
    }

    #[rstest]
    fn iterates_groups_in_display_order() -> TestResult {
        let document = ExportDocument::from_state(&sample_state());

        let output = render(
            &document,
            "{% for g in groups %}{{ g.key }}:{{ g.curricula | length }};{% endfor %}",
        )?;

        assert_eq!(output, "elementary:1;middle:1;high:1;multi-grade:1;");
        Ok(())
    }

    #[rstest]
    fn exposes_filters_and_summary() -> TestResult {
        let mut initial = InitialSelection::default();
        initial.selection.toggle_grade(GradeLevel::High);
        let document = ExportDocument::from_state(&sample_state().with_initial(initial));

        let output = render(&document, "{{ filters | join(', ') }} / {{ summary }}")?;

        assert_eq!(output, "High School (9-12) / Showing 1 of 4 curricula");
        Ok(())
    }

    #[rstest]
    fn includes_generated_timestamp() -> TestResult {
        let document = ExportDocument::from_state(&sample_state());

        let output = render(&document, "{{ generated_at }}")?;

        assert_contains(&output, "T")?;
        assert!(chrono::DateTime::parse_from_rfc3339(&output).is_ok());
        Ok(())
    }

    #[rstest]
    fn does_not_escape_html() -> TestResult {
        let document = ExportDocument::from_state(&sample_state());

        let output = render(&document, "<b>{{ curricula[0].url }}</b>")?;

        assert_eq!(output, "<b>https://example.org/blocks</b>");
        Ok(())
    }

    #[rstest]
    fn rejects_invalid_syntax() {
        let document = ExportDocument::from_state(&sample_state());

        let result = render(&document, "{% for c in curricula %}");

        assert!(
            matches!(result, Err(CurriculaError::Configuration { ref message }) if message.contains("invalid template syntax")),
            "expected syntax error, got {result:?}"
        );
    }
}
