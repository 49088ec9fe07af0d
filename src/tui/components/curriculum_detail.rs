//! Detail pane for the curriculum under the cursor.
//!
//! Shows the fields that do not fit on a list row: organisation, grade
//! range, topics, cost, standards alignment, description, and the link.

use unicode_width::UnicodeWidthStr;

use crate::catalogue::{Curriculum, Labels};

/// Placeholder message when the cursor is not on a curriculum.
const NO_SELECTION_PLACEHOLDER: &str = "(No curriculum selected)";

/// Context for rendering the detail pane.
#[derive(Debug, Clone, Copy)]
pub struct CurriculumDetailViewContext<'a> {
    /// The curriculum under the cursor, if any.
    pub selected: Option<&'a Curriculum>,
    /// Labels used for topic names.
    pub labels: &'a Labels,
    /// Maximum width for wrapping.
    pub max_width: usize,
    /// Maximum height in lines (0 = unlimited).
    pub max_height: usize,
}

/// Stateless renderer for the detail pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurriculumDetailComponent;

impl CurriculumDetailComponent {
    /// Renders the detail pane.
    ///
    /// Output is truncated to `max_height` lines when that is non-zero, with
    /// a trailing `...` marking the cut.
    #[must_use]
    pub fn view(ctx: &CurriculumDetailViewContext<'_>) -> String {
        let width = ctx.max_width.max(1);
        let mut lines = vec!["─".repeat(width)];

        match ctx.selected {
            None => lines.push(NO_SELECTION_PLACEHOLDER.to_owned()),
            Some(curriculum) => {
                lines.push(format!("{} ({})", curriculum.name, curriculum.organization));
                lines.push(Self::render_facts(curriculum, ctx.labels));
                if let Some(standards) = Self::render_standards(curriculum) {
                    lines.push(standards);
                }
                lines.extend(wrap_words(&curriculum.description, width));
                lines.push(curriculum.url.clone());
            }
        }

        if ctx.max_height > 0 && lines.len() > ctx.max_height {
            lines.truncate(ctx.max_height.saturating_sub(1));
            lines.push("...".to_owned());
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn render_facts(curriculum: &Curriculum, labels: &Labels) -> String {
        let topics: Vec<&str> = curriculum
            .topics
            .iter()
            .map(|topic| labels.topic(*topic))
            .collect();
        let cost = if curriculum.is_free { "Free" } else { "Not free" };
        format!(
            "Grades {} · {} · {cost}",
            curriculum.grade_range,
            topics.join(", ")
        )
    }

    fn render_standards(curriculum: &Curriculum) -> Option<String> {
        let aligned = curriculum.has_standards_alignment?;
        let status = if aligned {
            "Standards aligned"
        } else {
            "Standards alignment not documented"
        };
        Some(curriculum.standards_notes.as_deref().map_or_else(
            || status.to_owned(),
            |notes| format!("{status}: {notes}"),
        ))
    }
}

/// Wraps prose at word boundaries to `width` display columns.
///
/// Words wider than `width` are placed on their own line unbroken; the
/// viewport normaliser truncates them.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
