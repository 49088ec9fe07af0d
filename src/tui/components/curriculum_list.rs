//! Results component rendering either a flat card list or grouped buckets.
//!
//! Both layouts are flattened into [`ResultRow`]s so a single cursor can
//! move through them. In the grouped layout every non-empty bucket
//! contributes a header row, followed by its members when expanded.

use crate::catalogue::Curriculum;
use crate::directory::BucketKey;

/// Default visible height for the results component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

const RESET: &str = "\x1b[0m";

/// One selectable row of the results area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultRow<'a> {
    /// A bucket header in the grouped layout.
    Header {
        /// Bucket identity.
        key: BucketKey,
        /// Number of visible members.
        count: usize,
        /// Whether the members are listed below.
        expanded: bool,
    },
    /// A curriculum card.
    Item(&'a Curriculum),
}

impl<'a> ResultRow<'a> {
    /// Returns the curriculum of an item row.
    #[must_use]
    pub const fn curriculum(&self) -> Option<&'a Curriculum> {
        match self {
            Self::Item(curriculum) => Some(curriculum),
            Self::Header { .. } => None,
        }
    }

    /// Returns the bucket of a header row.
    #[must_use]
    pub const fn bucket(&self) -> Option<BucketKey> {
        match self {
            Self::Header { key, .. } => Some(*key),
            Self::Item(_) => None,
        }
    }
}

/// Context for rendering the results view.
#[derive(Debug, Clone)]
pub struct CurriculumListViewContext<'a> {
    /// Rows to render.
    pub rows: &'a [ResultRow<'a>],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in lines.
    pub visible_height: usize,
    /// Whether items are indented under bucket headers.
    pub grouped: bool,
}

/// Component for displaying the visible curricula.
#[derive(Debug, Clone)]
pub struct CurriculumListComponent {
    visible_height: usize,
}

impl Default for CurriculumListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CurriculumListComponent {
    /// Creates a new results component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the rows within the visible window.
    #[must_use]
    pub fn view(&self, ctx: &CurriculumListViewContext<'_>) -> String {
        if ctx.rows.is_empty() {
            return "  No curricula match the selected filters.\n".to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for (index, row) in ctx
            .rows
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            output.push_str(&format_row(row, prefix, ctx.grouped));
            output.push('\n');
        }
        output
    }
}

fn format_row(row: &ResultRow<'_>, prefix: &str, grouped: bool) -> String {
    match row {
        ResultRow::Header {
            key,
            count,
            expanded,
        } => {
            let marker = if *expanded { "▾" } else { "▸" };
            format!(
                "{prefix} {}{marker} {} {} ({count}){RESET}",
                key.theme().ansi(),
                key.icon(),
                key.label()
            )
        }
        ResultRow::Item(curriculum) => {
            let indent = if grouped { "    " } else { "" };
            format!(
                "{prefix} {indent}{} · {} [{}]",
                curriculum.name, curriculum.organization, curriculum.grade_range
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalogue::test_support::curriculum;
    use crate::catalogue::{GradeLevel, Topic};
    use crate::tui::components::test_utils::strip_ansi_codes;

    #[fixture]
    fn curricula() -> Vec<Curriculum> {
        (1..=5)
            .map(|n| curriculum(&format!("c{n}"), &[GradeLevel::High], &[Topic::Cs]))
            .collect()
    }

    fn render(rows: &[ResultRow<'_>], cursor: usize, scroll: usize, height: usize) -> String {
        let ctx = CurriculumListViewContext {
            rows,
            cursor_position: cursor,
            scroll_offset: scroll,
            visible_height: height,
            grouped: false,
        };
        CurriculumListComponent::new().view(&ctx)
    }

    #[rstest]
    fn renders_placeholder_when_empty() {
        assert_eq!(
            render(&[], 0, 0, 10),
            "  No curricula match the selected filters.\n"
        );
    }

    #[rstest]
    fn marks_cursor_row(curricula: Vec<Curriculum>) {
        let rows: Vec<_> = curricula.iter().map(ResultRow::Item).collect();

        let output = render(&rows, 1, 0, 10);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines.get(1).is_some_and(|line| line.starts_with("> Curriculum c2")));
        assert!(lines.first().is_some_and(|line| line.starts_with("  Curriculum c1")));
    }

    #[rstest]
    fn renders_only_the_visible_window(curricula: Vec<Curriculum>) {
        let rows: Vec<_> = curricula.iter().map(ResultRow::Item).collect();

        let output = render(&rows, 3, 2, 2);

        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Curriculum c3"));
        assert!(output.contains("> Curriculum c4"));
        assert!(!output.contains("Curriculum c5"));
    }

    #[rstest]
    fn grouped_rows_show_header_and_indented_members(curricula: Vec<Curriculum>) {
        let rows = vec![
            ResultRow::Header {
                key: BucketKey::High,
                count: 1,
                expanded: true,
            },
            ResultRow::Item(curricula.first().expect("fixture has curricula")),
            ResultRow::Header {
                key: BucketKey::MultiGrade,
                count: 3,
                expanded: false,
            },
        ];
        let ctx = CurriculumListViewContext {
            rows: &rows,
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 10,
            grouped: true,
        };

        let output = strip_ansi_codes(&CurriculumListComponent::new().view(&ctx));

        assert_eq!(
            output,
            "> ▾ 🎓 High School (1)\n      Curriculum c1 · Example Org [K-12]\n  ▸ 🌐 Multi-Grade / All Levels (3)\n"
        );
    }

    #[rstest]
    fn headers_are_coloured_by_theme() {
        let rows = [ResultRow::Header {
            key: BucketKey::Elementary,
            count: 2,
            expanded: false,
        }];

        let output = render(&rows, 0, 0, 10);

        assert!(output.contains("\x1b[32m"));
        assert!(output.contains(RESET));
    }
}
