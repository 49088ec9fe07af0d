//! Filter bar component: dropdown buttons, results count, chips, and the
//! option list of the open dropdown.

use crate::directory::{DirectoryState, FilterKind};

/// Which part of the filter bar has keyboard focus, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterBarFocus {
    /// The grade or topic dropdown button.
    Dropdown(FilterKind),
    /// The chip at this index.
    Chip(usize),
    /// Focus is elsewhere.
    None,
}

/// Context for rendering the filter bar.
#[derive(Debug, Clone, Copy)]
pub struct FilterBarViewContext<'a> {
    /// The directory page state.
    pub state: &'a DirectoryState,
    /// Current keyboard focus.
    pub focus: FilterBarFocus,
}

/// Stateless renderer for the filter controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterBarComponent;

impl FilterBarComponent {
    /// Renders the dropdown buttons and the results count on one line.
    #[must_use]
    pub fn view(ctx: &FilterBarViewContext<'_>) -> String {
        let grade = Self::render_button(ctx, FilterKind::Grade, "Grades");
        let topic = Self::render_button(ctx, FilterKind::Topic, "Topics");
        let summary = ctx.state.results_summary();
        format!("{grade}  {topic}  {summary}\n")
    }

    /// Renders the chip row.
    #[must_use]
    pub fn view_chips(ctx: &FilterBarViewContext<'_>) -> String {
        let chips = ctx.state.chips();
        if chips.is_empty() {
            return "Filters: none\n".to_owned();
        }

        let rendered: Vec<String> = chips
            .iter()
            .enumerate()
            .map(|(index, chip)| {
                if ctx.focus == FilterBarFocus::Chip(index) {
                    format!("[× {}]", chip.label)
                } else {
                    format!(" × {} ", chip.label)
                }
            })
            .collect();
        format!("Filters:{}\n", rendered.join(" "))
    }

    /// Renders the checkbox list of the open dropdown, or nothing when both
    /// dropdowns are closed.
    #[must_use]
    pub fn view_options(ctx: &FilterBarViewContext<'_>) -> String {
        let Some(kind) = ctx.state.open_dropdown() else {
            return String::new();
        };

        let cursor = ctx.state.dropdown_cursor(kind);
        let mut output = String::new();
        for (index, (label, checked)) in ctx.state.dropdown_options(kind).iter().enumerate() {
            let pointer = if index == cursor { ">" } else { " " };
            let mark = if *checked { "x" } else { " " };
            output.push_str(&format!("  {pointer} [{mark}] {label}\n"));
        }
        output
    }

    /// Returns the number of lines [`Self::view_options`] produces.
    #[must_use]
    pub fn options_height(state: &DirectoryState) -> usize {
        state
            .open_dropdown()
            .map_or(0, |kind| state.dropdown_options(kind).len())
    }

    fn render_button(ctx: &FilterBarViewContext<'_>, kind: FilterKind, name: &str) -> String {
        let arrow = if ctx.state.is_dropdown_open(kind) {
            "▴"
        } else {
            "▾"
        };
        let text = ctx.state.dropdown_text(kind);
        if ctx.focus == FilterBarFocus::Dropdown(kind) {
            format!("{name}: <{text} {arrow}>")
        } else {
            format!("{name}: [{text} {arrow}]")
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalogue::test_support::curriculum;
    use crate::catalogue::{Catalogue, GradeLevel, Topic};

    #[fixture]
    fn state() -> DirectoryState {
        let catalogue = Catalogue::new(vec![
            curriculum("a", &[GradeLevel::Elementary], &[Topic::Cs]),
            curriculum("b", &[GradeLevel::High], &[Topic::Ai]),
        ])
        .expect("fixture catalogue is valid");
        DirectoryState::new(catalogue)
    }

    #[rstest]
    fn shows_placeholders_and_count(state: DirectoryState) {
        let ctx = FilterBarViewContext {
            state: &state,
            focus: FilterBarFocus::Dropdown(FilterKind::Grade),
        };

        assert_eq!(
            FilterBarComponent::view(&ctx),
            "Grades: <All grades ▾>  Topics: [All topics ▾]  Showing 2 of 2 curricula\n"
        );
    }

    #[rstest]
    fn shows_selection_summary(mut state: DirectoryState) {
        state.toggle_topic_filter(Topic::Ai);
        state.toggle_topic_filter(Topic::Cs);
        let ctx = FilterBarViewContext {
            state: &state,
            focus: FilterBarFocus::None,
        };

        let output = FilterBarComponent::view(&ctx);

        assert!(output.contains("Topics: [2 selected ▾]"));
    }

    #[rstest]
    fn chips_highlight_focused_chip(mut state: DirectoryState) {
        state.toggle_grade_filter(GradeLevel::High);
        state.toggle_topic_filter(Topic::Ai);
        let ctx = FilterBarViewContext {
            state: &state,
            focus: FilterBarFocus::Chip(1),
        };

        assert_eq!(
            FilterBarComponent::view_chips(&ctx),
            "Filters: × High School (9-12)  [× Artificial Intelligence]\n"
        );
    }

    #[rstest]
    fn chips_report_none_without_filters(state: DirectoryState) {
        let ctx = FilterBarViewContext {
            state: &state,
            focus: FilterBarFocus::None,
        };

        assert_eq!(FilterBarComponent::view_chips(&ctx), "Filters: none\n");
    }

    #[rstest]
    fn options_list_open_dropdown(mut state: DirectoryState) {
        state.click_dropdown(FilterKind::Grade);
        state.toggle_grade_filter(GradeLevel::Middle);
        let ctx = FilterBarViewContext {
            state: &state,
            focus: FilterBarFocus::Dropdown(FilterKind::Grade),
        };

        let output = FilterBarComponent::view_options(&ctx);

        assert_eq!(output.lines().count(), 4);
        assert!(output.starts_with("  > [ ] Elementary (K-5)\n"));
        assert!(output.contains("    [x] Middle School (6-8)\n"));
        assert_eq!(FilterBarComponent::options_height(&state), 4);
    }

    #[rstest]
    fn options_are_empty_when_closed(state: DirectoryState) {
        let ctx = FilterBarViewContext {
            state: &state,
            focus: FilterBarFocus::None,
        };

        assert!(FilterBarComponent::view_options(&ctx).is_empty());
        assert_eq!(FilterBarComponent::options_height(&state), 0);
    }
}
