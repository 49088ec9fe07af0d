//! Rendering logic for the directory TUI application.
//!
//! These are pure query methods that read state without modification.

use super::{DirectoryApp, Focus};
use crate::directory::ViewMode;
use crate::tui::components::{
    CurriculumDetailComponent, CurriculumDetailViewContext, CurriculumListViewContext,
    FilterBarComponent, FilterBarFocus, FilterBarViewContext,
};
use crate::tui::input::InputContext;

impl DirectoryApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let view = match self.state.view() {
            ViewMode::List => "List",
            ViewMode::Grouped => "By grade band",
        };
        format!("Curriculum Directory · {view}\n")
    }

    fn filter_bar_context(&self) -> FilterBarViewContext<'_> {
        let focus = match self.focus {
            Focus::Dropdown(kind) => FilterBarFocus::Dropdown(kind),
            Focus::Chips => FilterBarFocus::Chip(self.chip_cursor),
            Focus::Results => FilterBarFocus::None,
        };
        FilterBarViewContext {
            state: &self.state,
            focus,
        }
    }

    /// Renders the dropdown buttons, chip row, and any open option list.
    pub(super) fn render_filters(&self) -> String {
        let ctx = self.filter_bar_context();
        let mut output = FilterBarComponent::view(&ctx);
        output.push_str(&FilterBarComponent::view_chips(&ctx));
        output.push_str(&FilterBarComponent::view_options(&ctx));
        output
    }

    /// Renders the results rows.
    pub(super) fn render_results(&self) -> String {
        let rows = self.rows();
        let ctx = CurriculumListViewContext {
            rows: &rows,
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            visible_height: self.results.visible_height(),
            grouped: self.state.view() == ViewMode::Grouped,
        };
        self.results.view(&ctx)
    }

    /// Renders the detail pane for the curriculum under the cursor.
    pub(super) fn render_detail(&self) -> String {
        let ctx = CurriculumDetailViewContext {
            selected: self.selected_curriculum(),
            labels: self.state.catalogue().labels(),
            max_width: (self.width as usize).clamp(1, 80),
            max_height: self.calculate_detail_height(),
        };
        CurriculumDetailComponent::view(&ctx)
    }

    /// Renders the status bar with key hints for the focused area.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = match self.input_context() {
            InputContext::OpenDropdown => "j/k:move  Space:toggle  Esc:close  Tab:next",
            InputContext::DropdownButton => "Enter:open  Tab:next  c:clear  ?:help  q:quit",
            InputContext::Chips => "h/l:move  x:remove  c:clear  Tab:next  ?:help  q:quit",
            InputContext::Results => self.results_status_hints(),
        };
        format!("{hints}\n")
    }

    const fn results_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "j/k:move  v:view  Tab:filters  ?:help  q:quit"
        } else {
            "j/k:move  Enter:expand  v:view  e/E:expand/collapse all  c:clear  Tab:filters  ?:help  q:quit"
        }
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Focus:
  Tab        Next area (grades, topics, chips, results)
  Shift-Tab  Previous area

Dropdowns:
  Enter      Open or close the focused dropdown
  j, k       Move the highlight
  Space      Check or uncheck the highlighted option
  Esc        Close the dropdown

Chips:
  h, l       Select chip
  x          Remove the selected chip

Results:
  j, k       Move cursor
  PgUp, PgDn Page
  Home, End  First or last row
  Enter      Expand or collapse the bucket under the cursor
  e, E       Expand or collapse every bucket
  v          Switch between list and grade-band views

Other:
  c, Esc     Clear all filters
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
