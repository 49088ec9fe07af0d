//! Layout helpers for the directory TUI model.
//!
//! The open dropdown's option list pushes the results down, so the list
//! height depends on the dropdown state as well as the terminal size.

use super::{CHROME_HEIGHT, DirectoryApp, MIN_DETAIL_HEIGHT, MIN_LIST_HEIGHT};
use crate::tui::components::FilterBarComponent;

impl DirectoryApp {
    /// Body rows available to the list and detail sections.
    fn visible_body_height(&self) -> usize {
        (self.height as usize)
            .saturating_sub(CHROME_HEIGHT)
            .saturating_sub(FilterBarComponent::options_height(&self.state))
    }

    /// Recomputes the list height and stores it in the component.
    pub(super) fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.results.set_visible_height(list_height);
    }

    /// Calculates the number of rows available for the results list.
    ///
    /// The list takes as many rows as it has, bounded so the detail pane
    /// keeps at least [`MIN_DETAIL_HEIGHT`] rows.
    pub(super) fn calculate_list_height(&self) -> usize {
        let body_height = self.visible_body_height();
        let list_max = body_height.saturating_sub(MIN_DETAIL_HEIGHT);
        self.row_count()
            .max(MIN_LIST_HEIGHT)
            .min(list_max)
            .max(MIN_LIST_HEIGHT)
    }

    /// Calculates the number of rows available for the detail pane.
    pub(super) fn calculate_detail_height(&self) -> usize {
        self.visible_body_height()
            .saturating_sub(self.results.visible_height())
    }

    /// Adjusts scroll offset so the cursor remains visible.
    pub(super) const fn adjust_scroll_to_cursor(&mut self) {
        let cursor = self.cursor_position;
        let visible_height = self.results.visible_height();

        if visible_height == 0 {
            return;
        }

        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if cursor >= viewport_end {
            self.scroll_offset = cursor.saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
