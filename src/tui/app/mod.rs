//! Main TUI application model implementing the MVU pattern.
//!
//! [`DirectoryApp`] owns a [`DirectoryState`] and adds what only the
//! terminal needs: keyboard focus, the results cursor, scrolling, and the
//! terminal size. Every message handler mutates the state through its
//! public transitions and then re-clamps the cursor.
//!
//! # Module Structure
//!
//! - `filter_handlers`: focus, dropdown, and chip handling
//! - `grouping_handlers`: bucket expansion and view switching
//! - `layout`: list/detail heights and scrolling
//! - `model_impl`: the `bubbletea_rs::Model` implementation
//! - `navigation`: results cursor movement
//! - `rendering`: header, status bar, and help overlay

use bubbletea_rs::Cmd;

use crate::catalogue::Curriculum;
use crate::directory::{DirectoryState, ViewMode};

use super::components::{CurriculumListComponent, ResultRow};
use super::messages::AppMsg;

mod filter_handlers;
mod focus;
mod grouping_handlers;
mod layout;
mod model_impl;
mod navigation;
mod rendering;

pub use focus::Focus;

/// Rows reserved for the header, filter bar, chip row, separator line, and
/// status bar.
pub(crate) const CHROME_HEIGHT: usize = 5;
/// Minimum rows reserved for the detail pane.
pub(crate) const MIN_DETAIL_HEIGHT: usize = 3;
/// Minimum rows for the results list.
pub(crate) const MIN_LIST_HEIGHT: usize = 1;

/// Main application model for the curriculum directory TUI.
#[derive(Debug)]
pub struct DirectoryApp {
    /// Filters, buckets, dropdowns, and view.
    pub(crate) state: DirectoryState,
    /// Area receiving keyboard input.
    pub(crate) focus: Focus,
    /// Index of the focused chip.
    pub(crate) chip_cursor: usize,
    /// Index of the highlighted results row.
    pub(crate) cursor_position: usize,
    /// Number of results rows scrolled off the top.
    pub(crate) scroll_offset: usize,
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    results: CurriculumListComponent,
}

impl DirectoryApp {
    /// Creates an application for an 80×24 terminal.
    #[must_use]
    pub fn new(state: DirectoryState) -> Self {
        Self::with_dimensions(state, 80, 24)
    }

    /// Creates an application for a terminal of the given size.
    #[must_use]
    pub fn with_dimensions(state: DirectoryState, width: u16, height: u16) -> Self {
        let mut app = Self {
            state,
            focus: Focus::default(),
            chip_cursor: 0,
            cursor_position: 0,
            scroll_offset: 0,
            width,
            height,
            show_help: false,
            results: CurriculumListComponent::new(),
        };
        app.set_visible_list_height();
        app
    }

    /// Returns the directory state.
    #[must_use]
    pub const fn state(&self) -> &DirectoryState {
        &self.state
    }

    /// Returns the focused area.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the results cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Returns the focused chip index.
    #[must_use]
    pub const fn chip_cursor(&self) -> usize {
        self.chip_cursor
    }

    /// Returns the rows of the results area for the active view.
    ///
    /// The list view yields one item per visible curriculum. The grouped
    /// view yields a header per non-empty bucket, followed by its members
    /// when the bucket is expanded.
    #[must_use]
    pub fn rows(&self) -> Vec<ResultRow<'_>> {
        match self.state.view() {
            ViewMode::List => self
                .state
                .visible()
                .into_iter()
                .map(ResultRow::Item)
                .collect(),
            ViewMode::Grouped => {
                let mut rows = Vec::new();
                for bucket in self.state.groups().non_empty() {
                    let expanded = self.state.expansion().is_expanded(bucket.key);
                    rows.push(ResultRow::Header {
                        key: bucket.key,
                        count: bucket.members.len(),
                        expanded,
                    });
                    if expanded {
                        rows.extend(bucket.members.into_iter().map(ResultRow::Item));
                    }
                }
                rows
            }
        }
    }

    /// Returns the number of results rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Returns the curriculum under the cursor, if the cursor is on one.
    #[must_use]
    pub fn selected_curriculum(&self) -> Option<&Curriculum> {
        self.rows()
            .get(self.cursor_position)
            .and_then(ResultRow::curriculum)
    }

    /// Clamps the results and chip cursors after the rows may have changed
    /// and recomputes the layout.
    pub(crate) fn refresh_after_change(&mut self) {
        let row_count = self.row_count();
        self.cursor_position = self.cursor_position.min(row_count.saturating_sub(1));
        let chip_count = self.state.chips().len();
        self.chip_cursor = self.chip_cursor.min(chip_count.saturating_sub(1));
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_layout() {
            return self.handle_layout_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => None,
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => None,
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
        None
    }
}

#[cfg(test)]
mod tests;
