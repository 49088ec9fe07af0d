//! Results cursor movement.
//!
//! The cursor ranges over the rows of the active view, so in the grouped
//! view it stops on bucket headers as well as curricula.

use bubbletea_rs::Cmd;

use super::DirectoryApp;

impl DirectoryApp {
    fn move_cursor_up(&mut self, step: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(step);
        self.adjust_scroll_to_cursor();
    }

    fn move_cursor_down(&mut self, step: usize) {
        let max_index = self.row_count().saturating_sub(1);
        self.cursor_position = self.cursor_position.saturating_add(step).min(max_index);
        self.adjust_scroll_to_cursor();
    }

    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.move_cursor_up(1);
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        self.move_cursor_down(1);
        None
    }

    /// Handles page up navigation.
    pub(super) fn handle_page_up(&mut self) -> Option<Cmd> {
        self.move_cursor_up(self.results.visible_height());
        None
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        self.move_cursor_down(self.results.visible_height());
        None
    }

    /// Handles Home key navigation.
    pub(super) fn handle_home(&mut self) -> Option<Cmd> {
        self.scroll_offset = 0;
        self.cursor_position = 0;
        None
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        self.cursor_position = self.row_count().saturating_sub(1);
        self.adjust_scroll_to_cursor();
        None
    }
}
