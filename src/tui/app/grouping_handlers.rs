//! Bucket expansion and view switching handlers.

use bubbletea_rs::Cmd;

use super::DirectoryApp;
use crate::tui::messages::AppMsg;

impl DirectoryApp {
    /// Dispatches bucket and view messages to their handlers.
    pub(super) fn handle_layout_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ActivateRow => self.handle_activate_row(),
            AppMsg::ExpandAll => {
                self.state.expand_all();
                self.refresh_after_change();
                None
            }
            AppMsg::CollapseAll => {
                self.state.collapse_all();
                self.refresh_after_change();
                None
            }
            AppMsg::ToggleView => {
                self.state.toggle_view();
                self.cursor_position = 0;
                self.scroll_offset = 0;
                self.refresh_after_change();
                None
            }
            _ => None,
        }
    }

    /// Toggles the bucket under the cursor. Item rows have nothing to
    /// toggle.
    fn handle_activate_row(&mut self) -> Option<Cmd> {
        let bucket = self
            .rows()
            .get(self.cursor_position)
            .and_then(|row| row.bucket());
        if let Some(key) = bucket {
            self.state.toggle_bucket(key);
            self.refresh_after_change();
        }
        None
    }
}
