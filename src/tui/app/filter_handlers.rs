//! Focus, dropdown, and chip message handlers.
//!
//! Moving focus is treated as a click on the newly focused area: the click
//! goes through the outside-click listeners first, so an open dropdown
//! closes as soon as focus leaves it.

use bubbletea_rs::Cmd;

use super::{DirectoryApp, Focus};
use crate::tui::messages::AppMsg;

impl DirectoryApp {
    /// Dispatches filter messages to their handlers.
    pub(super) fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusNext => self.handle_focus_change(self.focus.next()),
            AppMsg::FocusPrevious => self.handle_focus_change(self.focus.previous()),
            AppMsg::ActivateDropdown => self.handle_activate_dropdown(),
            AppMsg::DropdownUp => {
                self.state.dropdown_cursor_up();
                None
            }
            AppMsg::DropdownDown => {
                self.state.dropdown_cursor_down();
                None
            }
            AppMsg::ToggleOption => self.handle_toggle_option(),
            AppMsg::CloseDropdown => self.handle_close_dropdown(),
            AppMsg::ChipLeft => {
                self.chip_cursor = self.chip_cursor.saturating_sub(1);
                None
            }
            AppMsg::ChipRight => self.handle_chip_right(),
            AppMsg::RemoveChip => self.handle_remove_chip(),
            AppMsg::ClearFilters => self.handle_clear_filters(),
            _ => None,
        }
    }

    fn handle_focus_change(&mut self, focus: Focus) -> Option<Cmd> {
        self.state.click(focus.click_target());
        self.focus = focus;
        self.refresh_after_change();
        None
    }

    fn handle_activate_dropdown(&mut self) -> Option<Cmd> {
        let Focus::Dropdown(kind) = self.focus else {
            tracing::debug!("dropdown activation ignored; focus is {:?}", self.focus);
            return None;
        };
        self.state.click_dropdown(kind);
        self.refresh_after_change();
        None
    }

    fn handle_toggle_option(&mut self) -> Option<Cmd> {
        self.state.toggle_dropdown_option();
        self.refresh_after_change();
        None
    }

    fn handle_close_dropdown(&mut self) -> Option<Cmd> {
        self.state.close_dropdowns();
        self.refresh_after_change();
        None
    }

    fn handle_chip_right(&mut self) -> Option<Cmd> {
        let last = self.state.chips().len().saturating_sub(1);
        self.chip_cursor = self.chip_cursor.saturating_add(1).min(last);
        None
    }

    fn handle_remove_chip(&mut self) -> Option<Cmd> {
        let chips = self.state.chips();
        let Some(chip) = chips.get(self.chip_cursor) else {
            return None;
        };
        self.state.remove_chip(chip);
        self.refresh_after_change();
        None
    }

    fn handle_clear_filters(&mut self) -> Option<Cmd> {
        self.state.clear_all();
        self.chip_cursor = 0;
        self.refresh_after_change();
        None
    }
}
