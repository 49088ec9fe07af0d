//! Input handling for the TUI application.
//!
//! This module provides context-aware key-to-message mapping. The same key
//! can mean different things depending on which area has focus: `j` moves
//! the dropdown highlight while a dropdown is open and the results cursor
//! otherwise.

use crossterm::event::KeyCode;

use super::messages::AppMsg;

/// The area receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// A dropdown button has focus and its option list is open.
    OpenDropdown,
    /// A dropdown button has focus and is closed.
    DropdownButton,
    /// The active-filter chip row has focus.
    Chips,
    /// The results list has focus.
    Results,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    let contextual = match context {
        InputContext::OpenDropdown => map_open_dropdown_key(key.key),
        InputContext::DropdownButton => map_dropdown_button_key(key.key),
        InputContext::Chips => map_chips_key(key.key),
        InputContext::Results => map_results_key(key.key),
    };
    contextual.or_else(|| map_global_key(key.key))
}

/// Keys available in every context.
const fn map_global_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Tab => Some(AppMsg::FocusNext),
        KeyCode::BackTab => Some(AppMsg::FocusPrevious),
        KeyCode::Char('c') | KeyCode::Esc => Some(AppMsg::ClearFilters),
        KeyCode::Char('v') => Some(AppMsg::ToggleView),
        KeyCode::Char('e') => Some(AppMsg::ExpandAll),
        KeyCode::Char('E') => Some(AppMsg::CollapseAll),
        _ => None,
    }
}

const fn map_open_dropdown_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::DropdownDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::DropdownUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::ToggleOption),
        KeyCode::Esc => Some(AppMsg::CloseDropdown),
        _ => None,
    }
}

const fn map_dropdown_button_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => Some(AppMsg::ActivateDropdown),
        _ => None,
    }
}

const fn map_chips_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::ChipLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::ChipRight),
        KeyCode::Char('x') | KeyCode::Backspace | KeyCode::Delete | KeyCode::Enter => {
            Some(AppMsg::RemoveChip)
        }
        _ => None,
    }
}

const fn map_results_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::ActivateRow),
        _ => None,
    }
}
