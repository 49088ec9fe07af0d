//! `Model` trait implementation for the directory TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `DirectoryApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::{DirectoryApp, Focus};
use crate::catalogue::Catalogue;
use crate::directory::DirectoryState;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for DirectoryApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve startup data from module-level storage.
        let state = crate::tui::get_initial_directory().map_or_else(
            || {
                tracing::warn!("TUI started without a catalogue; showing an empty directory");
                DirectoryState::new(Catalogue::default())
            },
            |data| {
                DirectoryState::new(data.catalogue)
                    .with_initial(data.initial)
                    .with_view(data.view)
            },
        );
        (Self::new(state), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            if let Some(mapped) = map_key_to_message_with_context(key_msg, context) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_filters());
        output.push('\n');
        output.push_str(&self.render_results());
        output.push_str(&self.render_detail());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl DirectoryApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        match self.focus {
            Focus::Dropdown(kind) if self.state.is_dropdown_open(kind) => {
                InputContext::OpenDropdown
            }
            Focus::Dropdown(_) => InputContext::DropdownButton,
            Focus::Chips => InputContext::Chips,
            Focus::Results => InputContext::Results,
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Truncates or pads a line to `width` display columns, passing ANSI
/// escape sequences through without counting them.
fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible = 0usize;
    let mut in_escape = false;
    let mut had_ansi = false;

    for ch in line.chars() {
        if in_escape {
            output.push(ch);
            in_escape = !ch.is_ascii_alphabetic();
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            had_ansi = true;
            output.push(ch);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(char_width);
    }

    if visible < width {
        output.push_str(&" ".repeat(width - visible));
    }
    if had_ansi && !output.ends_with("\x1b[0m") {
        output.push_str("\x1b[0m");
    }
    output
}
