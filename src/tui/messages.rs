//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions and
//! system events.

/// Messages for the curriculum directory TUI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move the results cursor up one row.
    CursorUp,
    /// Move the results cursor down one row.
    CursorDown,
    /// Move the results cursor up one page.
    PageUp,
    /// Move the results cursor down one page.
    PageDown,
    /// Move the results cursor to the first row.
    Home,
    /// Move the results cursor to the last row.
    End,

    // Focus
    /// Move focus to the next area (grade, topic, chips, results).
    FocusNext,
    /// Move focus to the previous area.
    FocusPrevious,

    // Dropdowns
    /// Click the focused dropdown button, opening or closing it.
    ActivateDropdown,
    /// Move the highlight of the open dropdown up.
    DropdownUp,
    /// Move the highlight of the open dropdown down.
    DropdownDown,
    /// Toggle the highlighted option of the open dropdown.
    ToggleOption,
    /// Close the open dropdown.
    CloseDropdown,

    // Filters
    /// Move the chip cursor left.
    ChipLeft,
    /// Move the chip cursor right.
    ChipRight,
    /// Remove the chip under the chip cursor.
    RemoveChip,
    /// Clear every grade and topic filter.
    ClearFilters,

    // Grouping and layout
    /// Expand or collapse the bucket under the cursor.
    ActivateRow,
    /// Expand every bucket.
    ExpandAll,
    /// Collapse every bucket.
    CollapseAll,
    /// Switch between the list and grouped views.
    ToggleView,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for results-cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for focus, dropdown, and chip messages.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::FocusNext
                | Self::FocusPrevious
                | Self::ActivateDropdown
                | Self::DropdownUp
                | Self::DropdownDown
                | Self::ToggleOption
                | Self::CloseDropdown
                | Self::ChipLeft
                | Self::ChipRight
                | Self::RemoveChip
                | Self::ClearFilters
        )
    }

    /// Returns true for bucket and view layout messages.
    #[must_use]
    pub const fn is_layout(&self) -> bool {
        matches!(
            self,
            Self::ActivateRow | Self::ExpandAll | Self::CollapseAll | Self::ToggleView
        )
    }
}
