//! Explicit state for one directory page.
//!
//! [`DirectoryState`] bundles the filter selection, bucket expansion, the two
//! filter dropdowns, and the active view. Transitions are plain methods and
//! views are recomputed from the current state on every call, so the whole
//! page can be exercised without a terminal.

use std::fmt;
use std::str::FromStr;

use crate::catalogue::{Catalogue, Curriculum, GradeLevel, Topic};

use super::dropdown::{DropdownId, DropdownOption, MultiSelectDropdown, OutsideClickListeners};
use super::filter::{FilterChip, FilterSelection, FilterValue, ResultsSummary};
use super::grouping::{BucketKey, ExpansionState, Partition, partition};
use super::query::InitialSelection;

/// Which filter dimension a dropdown controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKind {
    /// The grade-level dropdown.
    Grade,
    /// The topic dropdown.
    Topic,
}

impl FilterKind {
    /// Returns the dropdown identity for this dimension.
    #[must_use]
    pub const fn dropdown_id(self) -> DropdownId {
        match self {
            Self::Grade => DropdownId(1),
            Self::Topic => DropdownId(2),
        }
    }

    fn from_dropdown_id(id: DropdownId) -> Option<Self> {
        [Self::Grade, Self::Topic]
            .into_iter()
            .find(|kind| kind.dropdown_id() == id)
    }
}

/// How the filtered curricula are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// A single list of cards.
    #[default]
    List,
    /// Cards grouped by grade band.
    Grouped,
}

impl ViewMode {
    /// Returns the other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::List => Self::Grouped,
            Self::Grouped => Self::List,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Grouped => "grouped",
        })
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "grouped" | "groups" => Ok(Self::Grouped),
            other => Err(format!("unknown view '{other}' (expected list or grouped)")),
        }
    }
}

/// State of a directory page.
#[derive(Debug)]
pub struct DirectoryState {
    catalogue: Catalogue,
    selection: FilterSelection,
    expansion: ExpansionState,
    grade_dropdown: MultiSelectDropdown<GradeLevel>,
    topic_dropdown: MultiSelectDropdown<Topic>,
    listeners: OutsideClickListeners,
    view: ViewMode,
}

impl DirectoryState {
    /// Creates a page with no filters, every bucket collapsed, and the list
    /// view active.
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        let labels = catalogue.labels();
        let grade_options = GradeLevel::VALUES
            .into_iter()
            .map(|grade| DropdownOption::new(grade, labels.grade(grade)))
            .collect();
        let topic_options = Topic::VALUES
            .into_iter()
            .map(|topic| DropdownOption::new(topic, labels.topic(topic)))
            .collect();

        Self {
            grade_dropdown: MultiSelectDropdown::new(
                FilterKind::Grade.dropdown_id(),
                "All grades",
                grade_options,
            ),
            topic_dropdown: MultiSelectDropdown::new(
                FilterKind::Topic.dropdown_id(),
                "All topics",
                topic_options,
            ),
            catalogue,
            selection: FilterSelection::new(),
            expansion: ExpansionState::new(),
            listeners: OutsideClickListeners::new(),
            view: ViewMode::default(),
        }
    }

    /// Applies an initial selection.
    #[must_use]
    pub fn with_initial(mut self, initial: InitialSelection) -> Self {
        self.selection = initial.selection;
        self.expansion = ExpansionState::with_expanded(initial.expanded);
        self
    }

    /// Sets the active view.
    #[must_use]
    pub const fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    /// Returns the catalogue backing this page.
    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Returns the current filter selection.
    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Returns the bucket expansion state.
    #[must_use]
    pub const fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Returns the outside-click listener registry.
    #[must_use]
    pub const fn listeners(&self) -> &OutsideClickListeners {
        &self.listeners
    }

    /// Returns the active view.
    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    // Filter transitions

    /// Toggles a grade-level filter.
    pub fn toggle_grade_filter(&mut self, grade: GradeLevel) {
        self.toggle_filter(FilterValue::Grade(grade));
    }

    /// Toggles a topic filter.
    pub fn toggle_topic_filter(&mut self, topic: Topic) {
        self.toggle_filter(FilterValue::Topic(topic));
    }

    /// Toggles a filter value in either dimension.
    pub fn toggle_filter(&mut self, value: FilterValue) {
        self.selection.toggle(value);
        tracing::debug!("toggled filter {value:?}; {}", self.results_summary());
    }

    /// Dismisses a chip by toggling its value off.
    pub fn remove_chip(&mut self, chip: &FilterChip) {
        if self.selection.contains(chip.value) {
            self.toggle_filter(chip.value);
        }
    }

    /// Clears both filter dimensions.
    pub fn clear_all(&mut self) {
        self.selection.clear_all();
        tracing::debug!("cleared all filters");
    }

    // Views

    /// Returns the curricula passing the current filters, in catalogue order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Curriculum> {
        self.selection.apply(self.catalogue.curricula())
    }

    /// Returns the visible curricula partitioned into grade-band buckets.
    #[must_use]
    pub fn groups(&self) -> Partition<'_> {
        partition(self.visible())
    }

    /// Returns the results count read-out.
    #[must_use]
    pub fn results_summary(&self) -> ResultsSummary {
        ResultsSummary {
            visible: self.visible().len(),
            total: self.catalogue.len(),
        }
    }

    /// Returns the active filter chips.
    #[must_use]
    pub fn chips(&self) -> Vec<FilterChip> {
        self.selection.chips(self.catalogue.labels())
    }

    // Buckets

    /// Expands or collapses one bucket.
    pub fn toggle_bucket(&mut self, key: BucketKey) {
        self.expansion.toggle(key);
        tracing::debug!("bucket {key} is now {:?}", self.expansion.state(key));
    }

    /// Expands every bucket.
    pub fn expand_all(&mut self) {
        self.expansion.expand_all();
    }

    /// Collapses every bucket.
    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    /// Switches between the list and grouped views.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    // Dropdowns

    /// Returns the button text of a filter dropdown.
    #[must_use]
    pub fn dropdown_text(&self, kind: FilterKind) -> String {
        match kind {
            FilterKind::Grade => self.grade_dropdown.display_text(self.selection.grades()),
            FilterKind::Topic => self.topic_dropdown.display_text(self.selection.topics()),
        }
    }

    /// Returns true when the dropdown's checkbox list is shown.
    #[must_use]
    pub const fn is_dropdown_open(&self, kind: FilterKind) -> bool {
        match kind {
            FilterKind::Grade => self.grade_dropdown.is_open(),
            FilterKind::Topic => self.topic_dropdown.is_open(),
        }
    }

    /// Returns the open dropdown, if any.
    #[must_use]
    pub fn open_dropdown(&self) -> Option<FilterKind> {
        [FilterKind::Grade, FilterKind::Topic]
            .into_iter()
            .find(|&kind| self.is_dropdown_open(kind))
    }

    /// Returns the highlighted option index of a dropdown.
    #[must_use]
    pub const fn dropdown_cursor(&self, kind: FilterKind) -> usize {
        match kind {
            FilterKind::Grade => self.grade_dropdown.cursor(),
            FilterKind::Topic => self.topic_dropdown.cursor(),
        }
    }

    /// Returns `(label, checked)` for each option of a dropdown.
    #[must_use]
    pub fn dropdown_options(&self, kind: FilterKind) -> Vec<(String, bool)> {
        match kind {
            FilterKind::Grade => self
                .grade_dropdown
                .options()
                .iter()
                .map(|option| {
                    let checked = self.selection.grades().contains(&option.value);
                    (option.label.clone(), checked)
                })
                .collect(),
            FilterKind::Topic => self
                .topic_dropdown
                .options()
                .iter()
                .map(|option| {
                    let checked = self.selection.topics().contains(&option.value);
                    (option.label.clone(), checked)
                })
                .collect(),
        }
    }

    /// Handles a click on a dropdown button.
    ///
    /// The click is dispatched to the outside-click listeners first, so any
    /// other open dropdown closes.
    pub fn click_dropdown(&mut self, kind: FilterKind) {
        self.click(Some(kind));
        match kind {
            FilterKind::Grade => self.grade_dropdown.toggle_open(&self.listeners),
            FilterKind::Topic => self.topic_dropdown.toggle_open(&self.listeners),
        }
    }

    /// Dispatches a click to the outside-click listeners.
    ///
    /// `target` is the dropdown that was clicked, or `None` for anywhere
    /// else on the page. Every open dropdown the click falls outside of
    /// closes and releases its listener.
    pub fn click(&mut self, target: Option<FilterKind>) {
        let target_id = target.map(FilterKind::dropdown_id);
        for id in self.listeners.dispatch_click(target_id) {
            match FilterKind::from_dropdown_id(id) {
                Some(FilterKind::Grade) => self.grade_dropdown.handle_click(target_id),
                Some(FilterKind::Topic) => self.topic_dropdown.handle_click(target_id),
                None => tracing::warn!("outside-click listener for unknown dropdown {}", id.0),
            }
        }
    }

    /// Closes whichever dropdown is open.
    pub fn close_dropdowns(&mut self) {
        self.grade_dropdown.close();
        self.topic_dropdown.close();
    }

    /// Moves the highlight of the open dropdown up.
    pub fn dropdown_cursor_up(&mut self) {
        match self.open_dropdown() {
            Some(FilterKind::Grade) => self.grade_dropdown.cursor_up(),
            Some(FilterKind::Topic) => self.topic_dropdown.cursor_up(),
            None => {}
        }
    }

    /// Moves the highlight of the open dropdown down.
    pub fn dropdown_cursor_down(&mut self) {
        match self.open_dropdown() {
            Some(FilterKind::Grade) => self.grade_dropdown.cursor_down(),
            Some(FilterKind::Topic) => self.topic_dropdown.cursor_down(),
            None => {}
        }
    }

    /// Toggles the highlighted option of the open dropdown.
    pub fn toggle_dropdown_option(&mut self) {
        let Some(kind) = self.open_dropdown() else {
            return;
        };
        let mut toggled = None;
        match kind {
            FilterKind::Grade => self
                .grade_dropdown
                .toggle_at_cursor(|grade| toggled = Some(FilterValue::Grade(grade))),
            FilterKind::Topic => self
                .topic_dropdown
                .toggle_at_cursor(|topic| toggled = Some(FilterValue::Topic(topic))),
        }
        if let Some(value) = toggled {
            self.toggle_filter(value);
        }
    }
}
