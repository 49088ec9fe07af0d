//! Multi-select dropdown primitive and its outside-click listener.
//!
//! A [`MultiSelectDropdown`] does not own its selection. Toggling an option
//! reports the option's value through a callback, and the owner applies it
//! through the same toggle that dismisses a chip.
//!
//! While a dropdown is open it holds a [`ListenerGuard`] registered with the
//! shared [`OutsideClickListeners`]. Closing the dropdown or dropping it
//! releases the guard, so repeated open/close cycles never leave stale
//! listeners behind.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Identity of a dropdown within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DropdownId(pub u32);

type ListenerTable = BTreeMap<DropdownId, usize>;

/// Page-level registry of outside-click listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct OutsideClickListeners {
    table: Arc<Mutex<ListenerTable>>,
}

impl OutsideClickListeners {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ListenerTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a listener for `id`; it stays registered until the returned
    /// guard is dropped.
    #[must_use = "dropping the guard immediately unregisters the listener"]
    pub fn register(&self, id: DropdownId) -> ListenerGuard {
        *self.lock().entry(id).or_insert(0) += 1;
        tracing::trace!("registered outside-click listener for dropdown {}", id.0);
        ListenerGuard {
            id,
            listeners: self.clone(),
        }
    }

    fn release(&self, id: DropdownId) {
        let mut table = self.lock();
        if let Some(count) = table.get_mut(&id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                table.remove(&id);
            }
        }
        tracing::trace!("released outside-click listener for dropdown {}", id.0);
    }

    /// Returns the total number of registered listeners.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.lock().values().sum()
    }

    /// Returns true when a listener is registered for `id`.
    #[must_use]
    pub fn is_registered(&self, id: DropdownId) -> bool {
        self.lock().contains_key(&id)
    }

    /// Dispatches a click and returns the dropdowns it falls outside of.
    ///
    /// `target` is the dropdown that received the click, or `None` when the
    /// click landed elsewhere on the page.
    #[must_use]
    pub fn dispatch_click(&self, target: Option<DropdownId>) -> Vec<DropdownId> {
        self.lock()
            .keys()
            .copied()
            .filter(|&id| Some(id) != target)
            .collect()
    }
}

/// Keeps an outside-click listener registered while alive.
#[derive(Debug)]
pub struct ListenerGuard {
    id: DropdownId,
    listeners: OutsideClickListeners,
}

impl ListenerGuard {
    /// Returns the dropdown this listener belongs to.
    #[must_use]
    pub const fn id(&self) -> DropdownId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.listeners.release(self.id);
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption<T> {
    /// Value reported through the change callback.
    pub value: T,
    /// Checkbox label.
    pub label: String,
}

impl<T> DropdownOption<T> {
    /// Creates an option.
    #[must_use]
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// A button that opens a checkbox list of options.
#[derive(Debug)]
pub struct MultiSelectDropdown<T> {
    id: DropdownId,
    placeholder: String,
    options: Vec<DropdownOption<T>>,
    cursor: usize,
    listener: Option<ListenerGuard>,
}

impl<T: Copy + Ord> MultiSelectDropdown<T> {
    /// Creates a closed dropdown.
    ///
    /// `placeholder` is shown when nothing is selected.
    #[must_use]
    pub fn new(
        id: DropdownId,
        placeholder: impl Into<String>,
        options: Vec<DropdownOption<T>>,
    ) -> Self {
        Self {
            id,
            placeholder: placeholder.into(),
            options,
            cursor: 0,
            listener: None,
        }
    }

    /// Returns the dropdown identity.
    #[must_use]
    pub const fn id(&self) -> DropdownId {
        self.id
    }

    /// Returns the options in display order.
    #[must_use]
    pub fn options(&self) -> &[DropdownOption<T>] {
        &self.options
    }

    /// Returns true while the checkbox list is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.listener.is_some()
    }

    /// Returns the index of the highlighted option.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Opens the list and registers the outside-click listener. Opening an
    /// already-open dropdown is a no-op.
    pub fn open(&mut self, listeners: &OutsideClickListeners) {
        if self.listener.is_none() {
            self.listener = Some(listeners.register(self.id));
            self.cursor = 0;
        }
    }

    /// Closes the list and releases the outside-click listener.
    pub fn close(&mut self) {
        self.listener = None;
    }

    /// Handles a click on the dropdown button.
    pub fn toggle_open(&mut self, listeners: &OutsideClickListeners) {
        if self.is_open() {
            self.close();
        } else {
            self.open(listeners);
        }
    }

    /// Closes the dropdown when a click lands outside it.
    pub fn handle_click(&mut self, target: Option<DropdownId>) {
        if self.is_open() && target != Some(self.id) {
            self.close();
        }
    }

    /// Moves the highlight up one option, stopping at the first.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the highlight down one option, stopping at the last.
    pub fn cursor_down(&mut self) {
        let last = self.options.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(last);
    }

    /// Returns the button text for the current selection.
    ///
    /// No selection shows the placeholder, a single selection shows that
    /// option's label, and anything more shows a count.
    #[must_use]
    pub fn display_text(&self, selected: &BTreeSet<T>) -> String {
        let mut values = selected.iter();
        match (values.next(), values.next()) {
            (None, _) => self.placeholder.clone(),
            (Some(value), None) => self
                .label_for(*value)
                .map_or_else(|| "1 selected".to_owned(), ToOwned::to_owned),
            _ => format!("{} selected", selected.len()),
        }
    }

    /// Returns the label of the option carrying `value`.
    #[must_use]
    pub fn label_for(&self, value: T) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    /// Returns the value of the highlighted option.
    #[must_use]
    pub fn highlighted(&self) -> Option<T> {
        self.options.get(self.cursor).map(|option| option.value)
    }

    /// Reports the highlighted option's value to `on_change`, if there is one.
    pub fn toggle_at_cursor<F>(&self, on_change: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.highlighted() {
            on_change(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    const FRUIT: DropdownId = DropdownId(1);
    const VEG: DropdownId = DropdownId(2);

    #[fixture]
    fn dropdown() -> MultiSelectDropdown<u8> {
        MultiSelectDropdown::new(
            FRUIT,
            "All fruit",
            vec![
                DropdownOption::new(1, "Apple"),
                DropdownOption::new(2, "Banana"),
                DropdownOption::new(3, "Cherry"),
            ],
        )
    }

    #[rstest]
    #[case(&[], "All fruit")]
    #[case(&[2], "Banana")]
    #[case(&[1, 3], "2 selected")]
    #[case(&[1, 2, 3], "3 selected")]
    fn display_text_summarises_selection(
        dropdown: MultiSelectDropdown<u8>,
        #[case] selected: &[u8],
        #[case] expected: &str,
    ) {
        let set: BTreeSet<u8> = selected.iter().copied().collect();
        assert_eq!(dropdown.display_text(&set), expected);
    }

    #[rstest]
    fn toggle_at_cursor_reports_highlighted_value(mut dropdown: MultiSelectDropdown<u8>) {
        let mut reported = None;
        dropdown.toggle_at_cursor(|value| reported = Some(value));
        assert_eq!(reported, Some(1));

        dropdown.cursor_down();
        dropdown.toggle_at_cursor(|value| reported = Some(value));
        assert_eq!(reported, Some(2));
    }

    #[test]
    fn toggle_at_cursor_without_options_reports_nothing() {
        let empty: MultiSelectDropdown<u8> = MultiSelectDropdown::new(VEG, "All veg", Vec::new());
        let mut reported = None;
        empty.toggle_at_cursor(|value| reported = Some(value));
        assert_eq!(empty.highlighted(), None);
        assert_eq!(reported, None);
    }

    #[rstest]
    fn cursor_stays_within_options(mut dropdown: MultiSelectDropdown<u8>) {
        dropdown.cursor_up();
        assert_eq!(dropdown.cursor(), 0);
        for _ in 0..5 {
            dropdown.cursor_down();
        }
        assert_eq!(dropdown.cursor(), 2);

        assert_eq!(dropdown.highlighted(), Some(3));
    }

    #[rstest]
    fn open_registers_and_close_releases_listener(mut dropdown: MultiSelectDropdown<u8>) {
        let listeners = OutsideClickListeners::new();

        dropdown.open(&listeners);
        assert!(dropdown.is_open());
        assert!(listeners.is_registered(FRUIT));

        dropdown.close();
        assert!(!dropdown.is_open());
        assert_eq!(listeners.active_count(), 0);
    }

    #[rstest]
    fn repeated_cycles_never_accumulate_listeners(mut dropdown: MultiSelectDropdown<u8>) {
        let listeners = OutsideClickListeners::new();

        for _ in 0..10 {
            dropdown.open(&listeners);
            dropdown.open(&listeners);
            assert_eq!(listeners.active_count(), 1);
            dropdown.toggle_open(&listeners);
            assert_eq!(listeners.active_count(), 0);
        }
    }

    #[rstest]
    fn click_outside_closes_and_releases(mut dropdown: MultiSelectDropdown<u8>) {
        let listeners = OutsideClickListeners::new();
        dropdown.open(&listeners);

        dropdown.handle_click(Some(FRUIT));
        assert!(dropdown.is_open(), "click inside keeps the list open");

        for id in listeners.dispatch_click(Some(VEG)) {
            assert_eq!(id, FRUIT);
            dropdown.handle_click(Some(VEG));
        }
        assert!(!dropdown.is_open());
        assert_eq!(listeners.active_count(), 0);
    }

    #[rstest]
    fn dropping_an_open_dropdown_releases_listener(mut dropdown: MultiSelectDropdown<u8>) {
        let listeners = OutsideClickListeners::new();
        dropdown.open(&listeners);

        drop(dropdown);

        assert_eq!(listeners.active_count(), 0);
    }

    #[test]
    fn dispatch_click_skips_the_target() {
        let listeners = OutsideClickListeners::new();
        let _fruit = listeners.register(FRUIT);
        let _veg = listeners.register(VEG);

        assert_eq!(listeners.dispatch_click(Some(FRUIT)), [VEG]);
        assert_eq!(listeners.dispatch_click(None), [FRUIT, VEG]);
    }
}
