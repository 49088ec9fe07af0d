//! Filtering, grouping, and dropdown logic for the curriculum directory.
//!
//! Everything here is independent of the terminal front end:
//!
//! - [`filter`]: selected grades/topics and the visibility predicate
//! - [`grouping`]: grade-band buckets and their expand/collapse state
//! - [`dropdown`]: multi-select dropdown and outside-click listeners
//! - [`query`]: initial selection from query parameters
//! - [`state`]: [`DirectoryState`], the page state tying the above together

pub mod dropdown;
pub mod filter;
pub mod grouping;
pub mod query;
pub mod state;

pub use dropdown::{
    DropdownId, DropdownOption, ListenerGuard, MultiSelectDropdown, OutsideClickListeners,
};
pub use filter::{FilterChip, FilterSelection, FilterValue, ResultsSummary, compute_visible};
pub use grouping::{
    Bucket, BucketKey, BucketState, BucketTheme, ExpansionState, Partition, UnknownBucketError,
    partition,
};
pub use query::{InitialSelection, SelectionError};
pub use state::{DirectoryState, FilterKind, ViewMode};
