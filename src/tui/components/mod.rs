//! UI components for the curriculum directory TUI.
//!
//! Components are stateless renderers (or hold only layout state) and
//! receive everything they draw through a view context.

mod curriculum_detail;
mod curriculum_list;
mod filter_bar;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use curriculum_detail::{CurriculumDetailComponent, CurriculumDetailViewContext};
pub use curriculum_list::{CurriculumListComponent, CurriculumListViewContext, ResultRow};
pub use filter_bar::{FilterBarComponent, FilterBarFocus, FilterBarViewContext};
