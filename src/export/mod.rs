//! Export of the filtered curriculum directory.
//!
//! The same filters used on screen can be applied non-interactively and the
//! result written in one of several formats:
//!
//! - **Markdown**: grouped by grade band, empty bands omitted
//! - **JSONL**: one JSON object per visible curriculum, in catalogue order
//! - **Template**: a user-supplied Jinja2 template rendered with `minijinja`
//!
//! All formats are rendered from an [`ExportDocument`] snapshot of a
//! [`DirectoryState`](crate::directory::DirectoryState).

mod jsonl;
mod markdown;
mod model;
mod template;
#[cfg(test)]
mod test_helpers;

pub use jsonl::write_jsonl;
pub use markdown::write_markdown;
pub use model::{ExportDocument, ExportFormat, ExportedCurriculum, ExportedGroup};
pub use template::write_template;
