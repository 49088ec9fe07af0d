//! Curricula library crate: a filterable directory of K-12 computer science
//! curricula.
//!
//! The library validates a curriculum catalogue, applies multi-select grade
//! and topic filters, partitions the results into exclusive grade-band
//! buckets, and models the dropdowns that drive the filters, including the
//! outside-click listeners that close them. The same state powers the
//! interactive terminal UI and the non-interactive exports.

pub mod catalogue;
pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod telemetry;
pub mod tui;

pub use catalogue::{
    Catalogue, CatalogueError, CatalogueSource, Curriculum, EmbeddedCatalogue, FileCatalogue,
    GradeLevel, Labels, Topic, load_catalogue,
};
pub use config::{CurriculaConfig, OperationMode};
pub use directory::{
    BucketKey, DirectoryState, FilterKind, FilterSelection, InitialSelection, ViewMode,
    compute_visible, partition,
};
pub use error::CurriculaError;
pub use export::{ExportDocument, ExportFormat};
