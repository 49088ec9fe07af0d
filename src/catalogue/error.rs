//! Error types for catalogue loading and tag parsing.

use thiserror::Error;

/// A grade or topic value outside its closed enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnknownTagError {
    /// The value is not a known grade level.
    #[error("unknown grade level '{value}'")]
    Grade {
        /// The rejected value.
        value: String,
    },

    /// The value is not a known topic.
    #[error("unknown topic '{value}'")]
    Topic {
        /// The rejected value.
        value: String,
    },
}

/// Errors raised while loading or validating a curriculum catalogue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue '{path}': {message}")]
    Io {
        /// Path of the catalogue file.
        path: String,
        /// Error detail from the filesystem.
        message: String,
    },

    /// The catalogue document is not valid JSON or contains unknown tags.
    #[error("failed to parse catalogue: {message}")]
    Parse {
        /// Error detail from the JSON parser.
        message: String,
    },

    /// A curriculum has an empty identifier.
    #[error("curriculum at position {index} has an empty id")]
    EmptyId {
        /// Zero-based position in the catalogue.
        index: usize,
    },

    /// Two curricula share the same identifier.
    #[error("duplicate curriculum id '{id}'")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// A curriculum carries no grade tags.
    #[error("curriculum '{id}' has no grade levels")]
    MissingGrades {
        /// Identifier of the offending curriculum.
        id: String,
    },

    /// A curriculum carries no topic tags.
    #[error("curriculum '{id}' has no topics")]
    MissingTopics {
        /// Identifier of the offending curriculum.
        id: String,
    },

    /// A curriculum link is not an absolute URL.
    #[error("curriculum '{id}' has an invalid url '{url}': {message}")]
    InvalidUrl {
        /// Identifier of the offending curriculum.
        id: String,
        /// The rejected link.
        url: String,
        /// Error detail from the URL parser.
        message: String,
    },
}

impl From<serde_json::Error> for CatalogueError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse {
            message: error.to_string(),
        }
    }
}
