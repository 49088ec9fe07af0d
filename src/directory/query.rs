//! Initial filter selection from query parameters.
//!
//! The directory can be opened pre-filtered with a URL-style query such as
//! `?grade=high&grade=middle&topic=ai&expand=high`. Values may also be comma
//! separated (`grades=high,middle`), which is how the configuration layer
//! passes list values through.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::catalogue::{GradeLevel, Topic, UnknownTagError};

use super::filter::FilterSelection;
use super::grouping::{BucketKey, UnknownBucketError};

/// Errors raised while reading an initial selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A grade or topic value is outside its enumeration.
    #[error(transparent)]
    UnknownTag(#[from] UnknownTagError),

    /// An `expand` value does not name a bucket.
    #[error(transparent)]
    UnknownBucket(#[from] UnknownBucketError),
}

/// Filters and expanded buckets to start the directory with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialSelection {
    /// Pre-selected filters.
    pub selection: FilterSelection,
    /// Buckets expanded on first render.
    pub expanded: BTreeSet<BucketKey>,
}

impl InitialSelection {
    /// Parses a URL query string. A leading `?` is optional and unknown keys
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when a grade, topic, or bucket value is not
    /// recognised.
    pub fn from_query(query: &str) -> Result<Self, SelectionError> {
        let mut initial = Self::default();
        let trimmed = query.trim().trim_start_matches('?');
        for (key, value) in url::form_urlencoded::parse(trimmed.as_bytes()) {
            match key.as_ref() {
                "grade" | "grades" => initial.add_grades(&value)?,
                "topic" | "topics" => initial.add_topics(&value)?,
                "expand" => initial.add_expanded(&value)?,
                other => tracing::warn!("ignoring unknown query parameter '{other}'"),
            }
        }
        Ok(initial)
    }

    /// Adds comma-separated grade levels to the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownTag`] for an unrecognised grade.
    pub fn add_grades(&mut self, list: &str) -> Result<(), SelectionError> {
        let grades = parse_list::<GradeLevel, UnknownTagError>(list)?;
        let mut merged = self.selection.grades().clone();
        merged.extend(grades);
        self.selection.set_grades(merged);
        Ok(())
    }

    /// Adds comma-separated topics to the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownTag`] for an unrecognised topic.
    pub fn add_topics(&mut self, list: &str) -> Result<(), SelectionError> {
        let topics = parse_list::<Topic, UnknownTagError>(list)?;
        let mut merged = self.selection.topics().clone();
        merged.extend(topics);
        self.selection.set_topics(merged);
        Ok(())
    }

    /// Adds comma-separated bucket keys to the expanded set.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownBucket`] for an unrecognised bucket.
    pub fn add_expanded(&mut self, list: &str) -> Result<(), SelectionError> {
        let keys = parse_list::<BucketKey, UnknownBucketError>(list)?;
        self.expanded.extend(keys);
        Ok(())
    }
}

fn parse_list<T, E>(list: &str) -> Result<BTreeSet<T>, SelectionError>
where
    T: std::str::FromStr<Err = E> + Ord,
    SelectionError: From<E>,
{
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<T>().map_err(SelectionError::from))
        .collect()
}
