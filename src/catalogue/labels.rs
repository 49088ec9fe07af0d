//! Display-name lookups for grade and topic tags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::{GradeLevel, Topic};

/// Display names for grade and topic tags.
///
/// Catalogue files may override any subset of the built-in names; tags
/// without an override fall back to [`GradeLevel::default_label`] and
/// [`Topic::default_label`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default)]
    grades: BTreeMap<GradeLevel, String>,
    #[serde(default)]
    topics: BTreeMap<Topic, String>,
}

impl Labels {
    /// Creates a label set with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the display name of a grade level.
    #[must_use]
    pub fn with_grade(mut self, grade: GradeLevel, label: impl Into<String>) -> Self {
        self.grades.insert(grade, label.into());
        self
    }

    /// Overrides the display name of a topic.
    #[must_use]
    pub fn with_topic(mut self, topic: Topic, label: impl Into<String>) -> Self {
        self.topics.insert(topic, label.into());
        self
    }

    /// Returns the display name for a grade level.
    #[must_use]
    pub fn grade(&self, grade: GradeLevel) -> &str {
        self.grades
            .get(&grade)
            .map_or_else(|| grade.default_label(), String::as_str)
    }

    /// Returns the display name for a topic.
    #[must_use]
    pub fn topic(&self, topic: Topic) -> &str {
        self.topics
            .get(&topic)
            .map_or_else(|| topic.default_label(), String::as_str)
    }
}
