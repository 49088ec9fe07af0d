//! Multi-select filter state for the curriculum directory.
//!
//! A [`FilterSelection`] holds the selected grade levels and topics. An empty
//! set means the dimension is unfiltered, several values within one dimension
//! are OR'd, and the two dimensions are AND'd together.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalogue::{Curriculum, GradeLevel, Labels, Topic};

/// A single filter value from either dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterValue {
    /// A grade-level filter.
    Grade(GradeLevel),
    /// A topic filter.
    Topic(Topic),
}

impl FilterValue {
    /// Returns the display label for this value.
    #[must_use]
    pub fn label(self, labels: &Labels) -> &str {
        match self {
            Self::Grade(grade) => labels.grade(grade),
            Self::Topic(topic) => labels.topic(topic),
        }
    }
}

/// A removable chip representing one active filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// The filter value removed when the chip is dismissed.
    pub value: FilterValue,
    /// Display label for the chip.
    pub label: String,
}

/// Selected grade levels and topics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    grades: BTreeSet<GradeLevel>,
    topics: BTreeSet<Topic>,
}

impl FilterSelection {
    /// Creates an empty selection that matches every curriculum.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection from explicit grade and topic sets.
    #[must_use]
    pub const fn from_parts(grades: BTreeSet<GradeLevel>, topics: BTreeSet<Topic>) -> Self {
        Self { grades, topics }
    }

    /// Returns the selected grade levels.
    #[must_use]
    pub const fn grades(&self) -> &BTreeSet<GradeLevel> {
        &self.grades
    }

    /// Returns the selected topics.
    #[must_use]
    pub const fn topics(&self) -> &BTreeSet<Topic> {
        &self.topics
    }

    /// Adds `grade` if absent, removes it if present.
    pub fn toggle_grade(&mut self, grade: GradeLevel) {
        if !self.grades.remove(&grade) {
            self.grades.insert(grade);
        }
    }

    /// Adds `topic` if absent, removes it if present.
    pub fn toggle_topic(&mut self, topic: Topic) {
        if !self.topics.remove(&topic) {
            self.topics.insert(topic);
        }
    }

    /// Toggles a value in whichever dimension it belongs to.
    ///
    /// Unchecking a dropdown option and dismissing a chip both land here.
    pub fn toggle(&mut self, value: FilterValue) {
        match value {
            FilterValue::Grade(grade) => self.toggle_grade(grade),
            FilterValue::Topic(topic) => self.toggle_topic(topic),
        }
    }

    /// Replaces the grade selection wholesale.
    pub fn set_grades(&mut self, grades: BTreeSet<GradeLevel>) {
        self.grades = grades;
    }

    /// Replaces the topic selection wholesale.
    pub fn set_topics(&mut self, topics: BTreeSet<Topic>) {
        self.topics = topics;
    }

    /// Empties both dimensions.
    pub fn clear_all(&mut self) {
        self.grades.clear();
        self.topics.clear();
    }

    /// Returns true when any filter value is selected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.grades.is_empty() || !self.topics.is_empty()
    }

    /// Returns true when the given value is selected.
    #[must_use]
    pub fn contains(&self, value: FilterValue) -> bool {
        match value {
            FilterValue::Grade(grade) => self.grades.contains(&grade),
            FilterValue::Topic(topic) => self.topics.contains(&topic),
        }
    }

    /// Returns true when the curriculum passes both dimensions.
    #[must_use]
    pub fn matches(&self, curriculum: &Curriculum) -> bool {
        let grade_match = self.grades.is_empty() || curriculum.has_any_grade(&self.grades);
        let topic_match = self.topics.is_empty() || curriculum.has_any_topic(&self.topics);
        grade_match && topic_match
    }

    /// Applies this selection to `curricula`, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, curricula: &'a [Curriculum]) -> Vec<&'a Curriculum> {
        curricula
            .iter()
            .filter(|curriculum| self.matches(curriculum))
            .collect()
    }

    /// Returns the active filters as chips: grades first, then topics, each
    /// in enumeration order.
    #[must_use]
    pub fn chips(&self, labels: &Labels) -> Vec<FilterChip> {
        let grades = self.grades.iter().map(|&grade| FilterValue::Grade(grade));
        let topics = self.topics.iter().map(|&topic| FilterValue::Topic(topic));
        grades
            .chain(topics)
            .map(|value| FilterChip {
                value,
                label: value.label(labels).to_owned(),
            })
            .collect()
    }
}

/// Returns the curricula passing the grade and topic filters, in input order.
#[must_use]
pub fn compute_visible<'a>(
    curricula: &'a [Curriculum],
    grades: &BTreeSet<GradeLevel>,
    topics: &BTreeSet<Topic>,
) -> Vec<&'a Curriculum> {
    let selection = FilterSelection::from_parts(grades.clone(), topics.clone());
    selection.apply(curricula)
}

/// The "results count" read-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsSummary {
    /// Number of curricula passing the filters.
    pub visible: usize,
    /// Number of curricula in the catalogue.
    pub total: usize,
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 {
            "curriculum"
        } else {
            "curricula"
        };
        write!(f, "Showing {} of {} {noun}", self.visible, self.total)
    }
}
