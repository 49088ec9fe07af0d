//! Export data models for directory output.
//!
//! This module defines the serialisable snapshot rendered by every export
//! format and the format selection enum for CLI integration.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalogue::{Curriculum, Labels};
use crate::directory::{BucketKey, DirectoryState, ResultsSummary};
use crate::error::CurriculaError;

/// A curriculum prepared for export.
///
/// Grade and topic keys are kept for machine consumers alongside their
/// display labels.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportedCurriculum {
    /// Stable identifier.
    pub id: String,
    /// Curriculum title.
    pub name: String,
    /// Publishing organisation.
    pub organization: String,
    /// Short description.
    pub description: String,
    /// Human-readable grade span.
    pub grade_range: String,
    /// Link to the external resource.
    pub url: String,
    /// Grade keys in canonical order.
    pub grades: Vec<String>,
    /// Topic keys in canonical order.
    pub topics: Vec<String>,
    /// Topic display labels, parallel to `topics`.
    pub topic_labels: Vec<String>,
    /// Key of the grade-band bucket the curriculum belongs to.
    pub bucket: String,
    /// Whether the curriculum is free to use.
    pub is_free: bool,
    /// Whether the publisher documents standards alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_standards_alignment: Option<bool>,
    /// Free-text notes about standards alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standards_notes: Option<String>,
}

impl ExportedCurriculum {
    /// Builds an export record, resolving topic labels from `labels`.
    #[must_use]
    pub fn new(curriculum: &Curriculum, labels: &Labels) -> Self {
        Self {
            id: curriculum.id.clone(),
            name: curriculum.name.clone(),
            organization: curriculum.organization.clone(),
            description: curriculum.description.clone(),
            grade_range: curriculum.grade_range.clone(),
            url: curriculum.url.clone(),
            grades: curriculum
                .grades
                .iter()
                .map(|grade| grade.key().to_owned())
                .collect(),
            topics: curriculum
                .topics
                .iter()
                .map(|topic| topic.key().to_owned())
                .collect(),
            topic_labels: curriculum
                .topics
                .iter()
                .map(|topic| labels.topic(*topic).to_owned())
                .collect(),
            bucket: BucketKey::for_grades(&curriculum.grades).key().to_owned(),
            is_free: curriculum.is_free,
            has_standards_alignment: curriculum.has_standards_alignment,
            standards_notes: curriculum.standards_notes.clone(),
        }
    }
}

/// One non-empty grade-band bucket.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportedGroup {
    /// Bucket key (`elementary`, `middle`, `high`, `multi-grade`).
    pub key: String,
    /// Bucket heading.
    pub label: String,
    /// Bucket icon.
    pub icon: String,
    /// Members in catalogue order.
    pub curricula: Vec<ExportedCurriculum>,
}

/// Snapshot of the filtered directory shared by all export formats.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportDocument {
    /// Labels of the active filters, grades first.
    pub filters: Vec<String>,
    /// Number of curricula passing the filters.
    pub visible: usize,
    /// Number of curricula in the catalogue.
    pub total: usize,
    /// Visible curricula in catalogue order.
    pub curricula: Vec<ExportedCurriculum>,
    /// Non-empty buckets in display order.
    pub groups: Vec<ExportedGroup>,
}

impl ExportDocument {
    /// Captures the visible curricula and their grouping from `state`.
    #[must_use]
    pub fn from_state(state: &DirectoryState) -> Self {
        let labels = state.catalogue().labels();
        let groups = state
            .groups()
            .non_empty()
            .into_iter()
            .map(|bucket| ExportedGroup {
                key: bucket.key.key().to_owned(),
                label: bucket.key.label().to_owned(),
                icon: bucket.key.icon().to_owned(),
                curricula: bucket
                    .members
                    .iter()
                    .map(|curriculum| ExportedCurriculum::new(curriculum, labels))
                    .collect(),
            })
            .collect();
        let summary = state.results_summary();

        Self {
            filters: state.chips().into_iter().map(|chip| chip.label).collect(),
            visible: summary.visible,
            total: summary.total,
            curricula: state
                .visible()
                .into_iter()
                .map(|curriculum| ExportedCurriculum::new(curriculum, labels))
                .collect(),
            groups,
        }
    }

    /// Returns the "Showing N of M" read-out.
    #[must_use]
    pub const fn summary(&self) -> ResultsSummary {
        ResultsSummary {
            visible: self.visible,
            total: self.total,
        }
    }
}

/// Supported built-in export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Human-readable Markdown grouped by grade band.
    Markdown,
    /// Machine-readable JSON Lines (one object per line).
    Jsonl,
}

impl FromStr for ExportFormat {
    type Err = CurriculaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "jsonl" | "json-lines" | "jsonlines" => Ok(Self::Jsonl),
            _ => Err(CurriculaError::Configuration {
                message: format!(
                    "unsupported export format '{s}': valid options are 'markdown' or 'jsonl'"
                ),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}
