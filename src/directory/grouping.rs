//! Grade-band grouping of curricula and per-bucket expansion state.
//!
//! Buckets are mutually exclusive. A curriculum lands in a single-band bucket
//! only when that band is its one and only grade tag; anything tagged with
//! several bands, or with `all`, lands in the multi-grade bucket.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalogue::{Curriculum, GradeLevel};

/// Identity of a display bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    /// Curricula tagged only `elementary`.
    Elementary,
    /// Curricula tagged only `middle`.
    Middle,
    /// Curricula tagged only `high`.
    High,
    /// Everything else.
    MultiGrade,
}

/// Fixed colour theme of a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketTheme {
    /// Elementary bucket colour.
    Green,
    /// Middle school bucket colour.
    Blue,
    /// High school bucket colour.
    Purple,
    /// Multi-grade bucket colour.
    Orange,
}

impl BucketTheme {
    /// Returns the ANSI SGR sequence used to colour bucket headers.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Green => "\x1b[32m",
            Self::Blue => "\x1b[34m",
            Self::Purple => "\x1b[35m",
            Self::Orange => "\x1b[33m",
        }
    }
}

/// A bucket name that is not one of the four fixed buckets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown bucket '{value}' (expected elementary, middle, high, or multi-grade)")]
pub struct UnknownBucketError {
    /// The rejected value.
    pub value: String,
}

impl BucketKey {
    /// Every bucket in display order.
    pub const VALUES: [Self; 4] = [Self::Elementary, Self::Middle, Self::High, Self::MultiGrade];

    /// Returns the bucket identifier used in queries and exports.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Elementary => "elementary",
            Self::Middle => "middle",
            Self::High => "high",
            Self::MultiGrade => "multi-grade",
        }
    }

    /// Returns the bucket heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Elementary => "Elementary School",
            Self::Middle => "Middle School",
            Self::High => "High School",
            Self::MultiGrade => "Multi-Grade / All Levels",
        }
    }

    /// Returns the bucket icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Elementary => "🎒",
            Self::Middle => "🧪",
            Self::High => "🎓",
            Self::MultiGrade => "🌐",
        }
    }

    /// Returns the bucket colour theme.
    #[must_use]
    pub const fn theme(self) -> BucketTheme {
        match self {
            Self::Elementary => BucketTheme::Green,
            Self::Middle => BucketTheme::Blue,
            Self::High => BucketTheme::Purple,
            Self::MultiGrade => BucketTheme::Orange,
        }
    }

    /// Returns the bucket a curriculum with these grade tags belongs to.
    #[must_use]
    pub fn for_grades(grades: &BTreeSet<GradeLevel>) -> Self {
        let mut tags = grades.iter();
        match (tags.next(), tags.next()) {
            (Some(GradeLevel::Elementary), None) => Self::Elementary,
            (Some(GradeLevel::Middle), None) => Self::Middle,
            (Some(GradeLevel::High), None) => Self::High,
            _ => Self::MultiGrade,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BucketKey {
    type Err = UnknownBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elementary" => Ok(Self::Elementary),
            "middle" => Ok(Self::Middle),
            "high" => Ok(Self::High),
            "multi-grade" | "multigrade" | "multi" | "all" => Ok(Self::MultiGrade),
            _ => Err(UnknownBucketError {
                value: s.trim().to_owned(),
            }),
        }
    }
}

/// A non-empty bucket ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a> {
    /// Bucket identity.
    pub key: BucketKey,
    /// Members in input order.
    pub members: Vec<&'a Curriculum>,
}

/// Curricula partitioned into the four grade-band buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Curricula tagged only `elementary`.
    pub elementary: Vec<&'a Curriculum>,
    /// Curricula tagged only `middle`.
    pub middle: Vec<&'a Curriculum>,
    /// Curricula tagged only `high`.
    pub high: Vec<&'a Curriculum>,
    /// Everything else.
    pub multi_grade: Vec<&'a Curriculum>,
}

impl<'a> Partition<'a> {
    /// Returns the members of one bucket.
    #[must_use]
    pub fn members(&self, key: BucketKey) -> &[&'a Curriculum] {
        match key {
            BucketKey::Elementary => &self.elementary,
            BucketKey::Middle => &self.middle,
            BucketKey::High => &self.high,
            BucketKey::MultiGrade => &self.multi_grade,
        }
    }

    /// Returns the buckets that have members, in display order.
    #[must_use]
    pub fn non_empty(&self) -> Vec<Bucket<'a>> {
        BucketKey::VALUES
            .into_iter()
            .filter_map(|key| {
                let members = self.members(key);
                (!members.is_empty()).then(|| Bucket {
                    key,
                    members: members.to_vec(),
                })
            })
            .collect()
    }

    /// Returns the total number of partitioned curricula.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elementary.len() + self.middle.len() + self.high.len() + self.multi_grade.len()
    }

    /// Returns true when no curricula were partitioned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, key: BucketKey) -> &mut Vec<&'a Curriculum> {
        match key {
            BucketKey::Elementary => &mut self.elementary,
            BucketKey::Middle => &mut self.middle,
            BucketKey::High => &mut self.high,
            BucketKey::MultiGrade => &mut self.multi_grade,
        }
    }
}

/// Partitions curricula into grade-band buckets, preserving input order
/// within each bucket.
pub fn partition<'a, I>(curricula: I) -> Partition<'a>
where
    I: IntoIterator<Item = &'a Curriculum>,
{
    let mut result = Partition::default();
    for curriculum in curricula {
        result
            .bucket_mut(BucketKey::for_grades(&curriculum.grades))
            .push(curriculum);
    }
    result
}

/// Display state of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketState {
    /// Only the heading is shown.
    Collapsed,
    /// The heading and members are shown.
    Expanded,
}

/// Which buckets are expanded. Every bucket starts collapsed and toggles
/// independently of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<BucketKey>,
}

impl ExpansionState {
    /// Creates a state with every bucket collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with the given buckets expanded.
    #[must_use]
    pub fn with_expanded(keys: impl IntoIterator<Item = BucketKey>) -> Self {
        Self {
            expanded: keys.into_iter().collect(),
        }
    }

    /// Flips one bucket between collapsed and expanded.
    pub fn toggle(&mut self, key: BucketKey) {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    /// Returns the state of one bucket.
    #[must_use]
    pub fn state(&self, key: BucketKey) -> BucketState {
        if self.expanded.contains(&key) {
            BucketState::Expanded
        } else {
            BucketState::Collapsed
        }
    }

    /// Returns true when the bucket is expanded.
    #[must_use]
    pub fn is_expanded(&self, key: BucketKey) -> bool {
        self.expanded.contains(&key)
    }

    /// Expands every bucket.
    pub fn expand_all(&mut self) {
        self.expanded.extend(BucketKey::VALUES);
    }

    /// Collapses every bucket.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Returns the expanded bucket keys.
    #[must_use]
    pub const fn expanded(&self) -> &BTreeSet<BucketKey> {
        &self.expanded
    }
}
