//! Curriculum records and the closed tag enumerations they carry.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnknownTagError;

/// Coarse grade-level tag attached to a curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeLevel {
    /// Kindergarten through grade 5.
    Elementary,
    /// Grades 6 to 8.
    Middle,
    /// Grades 9 to 12.
    High,
    /// Usable across every grade band.
    All,
}

impl GradeLevel {
    /// Every grade level in display order.
    pub const VALUES: [Self; 4] = [Self::Elementary, Self::Middle, Self::High, Self::All];

    /// Returns the tag as it appears in catalogue files and query strings.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Elementary => "elementary",
            Self::Middle => "middle",
            Self::High => "high",
            Self::All => "all",
        }
    }

    /// Returns the built-in display name for this grade level.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Elementary => "Elementary (K-5)",
            Self::Middle => "Middle School (6-8)",
            Self::High => "High School (9-12)",
            Self::All => "All Grades",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GradeLevel {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::VALUES
            .into_iter()
            .find(|grade| grade.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownTagError::Grade {
                value: needle.to_owned(),
            })
    }
}

/// Subject-area tag attached to a curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// General computer science.
    Cs,
    /// Computational thinking.
    Ct,
    /// Artificial intelligence and language models.
    Ai,
    /// Cybersecurity.
    Cybersecurity,
    /// Robotics and physical computing.
    Robotics,
    /// Data science.
    Data,
    /// Web and app development.
    Web,
}

impl Topic {
    /// Every topic in display order.
    pub const VALUES: [Self; 7] = [
        Self::Cs,
        Self::Ct,
        Self::Ai,
        Self::Cybersecurity,
        Self::Robotics,
        Self::Data,
        Self::Web,
    ];

    /// Returns the tag as it appears in catalogue files and query strings.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::Ct => "ct",
            Self::Ai => "ai",
            Self::Cybersecurity => "cybersecurity",
            Self::Robotics => "robotics",
            Self::Data => "data",
            Self::Web => "web",
        }
    }

    /// Returns the built-in display name for this topic.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Cs => "Computer Science",
            Self::Ct => "Computational Thinking",
            Self::Ai => "Artificial Intelligence",
            Self::Cybersecurity => "Cybersecurity",
            Self::Robotics => "Robotics",
            Self::Data => "Data Science",
            Self::Web => "Web Development",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Topic {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::VALUES
            .into_iter()
            .find(|topic| topic.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownTagError::Topic {
                value: needle.to_owned(),
            })
    }
}

/// An external curriculum listed in the directory.
///
/// Records are read-only once a [`Catalogue`](super::Catalogue) has been
/// built; the directory never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    /// Stable identifier, unique within a catalogue.
    pub id: String,
    /// Curriculum title.
    pub name: String,
    /// Publishing organisation.
    pub organization: String,
    /// Short description shown on the card.
    pub description: String,
    /// Human-readable grade span (e.g. "K-5").
    pub grade_range: String,
    /// Link to the external resource.
    pub url: String,
    /// Grade bands the curriculum targets.
    pub grades: BTreeSet<GradeLevel>,
    /// Subject areas the curriculum covers.
    pub topics: BTreeSet<Topic>,
    /// Whether the curriculum is free to use.
    #[serde(default)]
    pub is_free: bool,
    /// Whether the publisher documents standards alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_standards_alignment: Option<bool>,
    /// Free-text notes about standards alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standards_notes: Option<String>,
}

impl Curriculum {
    /// Returns true when the curriculum carries any of the given grades.
    #[must_use]
    pub fn has_any_grade(&self, grades: &BTreeSet<GradeLevel>) -> bool {
        !self.grades.is_disjoint(grades)
    }

    /// Returns true when the curriculum covers any of the given topics.
    #[must_use]
    pub fn has_any_topic(&self, topics: &BTreeSet<Topic>) -> bool {
        !self.topics.is_disjoint(topics)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("elementary", GradeLevel::Elementary)]
    #[case("Middle", GradeLevel::Middle)]
    #[case(" high ", GradeLevel::High)]
    #[case("all", GradeLevel::All)]
    fn grade_level_parses_keys(#[case] input: &str, #[case] expected: GradeLevel) {
        assert_eq!(input.parse::<GradeLevel>().ok(), Some(expected));
    }

    #[test]
    fn grade_level_rejects_unknown_tag() {
        let error = "college".parse::<GradeLevel>().expect_err("should reject");
        assert_eq!(error.to_string(), "unknown grade level 'college'");
    }

    #[rstest]
    #[case("cs", Topic::Cs)]
    #[case("AI", Topic::Ai)]
    #[case("cybersecurity", Topic::Cybersecurity)]
    #[case("web", Topic::Web)]
    fn topic_parses_keys(#[case] input: &str, #[case] expected: Topic) {
        assert_eq!(input.parse::<Topic>().ok(), Some(expected));
    }

    #[test]
    fn topic_display_matches_key() {
        for topic in Topic::VALUES {
            assert_eq!(topic.to_string(), topic.key());
        }
    }

    #[test]
    fn curriculum_deserialises_camel_case_fields() {
        let json = r#"{
            "id": "scratch",
            "name": "Scratch",
            "organization": "MIT Media Lab",
            "description": "Block-based programming",
            "gradeRange": "K-8",
            "url": "https://scratch.mit.edu/educators",
            "grades": ["elementary", "middle"],
            "topics": ["cs", "ct"],
            "isFree": true,
            "hasStandardsAlignment": true,
            "standardsNotes": "CSTA aligned"
        }"#;

        let curriculum: Curriculum = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(curriculum.grade_range, "K-8");
        assert!(curriculum.is_free);
        assert_eq!(curriculum.has_standards_alignment, Some(true));
        assert!(curriculum.grades.contains(&GradeLevel::Middle));
        assert!(curriculum.topics.contains(&Topic::Ct));
    }

    #[test]
    fn curriculum_rejects_out_of_enumeration_tags() {
        let json = r#"{
            "id": "x", "name": "X", "organization": "O", "description": "D",
            "gradeRange": "K", "url": "https://example.com",
            "grades": ["kindergarten"], "topics": ["cs"]
        }"#;

        assert!(serde_json::from_str::<Curriculum>(json).is_err());
    }
}
