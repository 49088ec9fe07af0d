//! Curriculum catalogue consumed by the directory.
//!
//! A [`Catalogue`] is the immutable data feed behind every directory view:
//! the curriculum records plus the label lookups used to display their tags.
//! It is constructed explicitly (from the bundled data or a file) and handed
//! to the directory state, so tests can substitute their own records.
//!
//! Construction validates every record up front. Tags outside the closed
//! grade and topic enumerations are rejected while parsing; empty tag sets,
//! missing or duplicate ids and malformed links are rejected by
//! [`Catalogue::new`].

mod error;
mod labels;
mod model;
mod source;

use std::collections::BTreeSet;

use serde::Deserialize;

pub use error::{CatalogueError, UnknownTagError};
pub use labels::Labels;
pub use model::{Curriculum, GradeLevel, Topic};
#[cfg(test)]
pub use source::MockCatalogueSource;
pub use source::{CatalogueSource, EmbeddedCatalogue, FileCatalogue, load_catalogue};

/// Validated, read-only collection of curricula and their display labels.
///
/// The default catalogue is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    curricula: Vec<Curriculum>,
    labels: Labels,
}

/// On-disk shape of a catalogue file.
#[derive(Debug, Deserialize)]
struct CatalogueDocument {
    #[serde(default)]
    labels: Labels,
    curricula: Vec<Curriculum>,
}

impl Catalogue {
    /// Builds a catalogue from curriculum records using the default labels.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] describing the first invalid record:
    /// an empty or duplicate id, an empty grade or topic set, or a link
    /// that is not an absolute URL.
    pub fn new(curricula: Vec<Curriculum>) -> Result<Self, CatalogueError> {
        validate(&curricula)?;
        Ok(Self {
            curricula,
            labels: Labels::default(),
        })
    }

    /// Parses and validates a JSON catalogue document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Parse`] for malformed JSON or unknown tags,
    /// or a validation error as described in [`Catalogue::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let document: CatalogueDocument = serde_json::from_str(json)?;
        Ok(Self::new(document.curricula)?.with_labels(document.labels))
    }

    /// Replaces the label lookups.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Returns all curricula in catalogue order.
    #[must_use]
    pub fn curricula(&self) -> &[Curriculum] {
        &self.curricula
    }

    /// Returns the label lookups.
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Returns the number of curricula.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.curricula.len()
    }

    /// Returns true when the catalogue holds no curricula.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.curricula.is_empty()
    }

    /// Looks up a curriculum by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Curriculum> {
        self.curricula.iter().find(|curriculum| curriculum.id == id)
    }
}

fn validate(curricula: &[Curriculum]) -> Result<(), CatalogueError> {
    let mut seen = BTreeSet::new();
    for (index, curriculum) in curricula.iter().enumerate() {
        validate_record(index, curriculum)?;
        if !seen.insert(curriculum.id.as_str()) {
            return Err(CatalogueError::DuplicateId {
                id: curriculum.id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_record(index: usize, curriculum: &Curriculum) -> Result<(), CatalogueError> {
    if curriculum.id.trim().is_empty() {
        return Err(CatalogueError::EmptyId { index });
    }
    if curriculum.grades.is_empty() {
        return Err(CatalogueError::MissingGrades {
            id: curriculum.id.clone(),
        });
    }
    if curriculum.topics.is_empty() {
        return Err(CatalogueError::MissingTopics {
            id: curriculum.id.clone(),
        });
    }
    url::Url::parse(&curriculum.url).map_err(|error| CatalogueError::InvalidUrl {
        id: curriculum.id.clone(),
        url: curriculum.url.clone(),
        message: error.to_string(),
    })?;
    Ok(())
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    //! Builders for curriculum fixtures shared by unit and behavioural tests.

    use std::collections::BTreeSet;

    use super::{Curriculum, GradeLevel, Topic};

    /// Builds a minimal valid curriculum with the given tags.
    ///
    /// The name is derived from the id so assertions can match on either.
    #[must_use]
    pub fn curriculum(id: &str, grades: &[GradeLevel], topics: &[Topic]) -> Curriculum {
        Curriculum {
            id: id.to_owned(),
            name: format!("Curriculum {id}"),
            organization: "Example Org".to_owned(),
            description: format!("Description of {id}"),
            grade_range: "K-12".to_owned(),
            url: format!("https://example.org/{id}"),
            grades: grades.iter().copied().collect::<BTreeSet<_>>(),
            topics: topics.iter().copied().collect::<BTreeSet<_>>(),
            is_free: true,
            has_standards_alignment: None,
            standards_notes: None,
        }
    }
}
