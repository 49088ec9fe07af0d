//! Shared test utilities.

use curricula::catalogue::test_support::curriculum;
use curricula::{Catalogue, Curriculum, GradeLevel, Topic};

/// Builds the catalogue used by the behavioural scenarios.
///
/// | id       | grades             | topics        |
/// |----------|--------------------|---------------|
/// | scratch  | elementary         | cs, ct        |
/// | algebra  | middle             | cs, data      |
/// | ai-lab   | high               | ai            |
/// | robots   | elementary, middle | robotics      |
/// | everyone | all                | cybersecurity |
///
/// # Panics
///
/// Panics if the fixture records fail validation.
pub fn sample_catalogue() -> Catalogue {
    Catalogue::new(vec![
        curriculum("scratch", &[GradeLevel::Elementary], &[Topic::Cs, Topic::Ct]),
        curriculum("algebra", &[GradeLevel::Middle], &[Topic::Cs, Topic::Data]),
        curriculum("ai-lab", &[GradeLevel::High], &[Topic::Ai]),
        curriculum(
            "robots",
            &[GradeLevel::Elementary, GradeLevel::Middle],
            &[Topic::Robotics],
        ),
        curriculum("everyone", &[GradeLevel::All], &[Topic::Cybersecurity]),
    ])
    .unwrap_or_else(|error| panic!("sample catalogue is invalid: {error}"))
}

/// Joins curriculum ids with commas for comparison with feature text.
pub fn joined_ids<'a>(curricula: impl IntoIterator<Item = &'a Curriculum>) -> String {
    curricula
        .into_iter()
        .map(|curriculum| curriculum.id.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Strips the surrounding quotes from a captured step argument.
pub fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}
