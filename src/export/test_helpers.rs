//! Shared fixtures for export tests.

use crate::catalogue::test_support::curriculum;
use crate::catalogue::{Catalogue, GradeLevel, Topic};
use crate::directory::DirectoryState;

/// Four curricula covering three buckets: one elementary, one middle, one
/// high, and one spanning elementary and middle.
pub fn sample_state() -> DirectoryState {
    let catalogue = Catalogue::new(vec![
        curriculum("blocks", &[GradeLevel::Elementary], &[Topic::Cs]),
        curriculum("algebra", &[GradeLevel::Middle], &[Topic::Cs, Topic::Data]),
        curriculum("ai-lab", &[GradeLevel::High], &[Topic::Ai]),
        curriculum(
            "robots",
            &[GradeLevel::Elementary, GradeLevel::Middle],
            &[Topic::Robotics],
        ),
    ])
    .expect("fixture catalogue is valid");
    DirectoryState::new(catalogue)
}

/// Asserts that `haystack` contains `needle`, returning an error if not.
pub fn assert_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(format!(
            "expected output to contain '{needle}', got:\n{haystack}"
        ))
    }
}

/// Asserts that `haystack` does NOT contain `needle`, returning an error if it does.
pub fn assert_not_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Err(format!(
            "expected output to NOT contain '{needle}', got:\n{haystack}"
        ))
    } else {
        Ok(())
    }
}
