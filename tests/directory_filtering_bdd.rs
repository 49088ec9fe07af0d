//! Behavioural tests for multi-select grade and topic filtering.

mod support;

use curricula::directory::{FilterChip, FilterValue};
use curricula::{DirectoryState, GradeLevel, InitialSelection, Topic};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use support::{joined_ids, sample_catalogue, unquote};

type StepResult = Result<(), Box<dyn std::error::Error>>;

#[derive(ScenarioState, Default)]
struct FilterState {
    directory: Slot<DirectoryState>,
}

#[fixture]
fn filter_state() -> FilterState {
    FilterState::default()
}

impl FilterState {
    fn update(&self, change: impl FnOnce(&mut DirectoryState)) -> StepResult {
        self.directory
            .with_mut(change)
            .ok_or("directory should be initialised")?;
        Ok(())
    }

    fn read<T>(&self, query: impl FnOnce(&DirectoryState) -> T) -> Result<T, &'static str> {
        self.directory
            .with_ref(query)
            .ok_or("directory should be initialised")
    }
}

// --- Given steps ---

#[given("a directory over the sample catalogue")]
fn given_sample_directory(filter_state: &FilterState) {
    filter_state
        .directory
        .set(DirectoryState::new(sample_catalogue()));
}

#[given("a directory opened with query {query}")]
fn given_directory_with_query(filter_state: &FilterState, query: String) -> StepResult {
    let initial = InitialSelection::from_query(unquote(&query))?;
    filter_state
        .directory
        .set(DirectoryState::new(sample_catalogue()).with_initial(initial));
    Ok(())
}

// --- When steps ---

#[when("the grade {grade} is toggled")]
fn when_grade_toggled(filter_state: &FilterState, grade: String) -> StepResult {
    let value: GradeLevel = grade.parse()?;
    filter_state.update(|directory| directory.toggle_grade_filter(value))
}

#[when("the topic {topic} is toggled")]
fn when_topic_toggled(filter_state: &FilterState, topic: String) -> StepResult {
    let value: Topic = topic.parse()?;
    filter_state.update(|directory| directory.toggle_topic_filter(value))
}

#[when("the topic {topic} chip is removed")]
fn when_topic_chip_removed(filter_state: &FilterState, topic: String) -> StepResult {
    let value = FilterValue::Topic(topic.parse()?);
    let chip = filter_state
        .read(|directory| {
            directory
                .chips()
                .into_iter()
                .find(|chip: &FilterChip| chip.value == value)
        })?
        .ok_or("expected a chip for the topic")?;
    filter_state.update(|directory| directory.remove_chip(&chip))
}

#[when("all filters are cleared")]
fn when_filters_cleared(filter_state: &FilterState) -> StepResult {
    filter_state.update(DirectoryState::clear_all)
}

// --- Then steps ---

#[then("the visible curricula are {ids}")]
fn then_visible_are(filter_state: &FilterState, ids: String) -> StepResult {
    let visible = filter_state.read(|directory| joined_ids(directory.visible()))?;
    assert_eq!(visible, unquote(&ids));
    Ok(())
}

#[then("the summary reads {text}")]
fn then_summary_reads(filter_state: &FilterState, text: String) -> StepResult {
    let summary = filter_state.read(|directory| directory.results_summary().to_string())?;
    assert_eq!(summary, unquote(&text));
    Ok(())
}

#[then("the chips read {labels}")]
fn then_chips_read(filter_state: &FilterState, labels: String) -> StepResult {
    let chips = filter_state.read(|directory| {
        directory
            .chips()
            .into_iter()
            .map(|chip| chip.label)
            .collect::<Vec<_>>()
            .join(",")
    })?;
    assert_eq!(chips, unquote(&labels));
    Ok(())
}

#[then("no filter chips are shown")]
fn then_no_chips(filter_state: &FilterState) -> StepResult {
    let (chips, active) = filter_state
        .read(|directory| (directory.chips().len(), directory.selection().is_active()))?;
    assert_eq!(chips, 0);
    assert!(!active);
    Ok(())
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/directory_filtering.feature", index = 0)]
fn without_filters_everything_is_visible(filter_state: FilterState) {
    let _ = filter_state;
}

#[scenario(path = "tests/features/directory_filtering.feature", index = 1)]
fn grades_combine_with_or(filter_state: FilterState) {
    let _ = filter_state;
}

#[scenario(path = "tests/features/directory_filtering.feature", index = 2)]
fn grades_and_topics_combine_with_and(filter_state: FilterState) {
    let _ = filter_state;
}

#[scenario(path = "tests/features/directory_filtering.feature", index = 3)]
fn toggling_twice_restores(filter_state: FilterState) {
    let _ = filter_state;
}

#[scenario(path = "tests/features/directory_filtering.feature", index = 4)]
fn removing_a_chip_unchecks_its_option(filter_state: FilterState) {
    let _ = filter_state;
}

#[scenario(path = "tests/features/directory_filtering.feature", index = 5)]
fn clearing_is_idempotent(filter_state: FilterState) {
    let _ = filter_state;
}

#[scenario(path = "tests/features/directory_filtering.feature", index = 6)]
fn contradictory_filters_match_nothing(filter_state: FilterState) {
    let _ = filter_state;
}

#[scenario(path = "tests/features/directory_filtering.feature", index = 7)]
fn query_string_preselects_filters(filter_state: FilterState) {
    let _ = filter_state;
}
