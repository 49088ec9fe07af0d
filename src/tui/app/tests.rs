//! Tests for the directory TUI application model.

use bubbletea_rs::Model;
use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};

use super::*;
use crate::catalogue::test_support::curriculum;
use crate::catalogue::{Catalogue, GradeLevel, Topic};
use crate::directory::{BucketKey, FilterKind, FilterValue};
use crate::tui::components::test_utils::{plain_lines, strip_ansi_codes};

#[fixture]
fn catalogue() -> Catalogue {
    Catalogue::new(vec![
        curriculum("blocks", &[GradeLevel::Elementary], &[Topic::Cs]),
        curriculum("algebra", &[GradeLevel::Middle], &[Topic::Cs, Topic::Data]),
        curriculum("ai-lab", &[GradeLevel::High], &[Topic::Ai]),
        curriculum(
            "robots",
            &[GradeLevel::Elementary, GradeLevel::Middle],
            &[Topic::Robotics],
        ),
    ])
    .expect("valid catalogue")
}

#[fixture]
fn app(catalogue: Catalogue) -> DirectoryApp {
    DirectoryApp::with_dimensions(DirectoryState::new(catalogue), 100, 40)
}

fn key(code: KeyCode) -> Box<dyn std::any::Any + Send> {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn selected_id(app: &DirectoryApp) -> Option<&str> {
    app.selected_curriculum().map(|c| c.id.as_str())
}

#[rstest]
fn list_view_has_one_row_per_curriculum(app: DirectoryApp) {
    assert_eq!(app.row_count(), 4);
    assert_eq!(selected_id(&app), Some("blocks"));
}

#[rstest]
fn cursor_is_clamped_when_filters_shrink_the_results(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::End);
    assert_eq!(app.cursor_position(), 3);

    app.state.toggle_filter(FilterValue::Topic(Topic::Ai));
    app.refresh_after_change();

    assert_eq!(app.row_count(), 1);
    assert_eq!(app.cursor_position(), 0);
    assert_eq!(selected_id(&app), Some("ai-lab"));
}

#[rstest]
fn cursor_movement_stops_at_the_ends(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::CursorUp);
    assert_eq!(app.cursor_position(), 0);

    for _ in 0..10 {
        app.handle_message(&AppMsg::CursorDown);
    }
    assert_eq!(app.cursor_position(), 3);

    app.handle_message(&AppMsg::Home);
    assert_eq!(app.cursor_position(), 0);
}

#[rstest]
fn moving_focus_closes_an_open_dropdown(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::FocusNext);
    assert_eq!(app.focus(), Focus::Dropdown(FilterKind::Grade));

    app.handle_message(&AppMsg::ActivateDropdown);
    assert!(app.state().is_dropdown_open(FilterKind::Grade));
    assert_eq!(app.state().listeners().active_count(), 1);

    app.handle_message(&AppMsg::FocusNext);
    assert_eq!(app.focus(), Focus::Dropdown(FilterKind::Topic));
    assert!(!app.state().is_dropdown_open(FilterKind::Grade));
    assert_eq!(app.state().listeners().active_count(), 0);
}

#[rstest]
fn opening_one_dropdown_closes_the_other(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::FocusNext);
    app.handle_message(&AppMsg::ActivateDropdown);
    app.handle_message(&AppMsg::FocusNext);
    app.handle_message(&AppMsg::ActivateDropdown);

    assert!(!app.state().is_dropdown_open(FilterKind::Grade));
    assert!(app.state().is_dropdown_open(FilterKind::Topic));
    assert!(app.state().listeners().active_count() <= 1);
}

#[rstest]
fn activating_dropdown_outside_dropdown_focus_is_ignored(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::ActivateDropdown);
    assert_eq!(app.state().open_dropdown(), None);
}

#[rstest]
fn keyboard_toggles_an_option_in_the_open_dropdown(mut app: DirectoryApp) {
    app.update(key(KeyCode::Tab));
    app.update(key(KeyCode::Enter));
    app.update(key(KeyCode::Down));
    app.update(key(KeyCode::Char(' ')));

    assert!(app.state().selection().grades().contains(&GradeLevel::Middle));
    assert_eq!(app.row_count(), 2);

    app.update(key(KeyCode::Esc));
    assert_eq!(app.state().open_dropdown(), None);
    assert!(app.state().selection().is_active());
}

#[rstest]
fn removing_a_chip_matches_unchecking_the_option(catalogue: Catalogue) {
    let mut via_chip = DirectoryApp::new(DirectoryState::new(catalogue.clone()));
    via_chip.state.toggle_filter(FilterValue::Grade(GradeLevel::High));
    via_chip.state.toggle_filter(FilterValue::Topic(Topic::Cs));
    via_chip.refresh_after_change();
    via_chip.focus = Focus::Chips;
    via_chip.handle_message(&AppMsg::RemoveChip);

    let mut via_toggle = DirectoryApp::new(DirectoryState::new(catalogue));
    via_toggle.state.toggle_filter(FilterValue::Grade(GradeLevel::High));
    via_toggle.state.toggle_filter(FilterValue::Topic(Topic::Cs));
    via_toggle.state.toggle_filter(FilterValue::Grade(GradeLevel::High));

    assert_eq!(via_chip.state().selection(), via_toggle.state().selection());
}

#[rstest]
fn chip_cursor_is_clamped_after_removal(mut app: DirectoryApp) {
    app.state.toggle_filter(FilterValue::Topic(Topic::Cs));
    app.state.toggle_filter(FilterValue::Topic(Topic::Ai));
    app.refresh_after_change();
    app.focus = Focus::Chips;

    app.handle_message(&AppMsg::ChipRight);
    app.handle_message(&AppMsg::ChipRight);
    assert_eq!(app.chip_cursor(), 1);

    app.handle_message(&AppMsg::RemoveChip);
    assert_eq!(app.chip_cursor(), 0);
    assert_eq!(app.state().chips().len(), 1);
}

#[rstest]
fn clear_filters_restores_every_curriculum(mut app: DirectoryApp) {
    app.state.toggle_filter(FilterValue::Grade(GradeLevel::High));
    app.refresh_after_change();
    assert_eq!(app.row_count(), 1);

    app.handle_message(&AppMsg::ClearFilters);
    assert_eq!(app.row_count(), 4);
    assert!(!app.state().selection().is_active());
}

#[rstest]
fn grouped_view_starts_with_collapsed_headers(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::ToggleView);

    let headers: Vec<_> = app.rows().iter().filter_map(ResultRow::bucket).collect();
    assert_eq!(
        headers,
        [
            BucketKey::Elementary,
            BucketKey::Middle,
            BucketKey::High,
            BucketKey::MultiGrade,
        ]
    );
    assert_eq!(app.row_count(), 4);
    assert_eq!(app.selected_curriculum(), None);
}

#[rstest]
fn activating_a_header_toggles_its_bucket(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::ToggleView);
    app.handle_message(&AppMsg::ActivateRow);

    assert!(app.state().expansion().is_expanded(BucketKey::Elementary));
    assert_eq!(app.row_count(), 5);

    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(selected_id(&app), Some("blocks"));

    app.handle_message(&AppMsg::ActivateRow);
    assert!(app.state().expansion().is_expanded(BucketKey::Elementary));
}

#[rstest]
fn expand_and_collapse_all(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::ToggleView);
    app.handle_message(&AppMsg::ExpandAll);
    assert_eq!(app.row_count(), 8);

    app.handle_message(&AppMsg::End);
    app.handle_message(&AppMsg::CollapseAll);
    assert_eq!(app.row_count(), 4);
    assert_eq!(app.cursor_position(), 3);
}

#[rstest]
fn toggling_view_resets_the_cursor(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::End);
    app.handle_message(&AppMsg::ToggleView);

    assert_eq!(app.state().view(), ViewMode::Grouped);
    assert_eq!(app.cursor_position(), 0);
}

#[rstest]
fn help_overlay_swallows_the_next_key(mut app: DirectoryApp) {
    app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.show_help);

    let cmd = app.update(key(KeyCode::Char('q')));
    assert!(cmd.is_none());
    assert!(!app.show_help);
}

#[rstest]
fn q_quits(mut app: DirectoryApp) {
    let cmd = app.update(key(KeyCode::Char('q')));
    assert!(cmd.is_some());
}

#[rstest]
fn resize_updates_the_viewport(mut app: DirectoryApp) {
    app.update(Box::new(bubbletea_rs::event::WindowSizeMsg {
        width: 60,
        height: 12,
    }));

    let view = app.view();
    let lines: Vec<_> = view.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines.iter().all(|line| strip_ansi_codes(line).chars().count() == 59));
}

#[rstest]
fn view_shows_filters_summary_and_selection(mut app: DirectoryApp) {
    app.state.toggle_filter(FilterValue::Topic(Topic::Cs));
    app.refresh_after_change();

    let lines = plain_lines(&app.view());
    let text = lines.join("\n");
    assert!(text.contains("Curriculum Directory"), "view was:\n{text}");
    assert!(text.contains("Showing 2 of 4 curricula"), "view was:\n{text}");
    assert!(text.contains("× Computer Science"), "view was:\n{text}");
    assert!(text.contains("Curriculum blocks (Example Org)"), "view was:\n{text}");
}

#[rstest]
fn view_with_no_matches_shows_the_empty_message(mut app: DirectoryApp) {
    app.state.toggle_filter(FilterValue::Grade(GradeLevel::High));
    app.state.toggle_filter(FilterValue::Topic(Topic::Web));
    app.refresh_after_change();

    let text = plain_lines(&app.view()).join("\n");
    assert!(text.contains("No curricula match the selected filters."));
    assert!(text.contains("(No curriculum selected)"));
}

#[rstest]
fn status_bar_follows_the_input_context(mut app: DirectoryApp) {
    assert!(app.render_status_bar().contains("v:view"));

    app.handle_message(&AppMsg::FocusNext);
    assert!(app.render_status_bar().contains("Enter:open"));

    app.handle_message(&AppMsg::ActivateDropdown);
    assert!(app.render_status_bar().contains("Space:toggle"));
}
