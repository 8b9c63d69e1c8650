use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::services::generator::{PLACEHOLDER_CONTENT, PlaceholderGenerator};
use crate::state::draft::{Choice, Fanpage, Tone, Topic};
use time::macros::date;

#[derive(Default)]
struct CountingPublisher {
    calls: AtomicUsize,
}

impl Publisher for CountingPublisher {
    fn publish(&self, request: &PublishRequest<'_>) {
        assert!(!request.content.is_empty());
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl CountingPublisher {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn fill_scenario_a(state: &mut ComposerState) {
    state.edit_field(FieldEdit::Title("Sale".into()));
    state.edit_field(FieldEdit::Topic(Some(Topic::Promotion)));
    state.edit_field(FieldEdit::Tone(Some(Tone::Fun)));
    state.edit_field(FieldEdit::Content("Big discount this weekend only".into()));
    state.edit_field(FieldEdit::Fanpage(Some(Fanpage::Page1)));
    state.edit_field(FieldEdit::PostDate(Some(date!(2030 - 06 - 01))));
}

fn previewing() -> ComposerState {
    let mut state = ComposerState::new();
    fill_scenario_a(&mut state);
    state.submit(&PlaceholderGenerator).unwrap();
    state
}

// =============================================================
// Step
// =============================================================

#[test]
fn step_numbers_and_progress() {
    assert_eq!(Step::Editing.number(), 1);
    assert_eq!(Step::Previewing.number(), 2);
    assert!(Step::Previewing.reached(Step::Editing));
    assert!(Step::Editing.reached(Step::Editing));
    assert!(!Step::Editing.reached(Step::Previewing));
}

#[test]
fn step_headings_differ() {
    assert_eq!(Step::Editing.heading(), "Create a new post");
    assert_eq!(Step::Previewing.heading(), "Preview & publish");
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_state_is_editing_and_empty() {
    let state = ComposerState::new();
    assert_eq!(state.step, Step::Editing);
    assert!(state.generated_content.is_empty());
    assert!(!state.preview_visible);
    for field in Field::ALL {
        assert_eq!(state.error_for(field), None);
    }
    assert!(state.submitted().is_none());
}

// =============================================================
// Field feedback
// =============================================================

#[test]
fn untouched_fields_show_no_error() {
    let mut state = ComposerState::new();
    state.edit_field(FieldEdit::Title("Sale".into()));
    assert_eq!(state.error_for(Field::Content), None);
    assert_eq!(state.error_for(Field::Title), None);
}

#[test]
fn touched_field_errors_update_on_every_change() {
    let mut state = ComposerState::new();
    state.edit_field(FieldEdit::Content("short".into()));
    assert_eq!(state.error_for(Field::Content), Some("Content must be at least 10 characters"));

    state.edit_field(FieldEdit::Content("long enough now".into()));
    assert_eq!(state.error_for(Field::Content), None);
}

#[test]
fn clearing_a_touched_field_brings_the_error_back() {
    let mut state = ComposerState::new();
    state.edit_field(FieldEdit::Title("Sale".into()));
    state.edit_field(FieldEdit::Title(String::new()));
    assert_eq!(state.error_for(Field::Title), Some("Title must not be empty"));
}

// =============================================================
// Submit
// =============================================================

#[test]
fn scenario_a_valid_draft_moves_to_preview() {
    let state = previewing();
    assert_eq!(state.step, Step::Previewing);
    assert!(state.preview_visible);
    assert_eq!(state.generated_content, PLACEHOLDER_CONTENT);
    assert_eq!(state.submitted().map(|p| p.title.as_str()), Some("Sale"));
}

#[test]
fn scenario_b_short_content_blocks_submit() {
    let mut state = ComposerState::new();
    fill_scenario_a(&mut state);
    state.edit_field(FieldEdit::Content("short".into()));

    let errors = state.submit(&PlaceholderGenerator).unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), [Field::Content]);
    assert_eq!(state.step, Step::Editing);
    assert!(state.generated_content.is_empty());
}

#[test]
fn scenario_c_missing_topic_flags_topic_only() {
    let mut state = ComposerState::new();
    fill_scenario_a(&mut state);
    state.edit_field(FieldEdit::Topic(None));

    assert!(state.submit(&PlaceholderGenerator).is_err());
    assert_eq!(state.error_for(Field::Topic), Some("Please choose a topic"));
    for field in Field::ALL.into_iter().filter(|f| *f != Field::Topic) {
        assert_eq!(state.error_for(field), None, "unexpected error on {}", field.name());
    }
}

#[test]
fn failed_submit_reveals_errors_on_untouched_fields() {
    let mut state = ComposerState::new();
    state.edit_field(FieldEdit::Title("Sale".into()));

    let errors = state.submit(&PlaceholderGenerator).unwrap_err();
    assert_eq!(errors.len(), 5);
    let shown = Field::ALL.into_iter().filter(|f| state.error_for(*f).is_some()).count();
    assert_eq!(shown, 5);
    assert_eq!(state.error_for(Field::Fanpage), Some("Please choose a fanpage"));
    assert_eq!(state.error_for(Field::Image), None);
}

#[test]
fn submit_uses_the_given_generator() {
    let mut state = ComposerState::new();
    fill_scenario_a(&mut state);
    let generator = |post: &ValidPost| format!("{} for {}", post.title, post.fanpage.value());

    state.submit(&generator).unwrap();
    assert_eq!(state.generated_content, "Sale for page1");
}

#[test]
fn submit_while_previewing_is_ignored() {
    let mut state = previewing();
    let generator = |_: &ValidPost| "regenerated".to_owned();

    state.submit(&generator).unwrap();
    assert_eq!(state.step, Step::Previewing);
    assert_eq!(state.generated_content, PLACEHOLDER_CONTENT);
}

// =============================================================
// Edit
// =============================================================

#[test]
fn edit_returns_to_form_and_keeps_fields() {
    let mut state = previewing();
    let before = state.draft.clone();

    state.edit();
    assert_eq!(state.step, Step::Editing);
    assert!(!state.preview_visible);
    assert_eq!(state.draft, before);

    state.edit();
    assert_eq!(state.step, Step::Editing);
    assert_eq!(state.draft, before);
}

#[test]
fn scenario_d_resubmit_after_edit_succeeds() {
    let mut state = previewing();
    state.edit();
    state.submit(&PlaceholderGenerator).unwrap();
    assert_eq!(state.step, Step::Previewing);
    assert!(!state.generated_content.is_empty());
}

// =============================================================
// Accept
// =============================================================

#[test]
fn accept_calls_publisher_once_and_stays_previewing() {
    let state = previewing();
    let publisher = CountingPublisher::default();

    assert!(state.accept(&publisher));
    assert_eq!(publisher.calls(), 1);
    assert_eq!(state.step, Step::Previewing);
    assert!(state.preview_visible);
}

#[test]
fn accept_while_editing_does_nothing() {
    let mut state = ComposerState::new();
    fill_scenario_a(&mut state);
    let publisher = CountingPublisher::default();

    assert!(!state.accept(&publisher));
    assert_eq!(publisher.calls(), 0);
    assert_eq!(state.step, Step::Editing);
}

#[test]
fn accept_after_edit_does_not_publish_stale_post() {
    let mut state = previewing();
    state.edit();
    let publisher = CountingPublisher::default();

    assert!(!state.accept(&publisher));
    assert_eq!(publisher.calls(), 0);
}
