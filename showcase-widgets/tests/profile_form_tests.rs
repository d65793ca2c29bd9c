//! Integration tests for the profile form and its widgets working together.

use showcase_config::{MemoryProfileStore, ProfileStore, UserProfile, default_catalog};
use showcase_widgets::{
    EventHub, FormField, ProfileFormScreen, RecordingNavigator, ScrollLock, SubmitOutcome,
    TagSelector, UiEvent,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seeded_store() -> MemoryProfileStore {
    MemoryProfileStore::with_profile(UserProfile {
        name: "Grace Hopper".into(),
        title: "Rear Admiral".into(),
        email: "grace@example.com".into(),
        skills: strings(&["COBOL"]),
        ..Default::default()
    })
}

#[test]
fn test_edit_and_submit_round_trip_through_store() {
    let mut store = seeded_store();
    let mut nav = RecordingNavigator::new();
    let mut screen = ProfileFormScreen::new(
        store.profile(),
        default_catalog(),
        EventHub::new(),
        ScrollLock::new(),
    );

    screen.set_field(FormField::Bio, "Compiler pioneer");
    screen.set_field(FormField::Github, "https://github.com/grace");

    // Pick "Rust" via the skill picker
    let selector = screen.skill_selector();
    selector.set_search_text("rus");
    let catalog = default_catalog();
    let proposed = screen
        .skill_selector()
        .select(&strings(&["COBOL"]), "Rust")
        .expect("Rust not yet selected");
    assert!(catalog.iter().any(|c| c == "Rust"));
    screen.set_skills(proposed);

    assert_eq!(screen.submit(&mut store, &mut nav), SubmitOutcome::Saved);

    let saved = store.profile().unwrap();
    assert_eq!(saved.bio, "Compiler pioneer");
    assert_eq!(saved.github, "https://github.com/grace");
    assert_eq!(saved.skills, strings(&["COBOL", "Rust"]));
    assert_eq!(nav.last(), Some("/projects"));
}

#[test]
fn test_draft_edits_do_not_leak_before_submit() {
    let store = seeded_store();
    let mut nav = RecordingNavigator::new();
    let mut screen =
        ProfileFormScreen::new(store.profile(), Vec::new(), EventHub::new(), ScrollLock::new());

    screen.set_field(FormField::Name, "Someone Else");
    screen.cancel(&mut nav);

    assert_eq!(store.profile().unwrap().name, "Grace Hopper");
    assert_eq!(store.revision(), 0);
    assert_eq!(nav.last(), Some("/builder"));
}

#[test]
fn test_required_field_errors_block_store_write() {
    let mut store = MemoryProfileStore::new();
    let mut nav = RecordingNavigator::new();
    let mut screen =
        ProfileFormScreen::new(None, Vec::new(), EventHub::new(), ScrollLock::new());
    screen.set_field(FormField::Name, "Ada");
    screen.set_field(FormField::Email, "foo@bar.com");

    match screen.submit(&mut store, &mut nav) {
        SubmitOutcome::Invalid(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        }
        SubmitOutcome::Saved => panic!("missing title must block submit"),
    }
    assert!(store.profile().is_none());
}

#[test]
fn test_hub_pointer_events_leave_skill_dropdown_alone() {
    let hub = EventHub::new();
    let lock = ScrollLock::new();
    let mut screen = ProfileFormScreen::new(None, Vec::new(), hub.clone(), lock.clone());

    let selector = screen.skill_selector();
    selector.set_rect(egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 40.0)));
    selector.focus();
    selector.set_search_text("Ru");

    screen.open_picture_dialog();
    assert!(lock.is_locked());

    // Clicks land before the dialog has been laid out: nothing closes
    hub.dispatch(&UiEvent::PointerDown(egui::pos2(500.0, 500.0)));
    screen.handle_dialog_close_request();
    assert!(screen.is_picture_dialog_open());

    // The selector only reacts to its own frame input, never to hub events
    let selector = screen.skill_selector();
    assert!(selector.is_open());
    assert_eq!(selector.search_text(), "Ru");

    hub.dispatch(&UiEvent::KeyDown(egui::Key::Escape));
    screen.handle_dialog_close_request();
    assert!(!screen.is_picture_dialog_open());
    assert!(!lock.is_locked());

    // Escape after closing does nothing
    hub.dispatch(&UiEvent::KeyDown(egui::Key::Escape));
    screen.handle_dialog_close_request();
    assert!(!screen.is_picture_dialog_open());
}

#[test]
fn test_select_then_remove_restores_selection() {
    let mut selector = TagSelector::new("skills");
    let before = strings(&["Go", "Python"]);
    let after_select = selector.select(&before, "Rust").unwrap();
    assert_eq!(selector.remove(&after_select, "Rust"), before);
}

#[test]
fn test_suggestions_never_include_selected() {
    let catalog = default_catalog();
    let selection: Vec<String> = catalog.iter().step_by(3).cloned().collect();
    let mut selector = TagSelector::new("skills");

    for search in ["", "a", "script", "SQL", "zzz"] {
        selector.set_search_text(search);
        for suggestion in selector.suggestions(&catalog, &selection) {
            assert!(
                !selection.iter().any(|s| s == suggestion),
                "{suggestion} is selected but was suggested for {search:?}"
            );
        }
    }
}
