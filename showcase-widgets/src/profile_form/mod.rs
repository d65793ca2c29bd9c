//! Profile editing screen.
//!
//! Composes the skill [`TagSelector`], the profile-picture
//! [`DismissibleDialog`] and plain text fields into one form bound to a
//! draft copy of the stored profile. Nothing reaches the store until a
//! successful [`ProfileFormScreen::submit`].
//!
//! - `mod.rs` (this file): state, lifecycle and field access
//! - `form_helpers.rs`: validation, submit/cancel and avatar actions
//! - `view.rs`: egui rendering

mod form_helpers;
mod view;

use crate::avatar::AvatarUpload;
use crate::dialog::DismissibleDialog;
use crate::event_hub::EventHub;
use crate::scroll_lock::ScrollLock;
use crate::tag_selector::TagSelector;
use crate::validation::{FormField, ValidationErrors};
use showcase_config::{Config, UserProfile};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was written to the store and navigation was requested
    Saved,
    /// Validation failed; nothing was written
    Invalid(ValidationErrors),
}

/// Actions the view reports back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFormAction {
    /// Nothing happened this frame
    None,
    /// "Save & Continue" was pressed
    Submit,
    /// "Cancel" was pressed
    Cancel,
}

/// Profile form state
pub struct ProfileFormScreen {
    /// Working copy of the profile being edited
    pub(super) draft: UserProfile,
    /// Suggested skills
    pub(super) catalog: Vec<String>,
    /// Skill picker
    pub(super) skills: TagSelector,
    /// Profile-picture dialog
    pub(super) picture_dialog: DismissibleDialog,
    /// Caller-side visibility flag for the picture dialog
    pub(super) picture_dialog_open: bool,
    /// Errors from the last validation
    pub(super) errors: ValidationErrors,
    /// Pending avatar file read
    pub(super) avatar_upload: Option<AvatarUpload>,
    /// Last avatar failure, shown under the picture
    pub(super) avatar_error: Option<String>,
    /// Runtime used for avatar reads
    pub(super) runtime: Option<tokio::runtime::Handle>,
    /// Avatar shown while the draft has none
    pub(super) default_avatar_url: String,
    /// Route opened after saving
    pub(super) submit_route: String,
    /// Route opened on cancel
    pub(super) cancel_route: String,
    /// Decoded avatar texture keyed by the avatar string it came from;
    /// `None` inside means that string could not be decoded
    pub(super) avatar_texture: Option<(String, Option<egui::TextureHandle>)>,
}

impl ProfileFormScreen {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Build the form from the store's current profile.
    ///
    /// With no stored profile every field starts empty.
    pub fn new(
        profile: Option<&UserProfile>,
        catalog: Vec<String>,
        hub: EventHub,
        scroll_lock: ScrollLock,
    ) -> Self {
        let mut draft = profile.cloned().unwrap_or_default();
        draft.dedup_skills();
        log::info!(
            "Profile form opened (existing={}, skills={})",
            profile.is_some(),
            draft.skills.len()
        );
        Self {
            draft,
            catalog,
            skills: TagSelector::new("profile_skills")
                .with_placeholder("Select or type to add skills"),
            picture_dialog: DismissibleDialog::new("profile_picture", hub, scroll_lock),
            picture_dialog_open: false,
            errors: ValidationErrors::new(),
            avatar_upload: None,
            avatar_error: None,
            runtime: None,
            default_avatar_url: showcase_config::defaults::default_avatar_url(),
            submit_route: showcase_config::defaults::submit_route(),
            cancel_route: showcase_config::defaults::cancel_route(),
            avatar_texture: None,
        }
    }

    /// Take routes and the default avatar from the application config
    pub fn with_config(mut self, config: &Config) -> Self {
        self.default_avatar_url = config.default_avatar_url.clone();
        self.submit_route = config.submit_route.clone();
        self.cancel_route = config.cancel_route.clone();
        self
    }

    /// Run avatar file reads on `runtime`
    pub fn with_runtime(mut self, runtime: tokio::runtime::Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// The draft record
    pub fn draft(&self) -> &UserProfile {
        &self.draft
    }

    /// Current value of a text field
    pub fn field(&self, field: FormField) -> &str {
        field.get(&self.draft)
    }

    /// Replace a text field's value
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *field.get_mut(&mut self.draft) = value.into();
    }

    /// Selected skills, in display order
    pub fn skills(&self) -> &[String] {
        &self.draft.skills
    }

    /// Apply a selection proposed by the skill picker
    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.draft.skills = skills;
        self.draft.dedup_skills();
    }

    /// The skill picker, for driving it outside of rendering
    pub fn skill_selector(&mut self) -> &mut TagSelector {
        &mut self.skills
    }

    /// Suggested skills
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Errors from the last validation
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Avatar to display: the draft's, or the default when none is set
    pub fn avatar_url(&self) -> &str {
        if self.draft.avatar.is_empty() {
            &self.default_avatar_url
        } else {
            &self.draft.avatar
        }
    }

    /// Last avatar load failure
    pub fn avatar_error(&self) -> Option<&str> {
        self.avatar_error.as_deref()
    }

    /// Whether an avatar read is still running
    pub fn is_avatar_pending(&self) -> bool {
        self.avatar_upload.is_some()
    }

    // =========================================================================
    // Picture dialog
    // =========================================================================

    /// Whether the picture dialog is showing
    pub fn is_picture_dialog_open(&self) -> bool {
        self.picture_dialog_open
    }

    /// Show the picture dialog
    pub fn open_picture_dialog(&mut self) {
        self.picture_dialog_open = true;
        self.picture_dialog.sync(true);
    }

    /// Hide the picture dialog
    pub fn close_picture_dialog(&mut self) {
        self.picture_dialog_open = false;
        self.picture_dialog.sync(false);
    }

    /// Answer any close request raised by the dialog since the last frame
    pub fn handle_dialog_close_request(&mut self) {
        if self.picture_dialog.take_close_request() {
            self.close_picture_dialog();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_hub::UiEvent;

    fn screen(profile: Option<&UserProfile>) -> (ProfileFormScreen, EventHub, ScrollLock) {
        let hub = EventHub::new();
        let lock = ScrollLock::new();
        let screen = ProfileFormScreen::new(
            profile,
            vec!["Rust".into(), "Go".into()],
            hub.clone(),
            lock.clone(),
        );
        (screen, hub, lock)
    }

    #[test]
    fn test_new_without_profile_is_empty() {
        let (screen, _, _) = screen(None);
        assert_eq!(screen.draft(), &UserProfile::default());
        assert!(screen.errors().is_empty());
        assert!(!screen.is_picture_dialog_open());
    }

    #[test]
    fn test_new_copies_existing_profile() {
        let profile = UserProfile {
            name: "Ada".into(),
            skills: vec!["Rust".into()],
            ..Default::default()
        };
        let (screen, _, _) = screen(Some(&profile));
        assert_eq!(screen.field(FormField::Name), "Ada");
        assert_eq!(screen.skills(), ["Rust".to_string()]);
    }

    #[test]
    fn test_new_drops_repeated_skills() {
        let profile = UserProfile {
            skills: vec!["Rust".into(), "Rust".into(), "Go".into()],
            ..Default::default()
        };
        let (mut screen, _, _) = screen(Some(&profile));
        assert_eq!(screen.skills(), ["Rust".to_string(), "Go".to_string()]);

        let proposed = screen.skill_selector().remove(&["Rust".to_string(), "Go".to_string()], "Rust");
        screen.set_skills(proposed);
        assert_eq!(screen.skills(), ["Go".to_string()]);
    }

    #[test]
    fn test_set_field_updates_only_that_field() {
        let (mut screen, _, _) = screen(None);
        screen.set_field(FormField::Location, "Lisbon");
        assert_eq!(screen.field(FormField::Location), "Lisbon");
        assert_eq!(screen.field(FormField::Name), "");
    }

    #[test]
    fn test_avatar_falls_back_to_default() {
        let (mut screen, _, _) = screen(None);
        let config = Config {
            default_avatar_url: "https://example.com/default.png".into(),
            ..Default::default()
        };
        screen = screen.with_config(&config);
        assert_eq!(screen.avatar_url(), "https://example.com/default.png");

        screen.draft.avatar = "data:image/png;base64,AAAA".into();
        assert_eq!(screen.avatar_url(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_picture_dialog_escape_closes_and_releases_lock() {
        let (mut screen, hub, lock) = screen(None);
        screen.open_picture_dialog();
        assert!(lock.is_locked());

        hub.dispatch(&UiEvent::KeyDown(egui::Key::Escape));
        screen.handle_dialog_close_request();

        assert!(!screen.is_picture_dialog_open());
        assert!(!lock.is_locked());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_dropping_screen_with_open_dialog_releases_lock() {
        let (mut screen, hub, lock) = screen(None);
        screen.open_picture_dialog();
        drop(screen);
        assert!(!lock.is_locked());
        assert_eq!(hub.listener_count(), 0);
    }
}
