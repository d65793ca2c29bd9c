//! Form actions for `ProfileFormScreen`.
//!
//! Covers: validate, submit, cancel, remove_avatar, start_avatar_upload,
//! upload_avatar_from_picker, poll_avatar_upload.

use super::{ProfileFormScreen, SubmitOutcome};
use crate::avatar::{self, AvatarUpload};
use crate::navigation::Navigator;
use crate::validation::validate_profile;
use showcase_config::ProfileStore;
use std::path::PathBuf;

impl ProfileFormScreen {
    // =========================================================================
    // Submit / Cancel
    // =========================================================================

    /// Validate the draft and keep the errors for inline display.
    ///
    /// Returns true when the draft can be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_profile(&self.draft);
        if !self.errors.is_empty() {
            log::debug!(
                "Profile form has {} validation error(s): {:?}",
                self.errors.len(),
                self.errors.to_name_map()
            );
        }
        self.errors.is_empty()
    }

    /// Validate, then hand the full draft to the store and navigate on.
    ///
    /// On failure nothing is written and no navigation happens.
    pub fn submit(
        &mut self,
        store: &mut dyn ProfileStore,
        navigator: &mut dyn Navigator,
    ) -> SubmitOutcome {
        if !self.validate() {
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        store.update_profile(self.draft.clone());
        log::info!("Profile saved, continuing to {}", self.submit_route);
        navigator.navigate(&self.submit_route);
        SubmitOutcome::Saved
    }

    /// Leave without saving
    pub fn cancel(&mut self, navigator: &mut dyn Navigator) {
        log::info!("Profile edit cancelled");
        navigator.navigate(&self.cancel_route);
    }

    // =========================================================================
    // Avatar
    // =========================================================================

    /// Clear the draft avatar and close the picture dialog
    pub fn remove_avatar(&mut self) {
        self.draft.avatar.clear();
        self.avatar_error = None;
        self.avatar_upload = None;
        self.close_picture_dialog();
        log::info!("Profile picture removed");
    }

    /// Begin reading `path` as the new avatar.
    ///
    /// Replaces any read still in flight. Without a tokio runtime the file is
    /// read on the calling thread.
    pub fn start_avatar_upload(&mut self, path: PathBuf) {
        self.avatar_error = None;
        let runtime = self
            .runtime
            .clone()
            .or_else(|| tokio::runtime::Handle::try_current().ok());

        match runtime {
            Some(runtime) => {
                if self.avatar_upload.is_some() {
                    log::debug!("Replacing pending avatar read");
                }
                self.avatar_upload = Some(AvatarUpload::start(&runtime, path));
            }
            None => {
                log::warn!("No async runtime available, reading avatar inline");
                self.avatar_upload = None;
                self.apply_avatar_result(avatar::read_avatar(&path));
            }
        }
    }

    /// Let the user pick a picture, start reading it and close the dialog.
    ///
    /// The dialog closes even when the picker is dismissed.
    pub fn upload_avatar_from_picker(&mut self) {
        if let Some(path) = avatar::pick_avatar_file() {
            self.start_avatar_upload(path);
        }
        self.close_picture_dialog();
    }

    /// Apply a finished avatar read, if any.
    ///
    /// Returns true when the draft avatar or the avatar error changed.
    pub fn poll_avatar_upload(&mut self) -> bool {
        let Some(upload) = self.avatar_upload.as_mut() else {
            return false;
        };
        let Some(result) = upload.poll() else {
            return false;
        };
        log::debug!("Avatar read finished: {:?}", upload.path());
        self.avatar_upload = None;
        self.apply_avatar_result(result);
        true
    }

    fn apply_avatar_result(&mut self, result: Result<String, avatar::AvatarError>) {
        match result {
            Ok(data_url) => {
                log::info!("Profile picture loaded ({} bytes encoded)", data_url.len());
                self.draft.avatar = data_url;
                self.avatar_error = None;
            }
            Err(e) => {
                log::warn!("Profile picture not loaded: {}", e);
                self.avatar_error = Some(e.to_string());
            }
        }
    }
}
