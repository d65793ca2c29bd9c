//! egui widgets for the showcase profile editor.
//!
//! - [`TagSelector`]: multi-select tag picker with free-form entries
//! - [`DismissibleDialog`]: caller-controlled modal with escape and
//!   outside-click dismissal and background scroll locking
//! - [`ProfileFormScreen`]: the profile editing form built from both
//!
//! Window-level input reaches the widgets through an [`EventHub`] that the
//! host window feeds once per frame.

pub mod avatar;
pub mod dialog;
pub mod event_hub;
pub mod navigation;
pub mod profile_form;
pub mod scroll_lock;
pub mod tag_selector;
pub mod validation;

pub use avatar::{AvatarError, AvatarUpload};
pub use dialog::{DialogResponse, DialogSize, DismissibleDialog};
pub use event_hub::{EventHub, EventKind, Subscription, UiEvent};
pub use navigation::{Navigator, RecordingNavigator};
pub use profile_form::{ProfileFormAction, ProfileFormScreen, SubmitOutcome};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use tag_selector::{Dropdown, TagSelector};
pub use validation::{FormField, ValidationErrors, is_valid_email, validate_profile};
