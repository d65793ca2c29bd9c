//! Page state shared by the profile window: the store, the router, and the
//! profile form while its page is showing.

use crate::router::{self, PROFILE_ROUTE, Page, Router};
use showcase_config::{Config, MemoryProfileStore, ProfileStore};
use showcase_widgets::{
    EventHub, Navigator, ProfileFormAction, ProfileFormScreen, ScrollLock, SubmitOutcome, UiEvent,
};

/// Everything the window draws, independent of the GPU surface
pub struct Pages {
    config: Config,
    store: MemoryProfileStore,
    router: Router,
    /// Present only while the router is on the profile page
    form: Option<ProfileFormScreen>,
    hub: EventHub,
    scroll_lock: ScrollLock,
    runtime: Option<tokio::runtime::Handle>,
}

impl Pages {
    pub fn new(config: Config, store: MemoryProfileStore, start_route: &str) -> Self {
        let mut pages = Self {
            config,
            store,
            router: Router::new(start_route),
            form: None,
            hub: EventHub::new(),
            scroll_lock: ScrollLock::new(),
            runtime: None,
        };
        pages.sync_form();
        pages
    }

    /// Run avatar reads on `runtime`
    pub fn with_runtime(mut self, runtime: tokio::runtime::Handle) -> Self {
        if let Some(form) = self.form.take() {
            self.form = Some(form.with_runtime(runtime.clone()));
        }
        self.runtime = Some(runtime);
        self
    }

    pub fn store(&self) -> &MemoryProfileStore {
        &self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn form(&self) -> Option<&ProfileFormScreen> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ProfileFormScreen> {
        self.form.as_mut()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    /// Deliver this frame's egui input to window-level listeners.
    ///
    /// Must run before [`Pages::show`] so close requests are visible to the
    /// frame that renders the dialog.
    pub fn dispatch_input(&self, events: &[egui::Event]) {
        self.hub.dispatch_all(&UiEvent::from_egui(events));
    }

    pub fn navigate(&mut self, route: &str) {
        self.router.navigate(route);
        self.sync_form();
    }

    /// Submit the form, if it is showing
    pub fn submit_form(&mut self) -> Option<SubmitOutcome> {
        let form = self.form.as_mut()?;
        let outcome = form.submit(&mut self.store, &mut self.router);
        self.sync_form();
        Some(outcome)
    }

    /// Cancel the form, if it is showing
    pub fn cancel_form(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.cancel(&mut self.router);
            self.sync_form();
        }
    }

    /// Build the form on entering the profile page and drop it on leaving.
    ///
    /// Dropping the form releases any dialog listeners and scroll lock it held.
    fn sync_form(&mut self) {
        match (self.router.page(), self.form.is_some()) {
            (Page::ProfileForm, false) => {
                let mut form = ProfileFormScreen::new(
                    self.store.profile(),
                    self.config.skill_catalog.clone(),
                    self.hub.clone(),
                    self.scroll_lock.clone(),
                )
                .with_config(&self.config);
                if let Some(runtime) = &self.runtime {
                    form = form.with_runtime(runtime.clone());
                }
                self.form = Some(form);
            }
            (Page::Summary, true) => {
                self.form = None;
                log::debug!("Profile form closed");
            }
            _ => {}
        }
        self.router.take_changed();
    }

    /// Draw the current page
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut action = ProfileFormAction::None;
        let mut edit_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .enable_scrolling(!self.scroll_lock.is_locked())
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(768.0);
                    match (&mut self.form, self.router.page()) {
                        (Some(form), Page::ProfileForm) => {
                            action = form.show(ui);
                        }
                        _ => {
                            edit_requested = router::show_summary(
                                ui,
                                self.router.current(),
                                self.store.profile(),
                            );
                        }
                    }
                });
        });

        match action {
            ProfileFormAction::Submit => {
                self.submit_form();
            }
            ProfileFormAction::Cancel => self.cancel_form(),
            ProfileFormAction::None => {}
        }
        if edit_requested {
            self.navigate(PROFILE_ROUTE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_config::UserProfile;
    use showcase_widgets::FormField;

    fn run_frame(pages: &mut Pages, ctx: &egui::Context, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        pages.dispatch_input(&input.events);
        let _ = ctx.run(input, |ctx| pages.show(ctx));
    }

    fn escape() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_form_exists_only_on_profile_route() {
        let mut pages = Pages::new(Config::default(), MemoryProfileStore::new(), "/builder");
        assert!(pages.form().is_none());

        pages.navigate(PROFILE_ROUTE);
        assert!(pages.form().is_some());

        pages.navigate("/projects");
        assert!(pages.form().is_none());
    }

    #[test]
    fn test_submit_saves_and_leaves_form() {
        let mut pages = Pages::new(Config::default(), MemoryProfileStore::new(), PROFILE_ROUTE);
        let form = pages.form_mut().unwrap();
        form.set_field(FormField::Name, "Ada");
        form.set_field(FormField::Title, "Analyst");
        form.set_field(FormField::Email, "ada@example.com");

        assert_eq!(pages.submit_form(), Some(SubmitOutcome::Saved));
        assert_eq!(pages.router().current(), "/projects");
        assert!(pages.form().is_none());
        assert_eq!(pages.store().profile().map(|p| p.name.as_str()), Some("Ada"));
    }

    #[test]
    fn test_form_reopens_with_saved_profile() {
        let store = MemoryProfileStore::with_profile(UserProfile {
            name: "Grace".into(),
            ..Default::default()
        });
        let mut pages = Pages::new(Config::default(), store, "/projects");
        pages.navigate(PROFILE_ROUTE);
        assert_eq!(pages.form().unwrap().field(FormField::Name), "Grace");
    }

    #[test]
    fn test_escape_closes_picture_dialog_through_window_input() {
        let ctx = egui::Context::default();
        let mut pages = Pages::new(Config::default(), MemoryProfileStore::new(), PROFILE_ROUTE);
        pages.form_mut().unwrap().open_picture_dialog();

        run_frame(&mut pages, &ctx, Vec::new());
        assert!(pages.form().unwrap().is_picture_dialog_open());
        assert!(pages.scroll_lock().is_locked());

        run_frame(&mut pages, &ctx, vec![escape()]);
        assert!(!pages.form().unwrap().is_picture_dialog_open());
        assert!(!pages.scroll_lock().is_locked());
    }

    #[test]
    fn test_leaving_page_with_dialog_open_releases_scroll_lock() {
        let mut pages = Pages::new(Config::default(), MemoryProfileStore::new(), PROFILE_ROUTE);
        pages.form_mut().unwrap().open_picture_dialog();
        assert!(pages.scroll_lock().is_locked());

        pages.cancel_form();

        assert_eq!(pages.router().current(), "/builder");
        assert!(!pages.scroll_lock().is_locked());
    }
}
