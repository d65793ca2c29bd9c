//! Application entry point and winit event handling.
//!
//! - `App`: loads config and the seed profile, then runs the event loop
//! - `AppHandler`: the `ApplicationHandler` that owns the profile window

use crate::cli::RuntimeOptions;
use crate::debug;
use crate::pages::Pages;
use crate::profile_window::{ProfileWindow, ProfileWindowAction};
use anyhow::{Context, Result};
use showcase_config::{Config, MemoryProfileStore, UserProfile};
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// Main application entry point
pub struct App {
    config: Config,
    store: MemoryProfileStore,
    start_route: String,
    runtime: Arc<Runtime>,
}

impl App {
    /// Load configuration and the optional seed profile
    pub fn new(runtime: Arc<Runtime>, options: RuntimeOptions) -> Result<Self> {
        let config = options.load_config().context("Failed to load config")?;
        debug::apply_config_level(config.log_level.to_level_filter());

        let store = match &options.profile {
            Some(path) => {
                let profile = UserProfile::load_from_file(path)
                    .with_context(|| format!("Failed to load profile from {}", path.display()))?;
                MemoryProfileStore::with_profile(profile)
            }
            None => MemoryProfileStore::new(),
        };

        let start_route = options
            .route
            .clone()
            .unwrap_or_else(|| config.start_route.clone());
        if let Some(route) = &options.route {
            log::info!("CLI override: starting at route '{}'", route);
        }

        Ok(Self {
            config,
            store,
            start_route,
            runtime,
        })
    }

    /// Run the application until the window closes
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let pages = Pages::new(self.config.clone(), self.store, &self.start_route)
            .with_runtime(self.runtime.handle().clone());
        let mut handler = AppHandler {
            config: self.config,
            runtime: self.runtime,
            pending_pages: Some(pages),
            window: None,
        };

        event_loop.run_app(&mut handler)?;
        Ok(())
    }
}

/// winit handler owning the single profile window
struct AppHandler {
    config: Config,
    runtime: Arc<Runtime>,
    /// Page state waiting for the window to be created
    pending_pages: Option<Pages>,
    window: Option<ProfileWindow>,
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(pages) = self.pending_pages.take() else {
            return;
        };

        let runtime = Arc::clone(&self.runtime);
        match runtime.block_on(ProfileWindow::new(event_loop, &self.config, pages)) {
            Ok(window) => {
                log::info!("Showing route {}", window.pages.router().current());
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create profile window: {:#}", e);
                eprintln!("showcase: error: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        if window.handle_window_event(event) == ProfileWindowAction::Close {
            self.window = None;
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        window.check_repaint();
        match window.next_repaint() {
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
