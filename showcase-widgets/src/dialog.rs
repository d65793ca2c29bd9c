//! Modal dialog whose visibility is owned by the caller.
//!
//! The dialog never flips its own visibility. Escape, a pointer-down outside
//! the content and the close button all raise a close request that the caller
//! collects from [`DialogResponse::close_requested`] (or
//! [`DismissibleDialog::take_close_request`]) and answers by passing
//! `open = false` on the next frame.
//!
//! While open the dialog holds two [`Subscription`]s on the shared
//! [`EventHub`] and a [`ScrollLockGuard`]. All three live in one
//! `ActiveDialog` value that is dropped on close or when the dialog itself is
//! dropped, so the listeners and the scroll lock cannot outlive the open state.

use crate::event_hub::{EventHub, EventKind, Subscription, UiEvent};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Maximum content width preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl DialogSize {
    /// Content width in points
    pub fn max_width(&self) -> f32 {
        match self {
            DialogSize::Small => 384.0,
            DialogSize::Medium => 448.0,
            DialogSize::Large => 512.0,
        }
    }
}

/// Result of rendering the dialog for one frame
#[derive(Debug)]
pub struct DialogResponse<R> {
    /// The user asked to dismiss the dialog
    pub close_requested: bool,
    /// Value returned by the content closure (None while closed)
    pub inner: Option<R>,
}

/// Resources held only while the dialog is open
struct ActiveDialog {
    _escape: Subscription,
    _outside_click: Subscription,
    _scroll: ScrollLockGuard,
}

/// Caller-controlled modal dialog
pub struct DismissibleDialog {
    /// egui id salt for the window
    id_salt: String,
    hub: EventHub,
    scroll_lock: ScrollLock,
    active: Option<ActiveDialog>,
    /// Set by listeners and the close button, cleared when read
    close_requested: Arc<AtomicBool>,
    /// Content area on the last rendered frame
    content_rect: Arc<Mutex<Option<egui::Rect>>>,
}

impl DismissibleDialog {
    /// Create a closed dialog bound to the window's event hub and scroll lock
    pub fn new(id_salt: impl Into<String>, hub: EventHub, scroll_lock: ScrollLock) -> Self {
        Self {
            id_salt: id_salt.into(),
            hub,
            scroll_lock,
            active: None,
            close_requested: Arc::new(AtomicBool::new(false)),
            content_rect: Arc::new(Mutex::new(None)),
        }
    }

    /// Whether the open-state listeners and scroll lock are currently held
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Bring side effects in line with the caller's `open` flag.
    ///
    /// Acquires listeners and the scroll lock on Closed → Open and releases
    /// them on Open → Closed. Calling repeatedly with the same flag is a no-op.
    pub fn sync(&mut self, open: bool) {
        match (open, self.active.is_some()) {
            (true, false) => {
                self.active = Some(self.acquire());
                log::debug!("Dialog '{}' opened", self.id_salt);
            }
            (false, true) => {
                self.active = None;
                self.close_requested.store(false, Ordering::SeqCst);
                *self.content_rect.lock() = None;
                log::debug!("Dialog '{}' closed", self.id_salt);
            }
            _ => {}
        }
    }

    /// Register the listeners and take the scroll lock
    fn acquire(&self) -> ActiveDialog {
        let close = Arc::clone(&self.close_requested);
        let escape = self.hub.subscribe(EventKind::KeyDown, move |event| {
            if matches!(event, UiEvent::KeyDown(egui::Key::Escape)) {
                close.store(true, Ordering::SeqCst);
            }
        });

        let close = Arc::clone(&self.close_requested);
        let content_rect = Arc::clone(&self.content_rect);
        let outside_click = self.hub.subscribe(EventKind::PointerDown, move |event| {
            // No rect yet means the content has not been laid out; ignore
            if let UiEvent::PointerDown(pos) = event
                && let Some(rect) = *content_rect.lock()
                && !rect.contains(*pos)
            {
                close.store(true, Ordering::SeqCst);
            }
        });

        ActiveDialog {
            _escape: escape,
            _outside_click: outside_click,
            _scroll: self.scroll_lock.acquire(),
        }
    }

    /// Raise a close request, as the close button does. Ignored while closed.
    pub fn request_close(&self) {
        if self.is_active() {
            self.close_requested.store(true, Ordering::SeqCst);
        }
    }

    /// Read and clear the pending close request
    pub fn take_close_request(&self) -> bool {
        self.close_requested.swap(false, Ordering::SeqCst)
    }

    /// Record the content area used for outside-click detection
    pub fn set_content_rect(&self, rect: egui::Rect) {
        *self.content_rect.lock() = Some(rect);
    }

    /// Render the dialog if `open`, returning any close request.
    ///
    /// Renders nothing while closed.
    pub fn show<R>(
        &mut self,
        ctx: &egui::Context,
        open: bool,
        title: Option<&str>,
        size: DialogSize,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> DialogResponse<R> {
        self.sync(open);
        if !open {
            return DialogResponse {
                close_requested: false,
                inner: None,
            };
        }

        // Dim everything behind the dialog and swallow clicks meant for it
        let screen = ctx.content_rect();
        egui::Area::new(egui::Id::new((&self.id_salt, "backdrop")))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .interactable(true)
            .show(ctx, |ui| {
                ui.allocate_rect(screen, egui::Sense::click());
                ui.painter().rect_filled(
                    screen,
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );
            });

        let mut close_clicked = false;
        let window = egui::Window::new(title.unwrap_or_default())
            .id(egui::Id::new((&self.id_salt, "window")))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .min_width(size.max_width())
            .max_width(size.max_width())
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 250))
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(title) = title {
                        ui.label(egui::RichText::new(title).strong().size(16.0));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(egui::Button::new("✕").frame(false))
                            .on_hover_text("Close")
                            .clicked()
                        {
                            close_clicked = true;
                        }
                    });
                });
                ui.separator();
                add_contents(ui)
            });

        let inner = window.and_then(|w| {
            self.set_content_rect(w.response.rect);
            w.inner
        });

        if close_clicked {
            self.request_close();
        }

        DialogResponse {
            close_requested: self.take_close_request(),
            inner,
        }
    }
}

impl Drop for DismissibleDialog {
    fn drop(&mut self) {
        if self.active.take().is_some() {
            log::debug!("Dialog '{}' dropped while open", self.id_salt);
        }
    }
}
