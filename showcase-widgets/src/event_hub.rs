//! Window-level input event subscriptions.
//!
//! egui is immediate mode, so "global" key and pointer listeners are kept in
//! an [`EventHub`] that the host window feeds once per frame, before the UI
//! runs. A listener lives exactly as long as the [`Subscription`] returned by
//! [`EventHub::subscribe`]; dropping the guard deregisters it.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// An input event delivered to window-level listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// A key went down
    KeyDown(egui::Key),
    /// A pointer button went down at the given position (in points)
    PointerDown(egui::Pos2),
}

impl UiEvent {
    /// The listener category for this event
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::KeyDown(_) => EventKind::KeyDown,
            UiEvent::PointerDown(_) => EventKind::PointerDown,
        }
    }

    /// Extract the press events egui received this frame.
    ///
    /// Releases, repeats and pointer moves are ignored.
    pub fn from_egui(events: &[egui::Event]) -> Vec<UiEvent> {
        events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => Some(UiEvent::KeyDown(*key)),
                egui::Event::PointerButton {
                    pos, pressed: true, ..
                } => Some(UiEvent::PointerDown(*pos)),
                _ => None,
            })
            .collect()
    }
}

/// Listener category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    PointerDown,
}

type Handler = Arc<Mutex<Box<dyn FnMut(&UiEvent) + Send>>>;

struct Listener {
    id: u64,
    kind: EventKind,
    handler: Handler,
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Shared registry of window-level listeners.
///
/// Cloning the hub yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Arc<Mutex<HubInner>>,
}

impl EventHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind`.
    ///
    /// The listener stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription immediately deregisters the listener"]
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> Subscription
    where
        F: FnMut(&UiEvent) + Send + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push(Listener {
            id,
            kind,
            handler: Arc::new(Mutex::new(Box::new(handler))),
        });
        log::trace!("EventHub: subscribed listener {} for {:?}", id, kind);

        Subscription {
            hub: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `event` to every listener registered for its kind.
    ///
    /// Returns the number of listeners invoked. The registry lock is released
    /// before handlers run, so a handler may drop subscriptions.
    pub fn dispatch(&self, event: &UiEvent) -> usize {
        let kind = event.kind();
        let handlers: Vec<Handler> = self
            .inner
            .lock()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| Arc::clone(&l.handler))
            .collect();

        for handler in &handlers {
            let mut handler = handler.lock();
            (&mut **handler)(event);
        }
        handlers.len()
    }

    /// Deliver a batch of events in order
    pub fn dispatch_all(&self, events: &[UiEvent]) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Number of registered listeners of any kind
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Number of registered listeners of `kind`
    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        self.inner
            .lock()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }
}

/// Registration guard returned by [`EventHub::subscribe`]
pub struct Subscription {
    hub: Weak<Mutex<HubInner>>,
    id: u64,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.lock().listeners.retain(|l| l.id != self.id);
            log::trace!("EventHub: removed listener {}", self.id);
        }
    }
}
