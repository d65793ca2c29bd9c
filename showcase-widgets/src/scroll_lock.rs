//! Background scroll suppression.
//!
//! The host window owns one [`ScrollLock`] and consults
//! [`ScrollLock::is_locked`] when building its page scroll area. Overlays
//! take a [`ScrollLockGuard`] while they are visible. The page stays locked
//! while any guard is alive, whatever order the guards are dropped in.

use parking_lot::Mutex;
use std::sync::Arc;

/// Shared page scroll-suppression counter
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<Mutex<usize>>,
}

impl ScrollLock {
    /// Create an unlocked scroll lock
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether page scrolling is currently suppressed
    pub fn is_locked(&self) -> bool {
        *self.holders.lock() > 0
    }

    /// Number of live guards
    pub fn holders(&self) -> usize {
        *self.holders.lock()
    }

    /// Suppress page scrolling until the returned guard is dropped
    #[must_use = "dropping the guard immediately restores scrolling"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut holders = self.holders.lock();
        *holders += 1;
        log::debug!("Scroll lock acquired ({} holders)", *holders);
        ScrollLockGuard { lock: self.clone() }
    }
}

/// Guard holding the page scroll lock
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut holders = self.lock.holders.lock();
        *holders = holders.saturating_sub(1);
        log::debug!("Scroll lock released ({} holders)", *holders);
    }
}
