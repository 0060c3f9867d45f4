//! Page scroll lock for the open overlay sidebar
//!
//! Every lock is matched by exactly one unlock. The lock is only considered
//! held when the document accepted the write, so a headless host never ends
//! up with a pending unlock.

use crate::document::{Document, TouchAction};

#[derive(Debug, Default)]
pub struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn acquire<D: Document + ?Sized>(&mut self, document: &D) {
        if !self.held && document.set_touch_action(TouchAction::None) {
            tracing::debug!("page scroll locked");
            self.held = true;
        }
    }

    pub fn release<D: Document + ?Sized>(&mut self, document: &D) {
        if self.held {
            document.set_touch_action(TouchAction::Auto);
            tracing::debug!("page scroll unlocked");
            self.held = false;
        }
    }

    /// Acquire or release so that the lock is held iff `wanted`.
    pub fn sync<D: Document + ?Sized>(&mut self, document: &D, wanted: bool) {
        if wanted {
            self.acquire(document);
        } else {
            self.release(document);
        }
    }
}
