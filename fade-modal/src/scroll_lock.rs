//! Process-wide background scroll lock.
//!
//! Holders are reference counted: the surface is locked when the first
//! [`ScrollLockGuard`] is acquired and unlocked when the last one drops, so
//! overlapping instances cannot release each other's lock. Dropping the guard
//! is the only way to release, which makes release on destruction automatic.

use std::fmt;
use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use parking_lot::Mutex;

/// The thing whose scrolling gets suppressed.
pub trait ScrollSurface: Send + Sync {
    fn set_scroll_suppressed(&self, suppressed: bool);
}

/// Toggles `overflow` on the document body of the current Dioxus window.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBodySurface;

impl ScrollSurface for DocumentBodySurface {
    fn set_scroll_suppressed(&self, suppressed: bool) {
        let overflow = if suppressed { "hidden" } else { "" };
        // Fire and forget: on release the window may already be closing.
        let script = format!("document.body.style.overflow = '{overflow}';");
        let _overflow = document::eval(&script);
        tracing::trace!(suppressed, "document body overflow updated");
    }
}

struct Shared {
    holders: Mutex<usize>,
    surface: Box<dyn ScrollSurface>,
}

/// Reference-counted owner of a [`ScrollSurface`].
#[derive(Clone)]
pub struct ScrollLockRegistry {
    shared: Arc<Shared>,
}

static GLOBAL: OnceLock<ScrollLockRegistry> = OnceLock::new();

impl ScrollLockRegistry {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            shared: Arc::new(Shared {
                holders: Mutex::new(0),
                surface: Box::new(surface),
            }),
        }
    }

    /// The registry shared by every modal in the process, backed by the
    /// document body.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL
            .get_or_init(|| Self::new(DocumentBodySurface))
            .clone()
    }

    /// Take a hold on the lock, engaging it if nobody held it yet.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut holders = self.shared.holders.lock();
        *holders += 1;
        if *holders == 1 {
            tracing::debug!("engaging scroll lock");
            self.shared.surface.set_scroll_suppressed(true);
        }
        ScrollLockGuard {
            shared: Arc::clone(&self.shared),
        }
    }

    #[must_use]
    pub fn holders(&self) -> usize {
        *self.shared.holders.lock()
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.holders() > 0
    }
}

impl fmt::Debug for ScrollLockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockRegistry")
            .field("holders", &self.holders())
            .finish_non_exhaustive()
    }
}

/// One hold on the scroll lock. Released on drop.
pub struct ScrollLockGuard {
    shared: Arc<Shared>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut holders = self.shared.holders.lock();
        *holders = holders.saturating_sub(1);
        if *holders == 0 {
            tracing::debug!("releasing scroll lock");
            self.shared.surface.set_scroll_suppressed(false);
        }
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}
