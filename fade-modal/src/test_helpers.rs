//! Test helpers for lifecycle and scenario tests.
//!
//! Provides a virtual-time [`ModalHost`] and a [`Harness`] that drives a
//! `ModalLifecycle` the way the Dioxus binding does, minus the runtime.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::Key;
use parking_lot::Mutex;

use crate::dismissal::{ClickTarget, DismissReason};
use crate::lifecycle::{ModalHost, ModalLifecycle};
use crate::scroll_lock::{ScrollLockRegistry, ScrollSurface};
use crate::visibility::{FadeDuration, PendingTimer, Phase, TimerId};

/// Records every lock/unlock the registry pushes to the surface.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSurface {
    events: Arc<Mutex<Vec<bool>>>,
}

impl RecordingSurface {
    pub(crate) fn events(&self) -> Vec<bool> {
        self.events.lock().clone()
    }
}

impl ScrollSurface for RecordingSurface {
    fn set_scroll_suppressed(&self, suppressed: bool) {
        self.events.lock().push(suppressed);
    }
}

/// Host with a manual clock. Timers fire only when the clock is advanced.
#[derive(Debug, Default)]
pub(crate) struct VirtualHost {
    now: Duration,
    timers: Vec<(Duration, PendingTimer)>,
    escape_attached: bool,
    attach_count: usize,
    detach_count: usize,
}

impl VirtualHost {
    pub(crate) fn now(&self) -> Duration {
        self.now
    }

    pub(crate) fn escape_attached(&self) -> bool {
        self.escape_attached
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub(crate) fn attach_count(&self) -> usize {
        self.attach_count
    }

    pub(crate) fn detach_count(&self) -> usize {
        self.detach_count
    }

    /// Remove and return the earliest timer due at or before `deadline`,
    /// moving the clock to its due time.
    fn pop_due(&mut self, deadline: Duration) -> Option<PendingTimer> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= deadline)
            .min_by_key(|(_, (due, _))| *due)
            .map(|(index, _)| index)?;
        let (due, timer) = self.timers.remove(index);
        self.now = due;
        Some(timer)
    }
}

impl ModalHost for VirtualHost {
    fn schedule_timer(&mut self, timer: PendingTimer) {
        self.timers.push((self.now + timer.delay, timer));
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.timers.retain(|(_, timer)| timer.id != id);
    }

    fn attach_escape_listener(&mut self) {
        self.escape_attached = true;
        self.attach_count += 1;
    }

    fn detach_escape_listener(&mut self) {
        self.escape_attached = false;
        self.detach_count += 1;
    }
}

/// A modal instance plus its host, scroll registry and a log of the close
/// requests the caller received.
pub(crate) struct Harness {
    pub(crate) lifecycle: ModalLifecycle,
    pub(crate) host: VirtualHost,
    pub(crate) registry: ScrollLockRegistry,
    pub(crate) surface: RecordingSurface,
    pub(crate) closes: Vec<DismissReason>,
}

impl Harness {
    pub(crate) fn new(fade_ms: u64) -> Self {
        let surface = RecordingSurface::default();
        let registry = ScrollLockRegistry::new(surface.clone());
        Self {
            lifecycle: ModalLifecycle::new(FadeDuration::from_millis(fade_ms), registry.clone()),
            host: VirtualHost::default(),
            registry,
            surface,
            closes: Vec::new(),
        }
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.lifecycle.set_open(open, &mut self.host);
    }

    /// Advance the clock, firing due timers in deadline order.
    pub(crate) fn advance(&mut self, millis: u64) {
        let deadline = self.host.now() + Duration::from_millis(millis);
        while let Some(timer) = self.host.pop_due(deadline) {
            self.lifecycle.timer_fired(timer.id, &mut self.host);
        }
        self.host.now = deadline;
    }

    /// A key press reaches the lifecycle only through an attached listener.
    pub(crate) fn press(&mut self, key: &Key) {
        if !self.host.escape_attached() {
            return;
        }
        if let Some(reason) = self.lifecycle.route_key(key) {
            self.closes.push(reason);
        }
    }

    pub(crate) fn click(&mut self, target: ClickTarget) {
        if !self.mounted() {
            return;
        }
        if let Some(reason) = self.lifecycle.route_click(target) {
            self.closes.push(reason);
        }
    }

    pub(crate) fn press_dismiss_button(&mut self) {
        if self.mounted() {
            self.closes.push(self.lifecycle.route_dismiss_button());
        }
    }

    pub(crate) fn teardown(&mut self) {
        self.lifecycle.teardown(&mut self.host);
    }

    pub(crate) fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub(crate) fn mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    pub(crate) fn scroll_locked(&self) -> bool {
        self.registry.is_engaged()
    }
}
