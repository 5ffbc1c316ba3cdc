//! Coordination of visibility, dismissal and scroll locking for one modal.
//!
//! `ModalLifecycle` is framework-agnostic. Anything that needs the outside
//! world (timers, the global key listener) goes through [`ModalHost`]; the
//! scroll lock is held directly as a guard.

use dioxus::prelude::Key;

use crate::dismissal::{ClickTarget, DismissReason, DismissalRouter};
use crate::scroll_lock::{ScrollLockGuard, ScrollLockRegistry};
use crate::visibility::{
    Effect, FadeDuration, PendingTimer, Phase, TimerId, VisibilityController,
};

/// Services the rendering environment provides to a modal instance.
pub trait ModalHost {
    /// Arrange for `ModalLifecycle::timer_fired(timer.id)` after `timer.delay`.
    fn schedule_timer(&mut self, timer: PendingTimer);

    /// Drop a scheduled timer. Must tolerate ids that already fired.
    fn cancel_timer(&mut self, id: TimerId);

    /// Start forwarding global key presses to `ModalLifecycle::route_key`.
    fn attach_escape_listener(&mut self);

    fn detach_escape_listener(&mut self);
}

/// State of one modal instance.
#[derive(Debug)]
pub struct ModalLifecycle {
    visibility: VisibilityController,
    router: DismissalRouter,
    scroll: ScrollLockRegistry,
    scroll_guard: Option<ScrollLockGuard>,
}

impl ModalLifecycle {
    #[must_use]
    pub fn new(fade: FadeDuration, scroll: ScrollLockRegistry) -> Self {
        Self {
            visibility: VisibilityController::new(fade),
            router: DismissalRouter::default(),
            scroll,
            scroll_guard: None,
        }
    }

    #[must_use]
    pub fn with_entrance_delay(mut self, delay: std::time::Duration) -> Self {
        self.visibility = self.visibility.with_entrance_delay(delay);
        self
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.visibility.phase()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase().is_mounted()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility.open_intent()
    }

    #[must_use]
    pub fn fade(&self) -> FadeDuration {
        self.visibility.fade()
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.visibility.pending()
    }

    /// Whether this instance currently holds the scroll lock.
    #[must_use]
    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll_guard.is_some()
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.router.is_listening()
    }

    pub fn set_fade_duration(&mut self, fade: FadeDuration) {
        self.visibility.set_fade_duration(fade);
    }

    pub fn set_open<H: ModalHost>(&mut self, open: bool, host: &mut H) {
        let mut effects = self.visibility.set_open(open);
        effects.extend(self.router.set_listening(self.visibility.open_intent()));
        self.apply(effects, host);
    }

    pub fn timer_fired<H: ModalHost>(&mut self, id: TimerId, host: &mut H) {
        let effects = self.visibility.timer_fired(id);
        self.apply(effects, host);
    }

    /// Release everything this instance holds. Safe to call in any phase and
    /// more than once.
    pub fn teardown<H: ModalHost>(&mut self, host: &mut H) {
        let mut effects = self.visibility.teardown();
        effects.extend(self.router.set_listening(false));
        self.apply(effects, host);
    }

    #[must_use]
    pub fn route_key(&self, key: &Key) -> Option<DismissReason> {
        self.router.route_key(key)
    }

    #[must_use]
    pub fn route_click(&self, target: ClickTarget) -> Option<DismissReason> {
        self.router.route_click(target)
    }

    #[must_use]
    pub fn route_dismiss_button(&self) -> DismissReason {
        self.router.route_dismiss_button()
    }

    fn apply<H: ModalHost>(&mut self, effects: Vec<Effect>, host: &mut H) {
        for effect in effects {
            match effect {
                Effect::CancelTimer(id) => host.cancel_timer(id),
                Effect::ScheduleTimer(timer) => host.schedule_timer(timer),
                Effect::EngageScrollLock => {
                    if self.scroll_guard.is_none() {
                        self.scroll_guard = Some(self.scroll.acquire());
                    }
                }
                Effect::ReleaseScrollLock => {
                    self.scroll_guard = None;
                }
                Effect::AttachEscapeListener => host.attach_escape_listener(),
                Effect::DetachEscapeListener => host.detach_escape_listener(),
            }
        }
    }
}
