//! Visibility state machine for the fade animation.
//!
//! The caller owns the *open intent*; this module owns whether the dialog is
//! mounted and whether the `modal-visible` marker is applied. Mounting lags
//! the intent on close so the fade-out can finish before the nodes disappear.
//!
//! The controller is pure: every transition returns the [`Effect`]s the host
//! has to carry out (timers, scroll lock). At most one timer is pending at a
//! time and every transition cancels the previous one before scheduling.

use std::fmt;
use std::time::Duration;

/// Default fade length in milliseconds.
pub const DEFAULT_FADE_MS: u64 = 300;

/// Delay between mounting and applying the visible marker, so the node is
/// painted once in its pre-transition state.
pub const DEFAULT_ENTRANCE_DELAY_MS: u64 = 10;
pub const DEFAULT_ENTRANCE_DELAY: Duration = Duration::from_millis(DEFAULT_ENTRANCE_DELAY_MS);

/// Animation phase of a single modal instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing rendered, scroll unlocked.
    #[default]
    Hidden,
    /// Mounted, waiting for the entrance timer to apply the marker.
    Entering,
    /// Mounted with the marker applied.
    Visible,
    /// Marker removed, waiting for the fade to finish before unmounting.
    Exiting,
}

impl Phase {
    /// Whether the dialog nodes exist in the tree.
    #[must_use]
    pub const fn is_mounted(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether the `modal-visible` marker is applied.
    #[must_use]
    pub const fn marker_applied(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Transient phases always have a live timer driving them forward.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Entering => "entering",
            Self::Visible => "visible",
            Self::Exiting => "exiting",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of the opacity transition, which is also the unmount delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FadeDuration(Duration);

impl FadeDuration {
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn as_millis(self) -> u64 {
        self.0.as_millis() as u64
    }

    /// A zero fade disables the animation entirely.
    #[must_use]
    pub const fn is_instant(self) -> bool {
        self.0.is_zero()
    }

    /// Value for the `--fade-duration` CSS custom property.
    #[must_use]
    pub fn css_value(self) -> String {
        format!("{}ms", self.as_millis())
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self::from_millis(DEFAULT_FADE_MS)
    }
}

impl fmt::Display for FadeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.as_millis())
    }
}

/// Identifies one scheduled timer. Ids are never reused within a controller,
/// so a late delivery of a cancelled timer can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happens when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// `entering -> visible`
    ApplyMarker,
    /// `exiting -> hidden`, releasing the scroll lock.
    Unmount,
}

/// A delayed callback the host must deliver back via `timer_fired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub action: TimerAction,
    pub delay: Duration,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    CancelTimer(TimerId),
    ScheduleTimer(PendingTimer),
    EngageScrollLock,
    ReleaseScrollLock,
    AttachEscapeListener,
    DetachEscapeListener,
}

/// Explicit state machine over [`Phase`], keyed by open-intent changes.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    phase: Phase,
    open_intent: bool,
    fade: FadeDuration,
    entrance_delay: Duration,
    pending: Option<PendingTimer>,
    next_timer: u64,
}

impl VisibilityController {
    #[must_use]
    pub fn new(fade: FadeDuration) -> Self {
        Self {
            phase: Phase::Hidden,
            open_intent: false,
            fade,
            entrance_delay: DEFAULT_ENTRANCE_DELAY,
            pending: None,
            next_timer: 0,
        }
    }

    /// Override the delay between mounting and applying the visible marker.
    #[must_use]
    pub fn with_entrance_delay(mut self, delay: Duration) -> Self {
        self.entrance_delay = delay;
        self
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn open_intent(&self) -> bool {
        self.open_intent
    }

    #[must_use]
    pub fn fade(&self) -> FadeDuration {
        self.fade
    }

    #[must_use]
    pub fn entrance_delay(&self) -> Duration {
        self.entrance_delay
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Change the fade length. A timer that is already pending keeps its
    /// deadline; the new value applies from the next transition on.
    pub fn set_fade_duration(&mut self, fade: FadeDuration) {
        if self.fade != fade {
            tracing::debug!(from = %self.fade, to = %fade, "modal fade duration changed");
            self.fade = fade;
        }
    }

    /// React to the caller's open intent. Repeating the current intent is a
    /// no-op.
    pub fn set_open(&mut self, open: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        if open == self.open_intent {
            return effects;
        }
        self.open_intent = open;
        self.cancel_pending(&mut effects);

        if open {
            // Hidden mounts here; Exiting is still mounted and just reverses.
            effects.push(Effect::EngageScrollLock);
            if self.fade.is_instant() {
                self.enter(Phase::Visible);
            } else {
                self.enter(Phase::Entering);
                self.schedule(TimerAction::ApplyMarker, self.entrance_delay, &mut effects);
            }
        } else if self.fade.is_instant() {
            self.enter(Phase::Hidden);
            effects.push(Effect::ReleaseScrollLock);
        } else {
            // Removing the marker starts the fade-out; an interrupted entrance
            // reverses the same way.
            self.enter(Phase::Exiting);
            self.schedule(TimerAction::Unmount, self.fade.as_duration(), &mut effects);
        }

        effects
    }

    /// Deliver a fired timer. Timers that were cancelled or superseded are
    /// ignored.
    pub fn timer_fired(&mut self, id: TimerId) -> Vec<Effect> {
        let mut effects = Vec::new();
        let Some(timer) = self.pending.filter(|pending| pending.id == id) else {
            tracing::trace!(timer = %id, phase = %self.phase, "ignoring stale modal timer");
            return effects;
        };
        self.pending = None;

        match (timer.action, self.phase) {
            (TimerAction::ApplyMarker, Phase::Entering) => self.enter(Phase::Visible),
            (TimerAction::Unmount, Phase::Exiting) => {
                self.enter(Phase::Hidden);
                effects.push(Effect::ReleaseScrollLock);
            }
            (action, phase) => {
                tracing::warn!(timer = %id, ?action, %phase, "modal timer fired in unexpected phase");
            }
        }

        effects
    }

    /// Instance destruction: cancel whatever is pending and force the scroll
    /// lock off, regardless of phase.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.cancel_pending(&mut effects);
        self.open_intent = false;
        self.enter(Phase::Hidden);
        effects.push(Effect::ReleaseScrollLock);
        effects
    }

    fn cancel_pending(&mut self, effects: &mut Vec<Effect>) {
        if let Some(timer) = self.pending.take() {
            effects.push(Effect::CancelTimer(timer.id));
        }
    }

    fn schedule(&mut self, action: TimerAction, delay: Duration, effects: &mut Vec<Effect>) {
        let timer = PendingTimer {
            id: TimerId(self.next_timer),
            action,
            delay,
        };
        self.next_timer += 1;
        self.pending = Some(timer);
        effects.push(Effect::ScheduleTimer(timer));
    }

    fn enter(&mut self, next: Phase) {
        if self.phase != next {
            tracing::debug!(from = %self.phase, to = %next, "modal phase transition");
            self.phase = next;
        }
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new(FadeDuration::default())
    }
}
