//! Dismissal trigger routing.
//!
//! Escape, backdrop clicks and the dismiss button all converge on one close
//! request. The router never changes the open intent itself; it only says
//! whether a signal should be forwarded to the caller.

use std::fmt;

use dioxus::prelude::Key;

use crate::visibility::Effect;

/// DOM `KeyboardEvent.key` values that dismiss the dialog. `Esc` is what
/// older engines report.
pub const ESCAPE_KEY_NAMES: &[&str] = &["Escape", "Esc"];

/// Which trigger requested the close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    EscapeKey,
    Backdrop,
    DismissButton,
}

impl DismissReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EscapeKey => "escape-key",
            Self::Backdrop => "backdrop",
            Self::DismissButton => "dismiss-button",
        }
    }
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin of a click observed by the overlay handler.
///
/// This is an identity check against the overlay node, not a bounds test:
/// anything inside the content box is a `Descendant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Overlay,
    Descendant,
}

/// Gates dismissal signals on the open intent.
#[derive(Debug, Clone, Default)]
pub struct DismissalRouter {
    listening: bool,
}

impl DismissalRouter {
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Follow the open intent, returning the listener change the host has to
    /// perform, if any.
    pub fn set_listening(&mut self, open: bool) -> Option<Effect> {
        if self.listening == open {
            return None;
        }
        self.listening = open;
        Some(if open {
            Effect::AttachEscapeListener
        } else {
            Effect::DetachEscapeListener
        })
    }

    #[must_use]
    pub fn route_key(&self, key: &Key) -> Option<DismissReason> {
        if *key != Key::Escape {
            return None;
        }
        self.gate(DismissReason::EscapeKey)
    }

    #[must_use]
    pub fn route_click(&self, target: ClickTarget) -> Option<DismissReason> {
        match target {
            ClickTarget::Overlay => self.gate(DismissReason::Backdrop),
            ClickTarget::Descendant => None,
        }
    }

    /// The dismiss button always requests a close.
    #[must_use]
    pub fn route_dismiss_button(&self) -> DismissReason {
        DismissReason::DismissButton
    }

    fn gate(&self, reason: DismissReason) -> Option<DismissReason> {
        if self.listening {
            Some(reason)
        } else {
            tracing::trace!(%reason, "ignoring dismissal while modal is closed");
            None
        }
    }
}

/// Map a DOM key name, as delivered by the global `keydown` listener, to a
/// Dioxus [`Key`].
#[must_use]
pub fn key_from_dom_name(name: &str) -> Key {
    if ESCAPE_KEY_NAMES.contains(&name) {
        Key::Escape
    } else {
        Key::Unidentified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_router() -> DismissalRouter {
        let mut router = DismissalRouter::default();
        router.set_listening(true);
        router
    }

    #[test]
    fn listening_changes_emit_listener_effects() {
        let mut router = DismissalRouter::default();
        assert_eq!(router.set_listening(true), Some(Effect::AttachEscapeListener));
        assert_eq!(router.set_listening(true), None);
        assert_eq!(router.set_listening(false), Some(Effect::DetachEscapeListener));
        assert_eq!(router.set_listening(false), None);
    }

    #[test]
    fn escape_only_while_open() {
        let mut router = DismissalRouter::default();
        assert_eq!(router.route_key(&Key::Escape), None);

        router.set_listening(true);
        assert_eq!(router.route_key(&Key::Escape), Some(DismissReason::EscapeKey));
        assert_eq!(router.route_key(&Key::Enter), None);
    }

    #[test]
    fn descendant_clicks_never_dismiss() {
        let router = open_router();
        assert_eq!(router.route_click(ClickTarget::Descendant), None);
        assert_eq!(router.route_click(ClickTarget::Overlay), Some(DismissReason::Backdrop));
    }

    #[test]
    fn backdrop_ignored_during_exit() {
        let router = DismissalRouter::default();
        assert_eq!(router.route_click(ClickTarget::Overlay), None);
    }

    #[test]
    fn dismiss_button_is_unconditional() {
        let router = DismissalRouter::default();
        assert_eq!(router.route_dismiss_button(), DismissReason::DismissButton);
    }

    #[test]
    fn dom_key_names() {
        assert_eq!(key_from_dom_name("Escape"), Key::Escape);
        assert_eq!(key_from_dom_name("Esc"), Key::Escape);
        assert_eq!(key_from_dom_name("Enter"), Key::Unidentified);
        assert_eq!(key_from_dom_name("a"), Key::Unidentified);
    }
}
