//! Class lists, inline styles and element ids for the modal markup.
//!
//! Kept separate from the component so the render contract can be tested
//! without a Dioxus runtime.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::visibility::{FadeDuration, Phase};

/// Heading shown when the caller does not pass a title.
pub const DEFAULT_TITLE: &str = "Success!";
/// Visible text of the dismiss button.
pub const DEFAULT_DISMISS_LABEL: &str = "Close";
/// Accessible name of the dismiss button, independent of its visible label.
pub const DISMISS_ARIA_LABEL: &str = "Close modal";

pub const OVERLAY_CLASS: &str = "modal-overlay";
pub const CONTENT_CLASS: &str = "modal-content";
pub const BUTTON_CLASS: &str = "modal-button";
/// Marker that triggers the fade-in transition.
pub const VISIBLE_CLASS: &str = "modal-visible";

/// Default stylesheet for the classes above.
pub const MODAL_STYLESHEET: &str = include_str!("../assets/modal.css");

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

/// Per-instance identifier used to build unique DOM ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalInstanceId(u64);

impl ModalInstanceId {
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn dom_id(self) -> String {
        format!("fade-modal-{}", self.0)
    }

    #[must_use]
    pub fn title_id(self) -> String {
        format!("fade-modal-{}-title", self.0)
    }
}

/// Caller-controlled appearance of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalAppearance {
    pub title: String,
    pub dismiss_label: String,
    /// Content box width cap in pixels.
    pub max_width: Option<u32>,
    /// Appended to the content box class list.
    pub class: Option<String>,
    pub fade: FadeDuration,
}

impl Default for ModalAppearance {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            dismiss_label: DEFAULT_DISMISS_LABEL.to_string(),
            max_width: None,
            class: None,
            fade: FadeDuration::default(),
        }
    }
}

/// Everything the component needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    pub overlay_id: String,
    pub overlay_class: String,
    pub overlay_style: String,
    pub content_class: String,
    pub content_style: String,
    /// `None` when the title is empty; no heading is rendered then.
    pub title: Option<String>,
    pub title_id: String,
    /// Value for `aria-labelledby`, present only with a heading to point at.
    pub labelled_by: Option<String>,
    pub dismiss_label: String,
}

impl ModalAppearance {
    #[must_use]
    pub fn layout(&self, instance: ModalInstanceId, phase: Phase) -> ModalLayout {
        let fade_style = format!("--fade-duration: {};", self.fade.css_value());
        let title = (!self.title.is_empty()).then(|| self.title.clone());
        let title_id = instance.title_id();

        ModalLayout {
            overlay_id: instance.dom_id(),
            overlay_class: overlay_class(phase),
            overlay_style: fade_style.clone(),
            content_class: content_class(phase, self.class.as_deref()),
            content_style: match self.max_width {
                Some(width) => format!("max-width: {width}px; {fade_style}"),
                None => fade_style,
            },
            labelled_by: title.as_ref().map(|_| title_id.clone()),
            title,
            title_id,
            dismiss_label: self.dismiss_label.clone(),
        }
    }
}

fn overlay_class(phase: Phase) -> String {
    if phase.marker_applied() {
        format!("{OVERLAY_CLASS} {VISIBLE_CLASS}")
    } else {
        OVERLAY_CLASS.to_string()
    }
}

fn content_class(phase: Phase, extra: Option<&str>) -> String {
    let mut parts = vec![CONTENT_CLASS];
    if let Some(extra) = extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        parts.push(extra);
    }
    if phase.marker_applied() {
        parts.push(VISIBLE_CLASS);
    }
    parts.join(" ")
}
