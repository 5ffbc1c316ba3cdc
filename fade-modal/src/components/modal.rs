//! Modal dialog component.
//!
//! A centered dialog above a dimmed overlay. It fades in when `is_open`
//! becomes true and fades out before unmounting when it becomes false.
//! Escape, a click on the overlay itself, and the dismiss button all call
//! `on_close`; the caller closes the dialog by passing `is_open: false`.

use dioxus::prelude::*;

use crate::dismissal::{ClickTarget, DismissReason};
use crate::hooks::use_modal_lifecycle;
use crate::presentation::{
    ModalAppearance, BUTTON_CLASS, DEFAULT_DISMISS_LABEL, DEFAULT_TITLE, DISMISS_ARIA_LABEL,
};
use crate::visibility::{FadeDuration, DEFAULT_FADE_MS};

/// Modal dialog with fade animation and scroll locking.
///
/// # Example
///
/// ```rust,ignore
/// let mut open = use_signal(|| false);
///
/// rsx! {
///     Modal {
///         is_open: open(),
///         on_close: move |()| open.set(false),
///         title: "Saved",
///         p { "Your changes were saved." }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    /// Whether the dialog should be open.
    is_open: bool,
    /// Called by every dismissal trigger.
    on_close: EventHandler<()>,
    /// Told which trigger requested the close, before `on_close` runs.
    #[props(default)]
    on_dismiss: Option<EventHandler<DismissReason>>,
    /// Heading text. An empty string renders no heading.
    #[props(into, default = DEFAULT_TITLE.to_string())]
    title: String,
    /// Visible label of the dismiss button.
    #[props(into, default = DEFAULT_DISMISS_LABEL.to_string())]
    dismiss_label: String,
    /// Content box width cap in pixels.
    #[props(!optional, default)]
    max_width: Option<u32>,
    /// Extra CSS class for the content box.
    #[props(default)]
    class: Option<String>,
    /// Fade length in milliseconds, also used as the unmount delay. Zero
    /// disables the animation.
    #[props(default = DEFAULT_FADE_MS)]
    fade_duration_ms: u64,
    /// Dialog body.
    children: Element,
) -> Element {
    let modal = use_modal_lifecycle(is_open, fade_duration_ms, on_close, on_dismiss);

    let phase = modal.phase();
    if !phase.is_mounted() {
        return rsx! {};
    }

    let appearance = ModalAppearance {
        title,
        dismiss_label,
        max_width,
        class,
        fade: FadeDuration::from_millis(fade_duration_ms),
    };
    let layout = appearance.layout(modal.instance(), phase);

    rsx! {
        div {
            id: "{layout.overlay_id}",
            class: "{layout.overlay_class}",
            style: "{layout.overlay_style}",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: layout.labelled_by.clone(),
            onclick: move |_| modal.overlay_clicked(ClickTarget::Overlay),

            div {
                class: "{layout.content_class}",
                style: "{layout.content_style}",
                // Clicks inside the content box never reach the overlay.
                onclick: move |evt| evt.stop_propagation(),

                if let Some(title) = layout.title.as_ref() {
                    h2 {
                        id: "{layout.title_id}",
                        "{title}"
                    }
                }

                {children}

                button {
                    class: BUTTON_CLASS,
                    r#type: "button",
                    aria_label: DISMISS_ARIA_LABEL,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        modal.dismiss_button_pressed();
                    },
                    "{layout.dismiss_label}"
                }
            }
        }
    }
}
