//! Demo host application.
//!
//! Owns the open intent and flips it in response to `on_close`, the way any
//! host of `Modal` is expected to. The long page body makes the scroll lock
//! visible.

use dioxus::prelude::*;
use fade_modal::{DismissReason, Modal, ModalSettings};

/// Number of filler paragraphs behind the dialog.
const FILLER_PARAGRAPHS: usize = 40;

#[component]
pub fn DemoApp() -> Element {
    let settings = use_context::<ModalSettings>();
    let mut open = use_signal(|| false);
    let mut show_title = use_signal(|| true);
    let mut dismissals = use_signal(Vec::<DismissReason>::new);

    let title = if show_title() {
        settings.title.clone()
    } else {
        String::new()
    };
    let last_dismissal = dismissals
        .read()
        .last()
        .map_or_else(|| "none yet".to_string(), ToString::to_string);

    rsx! {
        main {
            class: "demo-page",

            div {
                class: "demo-toolbar",
                button {
                    onclick: move |_| open.set(true),
                    "Open modal"
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: show_title(),
                        onchange: move |_| {
                            let current = show_title();
                            show_title.set(!current);
                        },
                    }
                    " Show title"
                }
                span {
                    class: "demo-log",
                    "Dismissals: {dismissals.read().len()} (last: {last_dismissal})"
                }
            }

            for index in 0..FILLER_PARAGRAPHS {
                p {
                    key: "{index}",
                    "Background paragraph {index}. Scrolling is suppressed while the dialog is open."
                }
            }

            Modal {
                is_open: open(),
                on_close: move |()| open.set(false),
                on_dismiss: move |reason: DismissReason| dismissals.write().push(reason),
                title,
                dismiss_label: settings.dismiss_label.clone(),
                max_width: settings.max_width,
                fade_duration_ms: settings.fade_duration_ms,

                p { "Your changes were saved." }
                p { "Press Escape, click outside this box, or use the button below to close it." }
            }
        }
    }
}
