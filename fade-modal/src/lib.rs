//! fade-modal - a modal dialog component for Dioxus
//!
//! The dialog fades in when opened, fades out before it is unmounted, closes
//! on Escape, on clicks on the overlay itself and on its dismiss button, and
//! suppresses background scrolling while it is open.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dioxus::prelude::*;
//! use fade_modal::Modal;
//!
//! #[component]
//! fn App() -> Element {
//!     let mut open = use_signal(|| false);
//!     rsx! {
//!         button { onclick: move |_| open.set(true), "Save" }
//!         Modal {
//!             is_open: open(),
//!             on_close: move |()| open.set(false),
//!             p { "Your changes were saved." }
//!         }
//!     }
//! }
//! ```
//!
//! Fade timers run on Tokio, so the host must enter a Tokio runtime on the
//! UI thread before launching Dioxus.
//!
//! ## Architecture
//!
//! 1. `visibility` is an explicit phase machine (`hidden`, `entering`,
//!    `visible`, `exiting`) that returns effects instead of performing them
//! 2. `dismissal` gates Escape and overlay clicks on the open intent
//! 3. `scroll_lock` reference-counts the process-wide scroll lock
//! 4. `lifecycle` ties the three together behind the `ModalHost` trait, and
//!    `hooks` implements that trait with Dioxus tasks and document evals

// Public library modules
pub mod components;
pub mod config;
pub mod dismissal;
pub mod error;
pub mod hooks;
pub mod lifecycle;
pub mod presentation;
pub mod scroll_lock;
pub mod visibility;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use components::Modal;
pub use config::{ModalConfig, ModalSettings};
pub use dismissal::DismissReason;
pub use error::ConfigError;
pub use presentation::MODAL_STYLESHEET;
pub use visibility::{FadeDuration, Phase};
