//! UI components for fade-modal.

mod modal;

pub use modal::Modal;
