//! Reusable UI components.
//!
//! - [`toast`] - non-blocking notification overlay

pub mod toast;

pub use toast::render_toast;
