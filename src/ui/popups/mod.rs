//! Modal popups.

pub mod help;
