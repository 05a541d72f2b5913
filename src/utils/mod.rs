//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window access, hash navigation, console logging

pub mod dom;
