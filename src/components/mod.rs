//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`shell`] - Shell controller owning sidebar state and layout
//! - [`sidebar`] - Navigation sidebar
//! - [`header`] - Header bar with menu button and user block
//! - [`pages`] - Page units and the page outlet
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod header;
pub mod icons;
pub mod pages;
pub mod router;
pub mod shell;
pub mod sidebar;

pub use router::AppRouter;
