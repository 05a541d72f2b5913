//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Route`], [`Page`], [`Resolution`] - Hash-based route table
//! - [`NavItem`], [`NavIcon`] - Sidebar navigation descriptors
//! - [`LayoutMode`], [`ShellState`] - Responsive layout and sidebar state

mod layout;
mod nav;
mod route;

pub use layout::{
    LayoutMode, ShellState, nav_click_requests_toggle, sidebar_visible, wide_media_query,
};
pub use nav::{NAV_ITEMS, NavIcon, NavItem, is_active};
pub use route::{Page, ROUTES, Resolution, Route, path_from_hash, resolve, to_hash};
