//! Responsive layout mode and the sidebar state machine.

use crate::config::NARROW_BREAKPOINT_PX;

/// Layout selected by the viewport breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Below the breakpoint: sidebar slides over content, menu button shown.
    #[default]
    Narrow,
    /// At or above the breakpoint: sidebar pinned, no menu button, no overlay.
    Wide,
}

impl LayoutMode {
    /// Layout for a viewport `width` in CSS pixels.
    pub fn from_width(width: f64) -> Self {
        if width >= NARROW_BREAKPOINT_PX as f64 {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// Layout from the `(min-width: …)` media query and a width sample.
    ///
    /// The query reports `false` until it has been evaluated after mount, so
    /// a negative answer defers to `sampled` (the window width read now).
    /// Without a sample the layout is [`LayoutMode::Narrow`].
    pub fn settle(query_matches: bool, sampled: Option<Self>) -> Self {
        if query_matches {
            Self::Wide
        } else {
            sampled.unwrap_or_default()
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }
}

/// Media query matching the wide layout.
pub fn wide_media_query() -> String {
    format!("(min-width: {}px)", NARROW_BREAKPOINT_PX)
}

/// Shared shell state, owned by the shell controller.
///
/// Children never hold this directly: they read `sidebar_open` through a
/// derived signal and request changes through a callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the sidebar (header menu button, close-on-navigate).
    pub fn toggle(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Close the sidebar (overlay click). Idempotent.
    pub fn close(&mut self) {
        self.sidebar_open = false;
    }

    /// Whether the dimming overlay is rendered.
    pub fn overlay_visible(&self, layout: LayoutMode) -> bool {
        self.sidebar_open && layout.is_narrow()
    }
}

/// Sidebar visibility; the wide layout ignores `is_open`.
pub fn sidebar_visible(layout: LayoutMode, is_open: bool) -> bool {
    layout == LayoutMode::Wide || is_open
}

/// Whether a sidebar link click should request a toggle.
///
/// Directional: only an open sidebar on a narrow viewport is closed, so a
/// click on an already-closed sidebar never reopens it.
pub fn closes_on_navigate(layout: LayoutMode, is_open: bool) -> bool {
    layout.is_narrow() && is_open
}

/// Whether a sidebar link click should request a toggle, given the layout
/// `sampled` at click time and the `fallback` layout signal.
pub fn nav_click_requests_toggle(
    sampled: Option<LayoutMode>,
    fallback: LayoutMode,
    is_open: bool,
) -> bool {
    closes_on_navigate(sampled.unwrap_or(fallback), is_open)
}
