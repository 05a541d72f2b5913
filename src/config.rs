//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the sidebar (the accent word is rendered separately).
pub const APP_NAME: &str = "Licht";

/// Accent word appended to [`APP_NAME`].
pub const APP_NAME_ACCENT: &str = "AI";

// =============================================================================
// Routing
// =============================================================================

/// Root path; also the target of the catch-all redirect.
pub const ROOT_PATH: &str = "/";

// =============================================================================
// Layout
// =============================================================================

/// Viewport width (CSS px) at which the layout switches from narrow to wide.
///
/// Must agree with the `min-width` queries in the component stylesheets.
pub const NARROW_BREAKPOINT_PX: u32 = 1024;

// =============================================================================
// Header
// =============================================================================

/// Static header copy.
pub mod header {
    /// Placeholder of the (non-functional) global search input.
    pub const SEARCH_PLACEHOLDER: &str = "Global Search (Jobs, Housing)...";
    /// Display name in the user identity block.
    pub const USER_NAME: &str = "Alex MoPed";
    /// Plan shown under the user name.
    pub const USER_PLAN: &str = "Licht Premium";
    /// Avatar image.
    pub const AVATAR_URL: &str = "https://picsum.photos/seed/moped-user/40/40";
}

// =============================================================================
// Sidebar Promotional Panel
// =============================================================================

/// Promotional panel at the bottom of the sidebar.
pub mod promo {
    use crate::models::{NavIcon, NavItem};

    /// Link target of the panel, validated like a navigation entry.
    pub const ITEM: NavItem = NavItem {
        path: "/applications",
        icon: NavIcon::Layers,
        label: "Auto-Apply",
    };
    pub const CAPTION: &str = "12 applications today";
    pub const BADGE: &str = "Sync Status";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
