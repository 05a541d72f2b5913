//! Sidebar navigation descriptors.

/// Symbolic glyph for a navigation entry.
///
/// Mapped to a concrete icon by `components::icons`, so the model stays free
/// of any rendering crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Star,
    Video,
    Briefcase,
    Home,
    Globe,
    Calendar,
    Layers,
    Factory,
    Message,
    Mic,
    User,
}

/// A single sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub icon: NavIcon,
    pub label: &'static str,
}

/// Sidebar links in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", icon: NavIcon::Dashboard, label: "Dashboard" },
    NavItem { path: "/job-match", icon: NavIcon::Star, label: "AI Matchmaker" },
    NavItem { path: "/vision-studio", icon: NavIcon::Video, label: "Vision Studio" },
    NavItem { path: "/jobs", icon: NavIcon::Briefcase, label: "Job Search" },
    NavItem { path: "/housing", icon: NavIcon::Home, label: "Housing" },
    NavItem { path: "/search", icon: NavIcon::Globe, label: "mofa Search" },
    NavItem { path: "/calendar", icon: NavIcon::Calendar, label: "Calendar" },
    NavItem { path: "/applications", icon: NavIcon::Layers, label: "Applications" },
    NavItem { path: "/content-factory", icon: NavIcon::Factory, label: "Content Factory" },
    NavItem { path: "/chat", icon: NavIcon::Message, label: "AI Assistant" },
    NavItem { path: "/voice", icon: NavIcon::Mic, label: "Voice Sync" },
    NavItem { path: "/profile", icon: NavIcon::User, label: "Profile" },
];

/// Whether the link for `item_path` is highlighted while `current_path` is shown.
///
/// Exact comparison: `/` is active only on `/`, never as a prefix of `/jobs`.
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::{ROUTES, resolve};

    fn active_index(current_path: &str) -> Option<usize> {
        NAV_ITEMS
            .iter()
            .position(|item| is_active(current_path, item.path))
    }

    #[test]
    fn test_display_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "AI Matchmaker",
                "Vision Studio",
                "Job Search",
                "Housing",
                "mofa Search",
                "Calendar",
                "Applications",
                "Content Factory",
                "AI Assistant",
                "Voice Sync",
                "Profile",
            ]
        );
    }

    #[test]
    fn test_root_is_not_a_prefix_match() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/jobs", "/"));
        assert!(!is_active("/", "/jobs"));
        assert!(!is_active("/jobs/", "/jobs"));
    }

    #[test]
    fn test_exactly_one_active_link_per_route() {
        for route in ROUTES {
            let current = resolve(route.path).active_path();
            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|item| is_active(current, item.path))
                .collect();
            assert_eq!(active.len(), 1, "route {}", route.path);
            assert_eq!(active[0].path, route.path);
        }
    }

    #[test]
    fn test_redirected_path_highlights_dashboard() {
        let current = resolve("/nowhere").active_path();
        assert_eq!(active_index(current), Some(0));
    }

    #[test]
    fn test_active_index() {
        assert_eq!(active_index("/jobs"), Some(3));
        assert_eq!(active_index("/profile"), Some(NAV_ITEMS.len() - 1));
        assert_eq!(active_index("/unknown"), None);
    }
}
