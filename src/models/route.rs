//! Hash-based route table.
//!
//! URL format: `#/path` (e.g., `#/jobs`, `#/content-factory`). Matching is
//! exact and case-sensitive; anything unmatched falls through to the
//! catch-all, which redirects to [`ROOT_PATH`].

use crate::config::ROOT_PATH;

/// Page units the shell can mount into its main region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    AiJobMatch,
    VisionStudio,
    JobSearch,
    HousingSearch,
    SearchEngine,
    Calendar,
    Applications,
    ContentFactory,
    Chatbot,
    VoiceAssistant,
    Profile,
}

impl Page {
    /// Human-readable title used by the page frame.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::AiJobMatch => "AI Job Match",
            Self::VisionStudio => "Vision Studio",
            Self::JobSearch => "Job Search",
            Self::HousingSearch => "Housing Search",
            Self::SearchEngine => "Search Engine",
            Self::Calendar => "Calendar",
            Self::Applications => "Applications",
            Self::ContentFactory => "Content Factory",
            Self::Chatbot => "Chatbot",
            Self::VoiceAssistant => "Voice Assistant",
            Self::Profile => "Profile",
        }
    }
}

/// A single entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

/// Every non-catch-all route, in declaration order.
pub const ROUTES: &[Route] = &[
    Route { path: "/", page: Page::Dashboard },
    Route { path: "/job-match", page: Page::AiJobMatch },
    Route { path: "/vision-studio", page: Page::VisionStudio },
    Route { path: "/jobs", page: Page::JobSearch },
    Route { path: "/housing", page: Page::HousingSearch },
    Route { path: "/search", page: Page::SearchEngine },
    Route { path: "/calendar", page: Page::Calendar },
    Route { path: "/applications", page: Page::Applications },
    Route { path: "/content-factory", page: Page::ContentFactory },
    Route { path: "/chat", page: Page::Chatbot },
    Route { path: "/voice", page: Page::VoiceAssistant },
    Route { path: "/profile", page: Page::Profile },
];

/// Outcome of resolving a path against the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The path exact-matched a route.
    Matched(Route),
    /// No route matched; the catch-all sends the user to `to`.
    Redirect {
        /// The unmatched path as requested.
        from: String,
        /// Route bound to the catch-all target.
        to: Route,
    },
}

impl Resolution {
    /// The route whose page should be mounted.
    pub fn route(&self) -> Route {
        match self {
            Self::Matched(route) => *route,
            Self::Redirect { to, .. } => *to,
        }
    }

    pub fn page(&self) -> Page {
        self.route().page
    }

    /// Canonical path used for active-link highlighting.
    pub fn active_path(&self) -> &'static str {
        self.route().path
    }
}

/// Looks up the route bound to exactly `path`.
pub fn find_route(path: &str) -> Option<Route> {
    ROUTES.iter().copied().find(|route| route.path == path)
}

/// Route used by the catch-all.
///
/// The table is validated to contain [`ROOT_PATH`]; if it somehow does not,
/// the first declared route stands in so resolution stays total.
pub fn fallback_route() -> Route {
    find_route(ROOT_PATH).unwrap_or(ROUTES[0])
}

/// Resolve a path (already stripped of `#`) to the page to mount.
pub fn resolve(path: &str) -> Resolution {
    match find_route(path) {
        Some(route) => Resolution::Matched(route),
        None => Resolution::Redirect {
            from: path.to_string(),
            to: fallback_route(),
        },
    }
}

/// Convert a URL fragment into a route path.
///
/// - `""`, `"#"` and `"#/"` are the root path
/// - a missing leading slash is added (`#jobs` is `/jobs`)
/// - a query string is not part of the path
pub fn path_from_hash(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    let fragment = fragment.split('?').next().unwrap_or_default();

    if fragment.is_empty() {
        return ROOT_PATH.to_string();
    }

    if fragment.starts_with('/') {
        fragment.to_string()
    } else {
        format!("/{}", fragment)
    }
}

/// Convert a route path into a URL fragment (`/jobs` becomes `#/jobs`).
pub fn to_hash(path: &str) -> String {
    format!("#{}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_redirect(path: &str) -> bool {
        matches!(resolve(path), Resolution::Redirect { .. })
    }

    #[test]
    fn test_every_route_resolves_to_its_page() {
        for route in ROUTES {
            assert_eq!(resolve(route.path), Resolution::Matched(*route));
            assert_eq!(resolve(route.path).active_path(), route.path);
        }
    }

    #[test]
    fn test_bound_pages() {
        assert_eq!(resolve("/").page(), Page::Dashboard);
        assert_eq!(resolve("/job-match").page(), Page::AiJobMatch);
        assert_eq!(resolve("/vision-studio").page(), Page::VisionStudio);
        assert_eq!(resolve("/jobs").page(), Page::JobSearch);
        assert_eq!(resolve("/housing").page(), Page::HousingSearch);
        assert_eq!(resolve("/search").page(), Page::SearchEngine);
        assert_eq!(resolve("/calendar").page(), Page::Calendar);
        assert_eq!(resolve("/applications").page(), Page::Applications);
        assert_eq!(resolve("/content-factory").page(), Page::ContentFactory);
        assert_eq!(resolve("/chat").page(), Page::Chatbot);
        assert_eq!(resolve("/voice").page(), Page::VoiceAssistant);
        assert_eq!(resolve("/profile").page(), Page::Profile);
    }

    #[test]
    fn test_unknown_path_redirects_to_dashboard() {
        let resolution = resolve("/does-not-exist");
        assert!(is_redirect("/does-not-exist"));
        assert_eq!(resolution.page(), Page::Dashboard);
        assert_eq!(resolution.active_path(), "/");
        assert_eq!(
            resolution,
            Resolution::Redirect {
                from: "/does-not-exist".to_string(),
                to: Route { path: "/", page: Page::Dashboard },
            }
        );
    }

    #[test]
    fn test_matching_is_exact_and_case_sensitive() {
        assert!(is_redirect("/Jobs"));
        assert!(is_redirect("/jobs/"));
        assert!(is_redirect("/jobs/123"));
        assert!(is_redirect("/job"));
        assert!(is_redirect(""));
    }

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
        assert_eq!(path_from_hash("#/jobs"), "/jobs");
        assert_eq!(path_from_hash("#jobs"), "/jobs");
        assert_eq!(path_from_hash("#/jobs?q=rust"), "/jobs");
        assert_eq!(path_from_hash("#?q=rust"), "/");
        assert_eq!(path_from_hash("#/content-factory"), "/content-factory");
    }

    #[test]
    fn test_to_hash() {
        assert_eq!(to_hash("/"), "#/");
        assert_eq!(to_hash("/voice"), "#/voice");
    }

    #[test]
    fn test_hash_round_trip_through_resolution() {
        let resolution = resolve(&path_from_hash("#/calendar"));
        assert_eq!(to_hash(resolution.active_path()), "#/calendar");
    }
}
