//! Static checks over the route table and navigation list.

use std::collections::HashSet;

use super::ConfigError;
use crate::config::ROOT_PATH;
use crate::models::{NavItem, Route};

fn check_path(path: &'static str, owner: &'static str) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::EmptyPath(owner));
    }
    if !path.starts_with('/') {
        return Err(ConfigError::NotAbsolute(path));
    }
    Ok(())
}

/// Validate a route table.
///
/// Every path must be non-empty, absolute and unique, and the catch-all
/// target `fallback` must be one of the routes.
pub fn validate_routes(routes: &[Route], fallback: &'static str) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for route in routes {
        check_path(route.path, "route table")?;
        if !seen.insert(route.path) {
            return Err(ConfigError::DuplicateRoute(route.path));
        }
    }

    if !seen.contains(fallback) {
        return Err(ConfigError::MissingFallback(fallback));
    }

    Ok(())
}

/// Validate navigation entries against a route table.
pub fn validate_nav(items: &[NavItem], routes: &[Route]) -> Result<(), ConfigError> {
    let routed: HashSet<_> = routes.iter().map(|r| r.path).collect();
    let mut seen = HashSet::new();

    for item in items {
        check_path(item.path, "navigation list")?;
        if !seen.insert(item.path) {
            return Err(ConfigError::DuplicateNavItem(item.path));
        }
        if !routed.contains(item.path) {
            return Err(ConfigError::UnroutedNavItem(item.path));
        }
    }

    Ok(())
}

/// Validate the tables the application ships with.
pub fn validate_config() -> Result<(), ConfigError> {
    validate_routes(crate::models::ROUTES, ROOT_PATH)?;
    validate_nav(crate::models::NAV_ITEMS, crate::models::ROUTES)?;
    validate_nav(&[crate::config::promo::ITEM], crate::models::ROUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NavIcon, Page};

    const fn route(path: &'static str, page: Page) -> Route {
        Route { path, page }
    }

    const fn item(path: &'static str) -> NavItem {
        NavItem {
            path,
            icon: NavIcon::Dashboard,
            label: "x",
        }
    }

    #[test]
    fn test_shipped_config_is_valid() {
        assert_eq!(validate_config(), Ok(()));
    }

    #[test]
    fn test_duplicate_route() {
        let routes = [
            route("/", Page::Dashboard),
            route("/jobs", Page::JobSearch),
            route("/jobs", Page::HousingSearch),
        ];
        assert_eq!(
            validate_routes(&routes, "/"),
            Err(ConfigError::DuplicateRoute("/jobs"))
        );
    }

    #[test]
    fn test_route_path_shape() {
        assert_eq!(
            validate_routes(&[route("", Page::Dashboard)], "/"),
            Err(ConfigError::EmptyPath("route table"))
        );
        assert_eq!(
            validate_routes(&[route("jobs", Page::JobSearch)], "/"),
            Err(ConfigError::NotAbsolute("jobs"))
        );
    }

    #[test]
    fn test_missing_fallback() {
        let routes = [route("/jobs", Page::JobSearch)];
        assert_eq!(
            validate_routes(&routes, "/"),
            Err(ConfigError::MissingFallback("/"))
        );
    }

    #[test]
    fn test_nav_item_without_route() {
        let routes = [route("/", Page::Dashboard)];
        assert_eq!(
            validate_nav(&[item("/"), item("/jobs")], &routes),
            Err(ConfigError::UnroutedNavItem("/jobs"))
        );
    }

    #[test]
    fn test_duplicate_nav_item() {
        let routes = [route("/", Page::Dashboard)];
        assert_eq!(
            validate_nav(&[item("/"), item("/")], &routes),
            Err(ConfigError::DuplicateNavItem("/"))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::DuplicateRoute("/jobs").to_string(),
            "duplicate route '/jobs'"
        );
        assert_eq!(
            ConfigError::UnroutedNavItem("/x").to_string(),
            "navigation item '/x' has no matching route"
        );
    }
}
