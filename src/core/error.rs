//! Error types for the shell.
//!
//! The shell performs no I/O, so the only failure domain is static
//! configuration: the route table and the navigation list.

use thiserror::Error;

/// Defects in the route table or navigation list.
///
/// These are construction-time errors. They are caught by
/// [`validate_config`](super::validate_config) in tests and debug builds,
/// never handled while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A route or navigation entry has an empty path.
    #[error("empty path in {0}")]
    EmptyPath(&'static str),
    /// A path does not start with '/'.
    #[error("path '{0}' must start with '/'")]
    NotAbsolute(&'static str),
    /// Two routes share the same path.
    #[error("duplicate route '{0}'")]
    DuplicateRoute(&'static str),
    /// Two navigation entries share the same path.
    #[error("duplicate navigation item '{0}'")]
    DuplicateNavItem(&'static str),
    /// A navigation entry points at a path with no route.
    #[error("navigation item '{0}' has no matching route")]
    UnroutedNavItem(&'static str),
    /// The catch-all target is not itself a route.
    #[error("catch-all target '{0}' has no matching route")]
    MissingFallback(&'static str),
}
