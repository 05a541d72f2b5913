//! Core logic independent of rendering.
//!
//! - [`ConfigError`] - Route table and navigation list defects
//! - [`validate_config`] - Construction-time checks over the shipped tables

mod error;
mod validate;

pub use error::ConfigError;
pub use validate::validate_config;
