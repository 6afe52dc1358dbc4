//! Configuration for spark-alert.
//!
//! This crate provides the per-alert configuration bundle, the font and
//! color types it is made of, and a loader for user style overrides from
//! environment variables and files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, StyleLoader, StyleOverrides, default_style_path};
pub use types::{AlertConfiguration, AlertStyle, ColorTheme, ConfigurationError, Font, FontWeight};
