//! Configuration type definitions for spark-alert.
//!
//! Responsibilities:
//! - Define fonts, color themes and the per-alert configuration bundle.
//! - Ensure consistent defaults across every alert.
//!
//! Does NOT handle:
//! - Loading style overrides from files or environment variables (see `loader` module).
//! - Layout, rendering or input handling (see the TUI crate).

mod configuration;
mod font;
mod theme;

pub use configuration::{AlertConfiguration, ConfigurationError};
pub use font::{Font, FontWeight};
pub use theme::{AlertStyle, ColorTheme};
