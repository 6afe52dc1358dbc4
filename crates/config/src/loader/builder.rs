//! Style loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `StyleLoader` for layered style merging.
//! - Support loading from a JSON style file, environment variables, and builder methods.
//! - Build the final `AlertStyle`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Per-alert text and buttons (see `AlertConfiguration`).
//!
//! Invariants / Assumptions:
//! - Precedence, highest first: builder methods, environment, style file, theme preset.
//! - The theme preset is chosen with the same precedence before overrides are applied.
//! - A missing style file at the default path is not an error; a missing
//!   explicitly configured path is.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use super::env::overrides_from_env;
use super::error::ConfigError;
use super::overrides::StyleOverrides;
use super::path::default_style_path;
use crate::types::{AlertStyle, ColorTheme};

/// Loader that builds an `AlertStyle` from a style file, the environment and code.
///
/// # Example
///
/// ```rust
/// use spark_alert_config::{ColorTheme, StyleLoader};
///
/// let style = StyleLoader::new()
///     .with_theme(ColorTheme::HighContrast)
///     .build();
/// assert_eq!(style, spark_alert_config::AlertStyle::from_color_theme(ColorTheme::HighContrast));
/// ```
#[derive(Debug, Default)]
pub struct StyleLoader {
    style_path: Option<PathBuf>,
    file: StyleOverrides,
    env: StyleOverrides,
    code: StyleOverrides,
}

impl StyleLoader {
    /// Create a new style loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored. Set `DOTENV_DISABLED` to
    /// "true" or "1" to skip loading entirely.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use an explicit style file instead of the platform default.
    pub fn with_style_path(mut self, path: PathBuf) -> Self {
        self.style_path = Some(path);
        self
    }

    /// Read overrides from the style file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let (path, explicit) = match &self.style_path {
            Some(path) => (path.clone(), true),
            None => match default_style_path() {
                Ok(path) => (path, false),
                Err(e) => {
                    tracing::debug!("No default style path available: {e:#}");
                    return Ok(self);
                }
            },
        };

        if let Some(overrides) = read_style_file(&path, explicit)? {
            self.file = overrides;
        }
        Ok(self)
    }

    /// Read overrides from `SPARK_ALERT_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        self.env = overrides_from_env()?;
        Ok(self)
    }

    /// Select a theme preset, taking precedence over the file and environment.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.code.theme = Some(theme);
        self
    }

    /// Apply overrides from code, taking precedence over every other layer.
    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        let theme = self.code.theme;
        self.code = overrides;
        self.code.theme = self.code.theme.or(theme);
        self
    }

    /// The theme that `build` will start from.
    pub fn resolved_theme(&self) -> ColorTheme {
        self.code
            .theme
            .or(self.env.theme)
            .or(self.file.theme)
            .unwrap_or_default()
    }

    /// Merge every layer into the final style.
    pub fn build(self) -> AlertStyle {
        let theme = self.resolved_theme();
        let mut style = AlertStyle::from_color_theme(theme);
        for layer in [&self.file, &self.env, &self.code] {
            layer.apply_to(&mut style);
        }
        tracing::debug!(theme = %theme, "Resolved alert style");
        style
    }
}

/// Read and parse a style file, returning `None` when an implicit path does not exist.
fn read_style_file(path: &Path, explicit: bool) -> Result<Option<StyleOverrides>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
            tracing::debug!("No style file at {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::StyleFileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let overrides = serde_json::from_str(&content).map_err(|source| ConfigError::StyleFileParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(overrides))
}
