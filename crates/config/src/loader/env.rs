//! Environment variable parsing for alert styling.
//!
//! Responsibilities:
//! - Read and parse the `SPARK_ALERT_*` environment variables.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading the style file (see `builder.rs`).
//! - .env file loading (handled by `StyleLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Unparseable values return `ConfigError::InvalidValue`.

use ratatui::style::Color;
use std::str::FromStr;

use super::error::ConfigError;
use super::overrides::StyleOverrides;
use crate::constants::{ENV_BUTTON_COLOR, ENV_BUTTON_TITLE_COLOR, ENV_THEME};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub(crate) fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_color(var: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value).map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("'{value}' is not a color name, index or #rrggbb value"),
    })
}

/// Collect the style overrides present in the environment.
pub fn overrides_from_env() -> Result<StyleOverrides, ConfigError> {
    let mut overrides = StyleOverrides::default();

    if let Some(theme) = env_var_or_none(ENV_THEME) {
        overrides.theme = Some(ColorTheme::from_str(&theme).map_err(|message| {
            ConfigError::InvalidValue {
                var: ENV_THEME.to_string(),
                message,
            }
        })?);
    }
    if let Some(color) = env_var_or_none(ENV_BUTTON_COLOR) {
        overrides.button_color = Some(parse_color(ENV_BUTTON_COLOR, &color)?);
    }
    if let Some(color) = env_var_or_none(ENV_BUTTON_TITLE_COLOR) {
        overrides.button_title_color = Some(parse_color(ENV_BUTTON_TITLE_COLOR, &color)?);
    }

    Ok(overrides)
}
