//! Theme types for alert styling.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define `AlertStyle`, the full set of fonts and colors applied to one alert.
//! - Provide conversion from `ColorTheme` to `AlertStyle`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//! - Loading overrides from files or the environment (see `loader` module).
//!
//! Invariants:
//! - `AlertStyle::default()` equals `AlertStyle::from_color_theme(ColorTheme::Default)`.
//! - `ColorTheme` parses from the same snake_case names it serializes to.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::font::{Font, FontWeight};
use crate::constants::{
    DEFAULT_BUTTON_FONT_SIZE, DEFAULT_MESSAGE_FONT_SIZE, DEFAULT_TITLE_FONT_SIZE,
};

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    fn config_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::HighContrast => "high_contrast",
            Self::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        [
            Self::Default,
            Self::Dark,
            Self::HighContrast,
            Self::Monochrome,
        ]
        .into_iter()
        .find(|theme| theme.config_name() == normalized)
        .ok_or_else(|| {
            format!("unknown theme '{s}' (expected default, dark, high_contrast or monochrome)")
        })
    }
}

/// Fonts and colors applied to one alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStyle {
    pub title_font: Font,
    pub title_color: Color,
    pub message_font: Font,
    pub message_color: Color,
    pub button_font: Font,
    pub button_color: Color,
    pub button_title_color: Color,
    pub container_color: Color,
    pub separator_color: Color,
    pub shadow_color: Color,
}

impl Default for AlertStyle {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}

impl AlertStyle {
    /// Expand a `ColorTheme` into a full alert style.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        let title_font = Font::system_weighted(DEFAULT_TITLE_FONT_SIZE, FontWeight::Semibold);
        let message_font = Font::system(DEFAULT_MESSAGE_FONT_SIZE);
        let button_font = Font::system_weighted(DEFAULT_BUTTON_FONT_SIZE, FontWeight::Semibold);

        match theme {
            ColorTheme::Default => Self {
                title_font,
                title_color: Color::Black,
                message_font,
                message_color: Color::Black,
                button_font,
                button_color: Color::Blue,
                button_title_color: Color::White,
                container_color: Color::White,
                separator_color: Color::Gray,
                shadow_color: Color::DarkGray,
            },
            ColorTheme::Dark => Self {
                title_font,
                title_color: Color::White,
                message_font,
                message_color: Color::Gray,
                button_font,
                button_color: Color::Indexed(110), // soft blue
                button_title_color: Color::Black,
                container_color: Color::Indexed(236),
                separator_color: Color::Indexed(240),
                shadow_color: Color::Black,
            },
            ColorTheme::HighContrast => Self {
                title_font,
                title_color: Color::White,
                message_font,
                message_color: Color::White,
                button_font,
                button_color: Color::Yellow,
                button_title_color: Color::Black,
                container_color: Color::Black,
                separator_color: Color::White,
                shadow_color: Color::Gray,
            },
            ColorTheme::Monochrome => Self {
                title_font,
                title_color: Color::Black,
                message_font,
                message_color: Color::Indexed(238),
                button_font,
                button_color: Color::Indexed(240),
                button_title_color: Color::White,
                container_color: Color::Indexed(255),
                separator_color: Color::Indexed(250),
                shadow_color: Color::Indexed(244),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_matches_documented_defaults() {
        let style = AlertStyle::default();
        assert_eq!(style.title_font, Font::system_weighted(18, FontWeight::Semibold));
        assert_eq!(style.title_color, Color::Black);
        assert_eq!(style.message_font, Font::system(16));
        assert_eq!(style.message_color, Color::Black);
        assert_eq!(style.button_font, Font::system_weighted(16, FontWeight::Semibold));
        assert_eq!(style.button_color, Color::Blue);
        assert_eq!(style.button_title_color, Color::White);
    }

    #[test]
    fn test_theme_from_str_accepts_config_names() {
        assert_eq!("dark".parse::<ColorTheme>(), Ok(ColorTheme::Dark));
        assert_eq!(
            "High-Contrast".parse::<ColorTheme>(),
            Ok(ColorTheme::HighContrast)
        );
        assert!("neon".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_theme_serde_round_names() {
        let json = serde_json::to_string(&ColorTheme::HighContrast).unwrap();
        assert_eq!(json, "\"high_contrast\"");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ColorTheme::Monochrome.to_string(), "Monochrome");
    }
}
