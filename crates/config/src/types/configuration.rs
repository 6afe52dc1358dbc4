//! The value bundle describing one alert instance.
//!
//! Responsibilities:
//! - Hold the alert's title, message and ordered button labels.
//! - Hold the fonts and colors used for every element, with documented defaults.
//!
//! Does NOT handle:
//! - Layout or rendering (see the TUI crate).
//! - Validation at construction; `validate()` is opt-in.
//!
//! Invariants:
//! - `title`, `message` and `buttons` are fixed after construction.
//! - The order of `buttons` defines each button's zero-based index.

use ratatui::style::Color;
use thiserror::Error;

use super::font::Font;
use super::theme::AlertStyle;

/// Problems reported by [`AlertConfiguration::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("alert '{title}' has no buttons; it cannot be answered")]
    NoButtons { title: String },
}

/// Text, button labels and styling for one alert.
///
/// Only `title`, `message` and `buttons` are required; every style field
/// starts from [`AlertStyle::default`] and may be reassigned afterwards.
///
/// # Example
///
/// ```rust
/// use ratatui::style::Color;
/// use spark_alert_config::AlertConfiguration;
///
/// let mut config = AlertConfiguration::new(
///     "Delete item?",
///     "This cannot be undone",
///     ["Cancel", "Delete"],
/// );
/// config.button_color = Color::Red;
/// assert_eq!(config.buttons(), ["Cancel", "Delete"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfiguration {
    title: String,
    pub title_font: Font,
    pub title_color: Color,
    message: String,
    pub message_font: Font,
    pub message_color: Color,
    buttons: Vec<String>,
    pub button_font: Font,
    pub button_color: Color,
    pub button_title_color: Color,
    pub container_color: Color,
    pub separator_color: Color,
    pub shadow_color: Color,
}

impl AlertConfiguration {
    /// Create a configuration with default styling.
    pub fn new<I, S>(title: impl Into<String>, message: impl Into<String>, buttons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let style = AlertStyle::default();
        Self {
            title: title.into(),
            title_font: style.title_font,
            title_color: style.title_color,
            message: message.into(),
            message_font: style.message_font,
            message_color: style.message_color,
            buttons: buttons.into_iter().map(Into::into).collect(),
            button_font: style.button_font,
            button_color: style.button_color,
            button_title_color: style.button_title_color,
            container_color: style.container_color,
            separator_color: style.separator_color,
            shadow_color: style.shadow_color,
        }
    }

    /// Replace every style field with the values from `style`.
    pub fn with_style(mut self, style: AlertStyle) -> Self {
        self.apply_style(style);
        self
    }

    /// Overwrite every style field in place.
    pub fn apply_style(&mut self, style: AlertStyle) {
        self.title_font = style.title_font;
        self.title_color = style.title_color;
        self.message_font = style.message_font;
        self.message_color = style.message_color;
        self.button_font = style.button_font;
        self.button_color = style.button_color;
        self.button_title_color = style.button_title_color;
        self.container_color = style.container_color;
        self.separator_color = style.separator_color;
        self.shadow_color = style.shadow_color;
    }

    /// The current style fields as one value.
    pub fn style(&self) -> AlertStyle {
        AlertStyle {
            title_font: self.title_font,
            title_color: self.title_color,
            message_font: self.message_font,
            message_color: self.message_color,
            button_font: self.button_font,
            button_color: self.button_color,
            button_title_color: self.button_title_color,
            container_color: self.container_color,
            separator_color: self.separator_color,
            shadow_color: self.shadow_color,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Button labels in index order.
    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    /// Check that the alert can actually be answered.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.buttons.is_empty() {
            return Err(ConfigurationError::NoButtons {
                title: self.title.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorTheme, FontWeight};

    fn delete_config() -> AlertConfiguration {
        AlertConfiguration::new("Delete item?", "This cannot be undone", ["Cancel", "Delete"])
    }

    #[test]
    fn test_new_uses_default_style() {
        let config = delete_config();
        assert_eq!(config.style(), AlertStyle::default());
        assert_eq!(config.title(), "Delete item?");
        assert_eq!(config.message(), "This cannot be undone");
        assert_eq!(config.buttons(), ["Cancel", "Delete"]);
    }

    #[test]
    fn test_style_fields_are_mutable() {
        let mut config = delete_config();
        config.title_font = Font::system_weighted(22, FontWeight::Heavy);
        config.button_color = Color::Red;

        assert_eq!(config.style().title_font.size, 22);
        assert_eq!(config.style().button_color, Color::Red);
    }

    #[test]
    fn test_with_style_replaces_all_fields() {
        let dark = AlertStyle::from_color_theme(ColorTheme::Dark);
        let config = delete_config().with_style(dark);
        assert_eq!(config.style(), dark);
        assert_eq!(config.buttons().len(), 2);
    }

    #[test]
    fn test_validate_rejects_empty_buttons() {
        let config = AlertConfiguration::new("Nothing", "No way out", Vec::<String>::new());
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::NoButtons {
                title: "Nothing".to_string()
            })
        );
    }

    #[test]
    fn test_validate_accepts_buttons() {
        assert!(delete_config().validate().is_ok());
    }
}
