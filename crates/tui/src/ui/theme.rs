//! TUI-specific style helpers.
//!
//! This module extends the config crate's font type with ergonomic helpers
//! for building ratatui `Style` objects consistently across the alert.

use ratatui::style::{Modifier, Style};
use spark_alert_config::Font;

/// Trait extending `Font` with ratatui style builders.
pub trait FontExt {
    /// Base style carrying the font's modifiers and no colors.
    fn style(&self) -> Style;
}

impl FontExt for Font {
    fn style(&self) -> Style {
        Style::default().add_modifier(self.modifiers())
    }
}

/// Extra emphasis applied to the focused button's title.
pub fn focus_modifier() -> Modifier {
    Modifier::UNDERLINED
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_alert_config::FontWeight;

    #[test]
    fn test_font_style_has_no_colors() {
        let style = Font::system_weighted(18, FontWeight::Semibold).style();
        assert_eq!(style.fg, None);
        assert_eq!(style.bg, None);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
