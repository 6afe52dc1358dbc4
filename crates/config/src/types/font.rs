//! Font descriptions for alert text elements.
//!
//! Responsibilities:
//! - Describe a font as a point size plus weight and slant.
//! - Translate a font into the ratatui text modifiers a terminal can show.
//!
//! Invariants:
//! - `size` is carried verbatim; terminal cells cannot scale text, so only
//!   weight and slant reach the rendered output.

use ratatui::style::Modifier;
use serde::{Deserialize, Serialize};

/// Stroke weight of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

impl FontWeight {
    /// Whether the weight renders as bold text.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Semibold | Self::Bold | Self::Heavy)
    }
}

/// A system font at a given size and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    pub size: u16,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub italic: bool,
}

impl Font {
    /// Regular-weight system font.
    pub const fn system(size: u16) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    /// System font with an explicit weight.
    pub const fn system_weighted(size: u16, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            italic: false,
        }
    }

    /// Same font, slanted.
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Text modifiers that express this font in a terminal cell.
    pub fn modifiers(&self) -> Modifier {
        let mut modifier = match self.weight {
            FontWeight::Light => Modifier::DIM,
            FontWeight::Regular | FontWeight::Medium => Modifier::empty(),
            FontWeight::Semibold | FontWeight::Bold | FontWeight::Heavy => Modifier::BOLD,
        };
        if self.italic {
            modifier |= Modifier::ITALIC;
        }
        modifier
    }
}
