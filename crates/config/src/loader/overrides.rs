//! Partial style values layered on top of a theme preset.
//!
//! Responsibilities:
//! - Describe the JSON style file format.
//! - Merge one override layer onto an `AlertStyle`.
//!
//! Invariants:
//! - Unset fields leave the underlying style untouched.
//! - Unknown keys in a style file are rejected so typos surface as errors.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::types::{AlertStyle, ColorTheme, Font};

/// One layer of optional style values.
///
/// ```json
/// {
///   "theme": "dark",
///   "button_color": "red",
///   "title_font": { "size": 20, "weight": "bold" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub theme: Option<ColorTheme>,
    pub title_font: Option<Font>,
    pub title_color: Option<Color>,
    pub message_font: Option<Font>,
    pub message_color: Option<Color>,
    pub button_font: Option<Font>,
    pub button_color: Option<Color>,
    pub button_title_color: Option<Color>,
    pub container_color: Option<Color>,
    pub separator_color: Option<Color>,
    pub shadow_color: Option<Color>,
}

impl StyleOverrides {
    /// Write every set field into `style`. `theme` is resolved by the loader.
    pub fn apply_to(&self, style: &mut AlertStyle) {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut style.title_font, self.title_font);
        set(&mut style.title_color, self.title_color);
        set(&mut style.message_font, self.message_font);
        set(&mut style.message_color, self.message_color);
        set(&mut style.button_font, self.button_font);
        set(&mut style.button_color, self.button_color);
        set(&mut style.button_title_color, self.button_title_color);
        set(&mut style.container_color, self.container_color);
        set(&mut style.separator_color, self.separator_color);
        set(&mut style.shadow_color, self.shadow_color);
    }
}
