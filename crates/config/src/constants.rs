//! Centralized constants for the spark-alert workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Font Defaults
// =============================================================================

/// Default point size of the alert title.
pub const DEFAULT_TITLE_FONT_SIZE: u16 = 18;

/// Default point size of the alert message.
pub const DEFAULT_MESSAGE_FONT_SIZE: u16 = 16;

/// Default point size of action button titles.
pub const DEFAULT_BUTTON_FONT_SIZE: u16 = 16;

// =============================================================================
// Layout Metrics (terminal cells)
// =============================================================================

/// Horizontal distance between the screen edge and the alert container.
pub const CONTAINER_INSET: u16 = 2;

/// Offset of the drop shadow from the container, in both axes.
pub const SHADOW_OFFSET: u16 = 1;

/// Horizontal padding between the container border and its content.
pub const CONTENT_PADDING: u16 = 1;

/// Additional horizontal padding applied to the message label.
pub const MESSAGE_PADDING: u16 = 1;

/// Maximum number of rows the message label may occupy; overflow is clipped.
pub const MESSAGE_MAX_LINES: u16 = 5;

/// Height of a separator line.
pub const SEPARATOR_THICKNESS: u16 = 1;

/// Height of the action button row.
pub const BUTTON_ROW_HEIGHT: u16 = 1;

/// Horizontal gap between adjacent action buttons.
pub const BUTTON_SPACING: u16 = 2;

// =============================================================================
// Environment & Files
// =============================================================================

/// File name of the style overrides file inside the config directory.
pub const STYLE_FILE_NAME: &str = "style.json";

/// Environment variable selecting a color theme preset.
pub const ENV_THEME: &str = "SPARK_ALERT_THEME";

/// Environment variable overriding the button background color.
pub const ENV_BUTTON_COLOR: &str = "SPARK_ALERT_BUTTON_COLOR";

/// Environment variable overriding the button title color.
pub const ENV_BUTTON_TITLE_COLOR: &str = "SPARK_ALERT_BUTTON_TITLE_COLOR";
