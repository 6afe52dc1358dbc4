//! The alert's visual tree.
//!
//! Responsibilities:
//! - Define the elements an alert is made of: container card, labels,
//!   separators, action buttons and the row that holds them.
//! - Populate those elements from an `AlertConfiguration`, in a fixed order.
//!
//! Does NOT handle:
//! - Geometry (see `ui::layout`).
//! - Drawing (see `ui::render`).
//!
//! Invariants:
//! - `ButtonRow::buttons()[i].id().index() == i` for every button.
//! - Element styles are copied verbatim from the configuration.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::widgets::BorderType;
use spark_alert_config::constants::{
    BUTTON_ROW_HEIGHT, BUTTON_SPACING, CONTAINER_INSET, MESSAGE_MAX_LINES, SEPARATOR_THICKNESS,
    SHADOW_OFFSET,
};
use spark_alert_config::{AlertConfiguration, Font};

use crate::ui::theme::FontExt;

/// Identity of an action button: its zero-based position in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(usize);

impl ButtonId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Drop shadow drawn behind the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadow {
    pub offset: u16,
    pub color: Color,
}

/// The card that holds every other element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerView {
    /// Distance from the left and right screen edges.
    pub inset: u16,
    pub background: Color,
    pub border_color: Color,
    pub border_type: BorderType,
    pub shadow: Option<Shadow>,
}

/// A run of styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub font: Font,
    pub color: Color,
    pub alignment: Alignment,
    /// `None` means the label may grow to fit its text.
    pub max_lines: Option<u16>,
}

impl Label {
    pub fn style(&self) -> Style {
        self.font.style().fg(self.color)
    }
}

/// A horizontal rule between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator {
    pub thickness: u16,
    pub color: Color,
}

impl Separator {
    fn new(color: Color) -> Self {
        Self {
            thickness: SEPARATOR_THICKNESS,
            color,
        }
    }
}

/// A tappable button with its identity fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    id: ButtonId,
    pub title: String,
    pub font: Font,
    pub background: Color,
    pub title_color: Color,
}

impl ActionButton {
    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn style(&self) -> Style {
        self.font.style().fg(self.title_color).bg(self.background)
    }
}

/// Equally sized, equally spaced buttons laid out left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonRow {
    pub spacing: u16,
    pub height: u16,
    buttons: Vec<ActionButton>,
}

impl ButtonRow {
    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    pub fn get(&self, id: ButtonId) -> Option<&ActionButton> {
        self.buttons.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

/// Every element of a materialized alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertViews {
    pub container: ContainerView,
    pub title: Label,
    pub top_separator: Separator,
    pub message: Label,
    pub bottom_separator: Separator,
    pub button_row: ButtonRow,
}

impl AlertViews {
    /// Build the visual tree for `config`.
    pub fn build(config: &AlertConfiguration) -> Self {
        // 1. Container
        let container = ContainerView {
            inset: CONTAINER_INSET,
            background: config.container_color,
            border_color: config.separator_color,
            border_type: BorderType::Rounded,
            shadow: Some(Shadow {
                offset: SHADOW_OFFSET,
                color: config.shadow_color,
            }),
        };

        // 2. Title
        let title = Label {
            text: config.title().to_string(),
            font: config.title_font,
            color: config.title_color,
            alignment: Alignment::Center,
            max_lines: Some(1),
        };

        // 3. Separator
        let top_separator = Separator::new(config.separator_color);

        // 4. Message
        let message = Label {
            text: config.message().to_string(),
            font: config.message_font,
            color: config.message_color,
            alignment: Alignment::Center,
            max_lines: Some(MESSAGE_MAX_LINES),
        };

        // 5. Separator
        let bottom_separator = Separator::new(config.separator_color);

        // 6-7. Button row and its buttons
        let buttons = config
            .buttons()
            .iter()
            .enumerate()
            .map(|(index, title)| ActionButton {
                id: ButtonId::new(index),
                title: title.clone(),
                font: config.button_font,
                background: config.button_color,
                title_color: config.button_title_color,
            })
            .collect();
        let button_row = ButtonRow {
            spacing: BUTTON_SPACING,
            height: BUTTON_ROW_HEIGHT,
            buttons,
        };

        Self {
            container,
            title,
            top_separator,
            message,
            bottom_separator,
            button_row,
        }
    }
}
