//! Mouse event handling for the alert.
//!
//! Responsibilities:
//! - Turn a left click on a button into an activation.
//!
//! Does NOT handle:
//! - Clicks outside the buttons; the alert is modal and ignores them.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::AlertController;
use crate::ui::ButtonId;

impl AlertController {
    /// Handle mouse input - returns the activated button, if any.
    ///
    /// Hit-testing uses the area of the most recent `render` call.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ButtonId> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let index = self.layout()?.button_at(mouse.column, mouse.row)?;
                let id = ButtonId::new(index);
                self.focused = Some(id);
                self.activate_from_input(id)
            }
            _ => None,
        }
    }
}
