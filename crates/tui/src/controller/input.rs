//! Keyboard handling for the alert.
//!
//! Responsibilities:
//! - Move button focus with Left/Right/Tab/BackTab.
//! - Activate the focused button with Enter or Space.
//! - Activate a button directly with digits 1-9.
//!
//! Does NOT handle:
//! - Dismissing the alert (the caller decides what Esc means).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::AlertController;
use crate::ui::ButtonId;

impl AlertController {
    /// Handle a key press - returns the activated button, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ButtonId> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.move_focus(-1);
                None
            }
            KeyCode::Right | KeyCode::Tab => {
                self.move_focus(1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = self.focused?;
                self.activate_from_input(id)
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10)? as usize - 1;
                if index >= self.button_count() {
                    return None;
                }
                let id = ButtonId::new(index);
                self.focused = Some(id);
                self.activate_from_input(id)
            }
            _ => None,
        }
    }

    /// Move focus by `step`, wrapping around the row.
    fn move_focus(&mut self, step: isize) {
        let count = self.button_count();
        if count == 0 {
            return;
        }
        let current = self.focused.map_or(0, ButtonId::index) as isize;
        let next = (current + step).rem_euclid(count as isize) as usize;
        self.focused = Some(ButtonId::new(next));
    }

    pub(super) fn activate_from_input(&self, id: ButtonId) -> Option<ButtonId> {
        match self.activate(id) {
            Ok(_) => Some(id),
            Err(e) => {
                tracing::warn!("Ignoring activation of button {}: {}", id.index(), e);
                None
            }
        }
    }
}
