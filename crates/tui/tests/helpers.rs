//! Test helpers for alert testing.
//!
//! Provides utility functions for rendering an alert into a test backend,
//! reading text and styles back out of the buffer, and simulating input.

#![allow(dead_code)]

use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use spark_alert::{AlertController, AlertDelegate};

/// Delegate that records every notification, including the source controller.
#[derive(Default)]
pub struct RecordingDelegate {
    calls: RefCell<Vec<(usize, *const AlertController)>>,
}

impl AlertDelegate for RecordingDelegate {
    fn alert_action(&self, index: usize, controller: &AlertController) {
        self.calls
            .borrow_mut()
            .push((index, controller as *const AlertController));
    }
}

impl RecordingDelegate {
    /// Indices received so far, in order.
    pub fn indices(&self) -> Vec<usize> {
        self.calls.borrow().iter().map(|(index, _)| *index).collect()
    }

    /// Whether every call came from `controller`.
    pub fn all_from(&self, controller: &AlertController) -> bool {
        self.calls
            .borrow()
            .iter()
            .all(|(_, source)| std::ptr::eq(*source, controller))
    }
}

/// Render `controller` into a fresh `width` x `height` buffer.
pub fn render(controller: &mut AlertController, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|f| controller.render(f))
        .expect("draw alert");
    terminal.backend().buffer().clone()
}

/// Symbols inside `rect`, row by row, with each row's edges trimmed.
pub fn text_in(buffer: &Buffer, rect: Rect) -> String {
    (rect.top()..rect.bottom())
        .map(|y| {
            (rect.left()..rect.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Position of the first cell of `needle` inside `rect`, if drawn there.
pub fn find_text(buffer: &Buffer, rect: Rect, needle: &str) -> Option<(u16, u16)> {
    (rect.top()..rect.bottom()).find_map(|y| {
        let row: String = (rect.left()..rect.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        row.find(needle)
            .map(|offset| (rect.left() + row[..offset].chars().count() as u16, y))
    })
}

/// Create a key press event.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Create a left click at (`column`, `row`).
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
