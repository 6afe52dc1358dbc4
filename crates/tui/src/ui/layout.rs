//! Geometry of a materialized alert.
//!
//! Responsibilities:
//! - Compute the screen rectangle of every alert element for a given area.
//! - Wrap the title and message into lines that fit their labels.
//! - Resolve a screen position to the button under it.
//!
//! Does NOT handle:
//! - Drawing (see `ui::render`).
//!
//! Invariants:
//! - Rendering and mouse hit-testing both use `AlertLayout::compute`, so a
//!   click always lands on the button that was drawn there.
//! - Every rect lies inside `area`.
//! - The button row is pinned to the bottom of the container content.
//! - Title and message never exceed their label's `max_lines`; overflow is dropped.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::text::Span;
use spark_alert_config::constants::{CONTENT_PADDING, MESSAGE_PADDING};

use crate::ui::views::{AlertViews, Label};

/// Rows taken by the container's top and bottom border.
const BORDER_ROWS: u16 = 2;

/// Screen rectangles for every alert element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertLayout {
    pub shadow: Option<Rect>,
    pub container: Rect,
    pub title: Rect,
    /// Title text already wrapped and clipped to `title`.
    pub title_lines: Vec<String>,
    pub top_separator: Rect,
    pub message: Rect,
    /// Message text already wrapped and clipped to `message`.
    pub message_lines: Vec<String>,
    pub bottom_separator: Rect,
    pub button_row: Rect,
    /// One rect per button, in button order.
    pub buttons: Vec<Rect>,
}

impl AlertLayout {
    /// Lay out `views` centered in `area`.
    pub fn compute(area: Rect, views: &AlertViews) -> Self {
        let inset = views.container.inset;
        let width = area.width.saturating_sub(inset.saturating_mul(2));
        let x = area.x + (area.width - width) / 2;

        let content_width = width.saturating_sub(2 + 2 * CONTENT_PADDING);
        let message_width = content_width.saturating_sub(2 * MESSAGE_PADDING);

        let title_lines = wrap_label(&views.title, content_width);
        let title_rows = (title_lines.len() as u16).max(1);

        let fixed_rows = title_rows
            + views.top_separator.thickness
            + views.bottom_separator.thickness
            + views.button_row.height;

        let mut message_lines = wrap_label(&views.message, message_width);
        let wanted_message_rows = (message_lines.len() as u16).max(1);

        let height = (BORDER_ROWS + fixed_rows + wanted_message_rows).min(area.height);
        let y = area.y + (area.height - height) / 2;
        let container = Rect::new(x, y, width, height);

        let content = container.inner(Margin::new(1 + CONTENT_PADDING, 1));
        let message_rows = wanted_message_rows.min(content.height.saturating_sub(fixed_rows));
        message_lines.truncate(message_rows as usize);

        let mut cursor = content.y;
        let mut take_rows = |rows: u16| {
            let rect = Rect::new(content.x, cursor, content.width, rows).intersection(content);
            cursor = cursor.saturating_add(rows);
            rect
        };

        let title = take_rows(title_rows);
        let top_separator = take_rows(views.top_separator.thickness);
        let message = take_rows(message_rows).inner(Margin::new(MESSAGE_PADDING, 0));
        let bottom_separator = take_rows(views.bottom_separator.thickness);

        let row_height = views.button_row.height.min(content.height);
        let button_row = Rect::new(
            content.x,
            content.bottom().saturating_sub(row_height),
            content.width,
            row_height,
        );
        let buttons = split_buttons(button_row, views);

        let shadow = views.container.shadow.map(|shadow| {
            Rect::new(
                container.x.saturating_add(shadow.offset),
                container.y.saturating_add(shadow.offset),
                container.width,
                container.height,
            )
            .intersection(area)
        });

        Self {
            shadow,
            container,
            title,
            title_lines,
            top_separator,
            message,
            message_lines,
            bottom_separator,
            button_row,
            buttons,
        }
    }

    /// Index of the button drawn at (`column`, `row`), if any.
    pub fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.buttons.iter().position(|rect| rect.contains(position))
    }
}

fn split_buttons(row: Rect, views: &AlertViews) -> Vec<Rect> {
    let count = views.button_row.len();
    if count == 0 {
        return Vec::new();
    }

    Layout::horizontal(vec![Constraint::Fill(1); count])
        .spacing(views.button_row.spacing)
        .split(row)
        .to_vec()
}

/// Wrap a label's text and clip it to the label's `max_lines`.
fn wrap_label(label: &Label, width: u16) -> Vec<String> {
    let mut lines = wrap_text(&label.text, width);
    if let Some(max_lines) = label.max_lines {
        lines.truncate(max_lines as usize);
    }
    lines
}

/// Greedy word wrap to `width` terminal cells.
///
/// Explicit newlines start a new line. Words wider than `width` are split
/// across lines between characters. Double-width glyphs count as two cells.
/// A zero width yields no lines.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = cell_width(word);
            if line_width > 0 && line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = cell_width(ch.encode_utf8(&mut [0; 4]));
                if line_width > 0 && line_width + ch_width > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }

        if !line.is_empty() || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Cells `text` occupies when drawn.
pub(crate) fn cell_width(text: &str) -> usize {
    Span::raw(text).width()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use spark_alert_config::AlertConfiguration;
    use spark_alert_config::constants::{CONTAINER_INSET, MESSAGE_MAX_LINES};

    fn views(message: &str, buttons: &[&str]) -> AlertViews {
        AlertViews::build(&AlertConfiguration::new(
            "Title",
            message,
            buttons.iter().copied(),
        ))
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("This cannot be undone", 10),
            ["This", "cannot be", "undone"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_keeps_explicit_newlines() {
        assert_eq!(wrap_text("one\n\ntwo", 20), ["one", "", "two"]);
    }

    #[test]
    fn test_wrap_text_counts_wide_glyphs_as_two_cells() {
        assert_eq!(wrap_text("删除后无法恢复", 6), ["删除后", "无法恢", "复"]);
        assert_eq!(wrap_text("确认 删除", 5), ["确认", "删除"]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_container_is_inset_and_centered() {
        let area = Rect::new(0, 0, 60, 20);
        let layout = AlertLayout::compute(area, &views("Short message", &["Cancel", "Delete"]));

        assert_eq!(layout.container.x, CONTAINER_INSET);
        assert_eq!(layout.container.width, 60 - 2 * CONTAINER_INSET);
        // borders + title + separator + one message line + separator + buttons
        assert_eq!(layout.container.height, 7);
        assert_eq!(layout.container.y, (20 - 7) / 2);
    }

    #[test]
    fn test_elements_are_stacked_in_order() {
        let layout = AlertLayout::compute(Rect::new(0, 0, 60, 20), &views("Message", &["Ok"]));

        assert_eq!(layout.title.y, layout.container.y + 1);
        assert_eq!(layout.top_separator.y, layout.title.bottom());
        assert_eq!(layout.message.y, layout.top_separator.bottom());
        assert_eq!(layout.bottom_separator.y, layout.message.bottom());
        assert_eq!(layout.button_row.y, layout.bottom_separator.bottom());
        assert_eq!(layout.button_row.bottom(), layout.container.bottom() - 1);
    }

    #[test]
    fn test_title_rows_follow_title_label() {
        let mut views = views("Message", &["Ok"]);
        views.title.text = "A title long enough to need more than one row".into();

        let layout = AlertLayout::compute(Rect::new(0, 0, 30, 20), &views);
        assert_eq!(layout.title_lines.len(), 1);
        assert_eq!(layout.title.height, 1);

        views.title.max_lines = Some(3);
        let layout = AlertLayout::compute(Rect::new(0, 0, 30, 20), &views);
        assert_eq!(layout.title.height, layout.title_lines.len() as u16);
        assert!(layout.title.height > 1);
        assert_eq!(layout.top_separator.y, layout.title.bottom());
    }

    #[test]
    fn test_message_is_clipped_at_max_lines() {
        let long = "word ".repeat(200);
        let layout = AlertLayout::compute(Rect::new(0, 0, 40, 40), &views(&long, &["Ok"]));

        assert_eq!(layout.message_lines.len(), MESSAGE_MAX_LINES as usize);
        assert_eq!(layout.message.height, MESSAGE_MAX_LINES);
    }

    #[test]
    fn test_buttons_share_row_equally() {
        let layout = AlertLayout::compute(
            Rect::new(0, 0, 80, 20),
            &views("Message", &["A", "B", "C"]),
        );

        assert_eq!(layout.buttons.len(), 3);
        let widths: Vec<u16> = layout.buttons.iter().map(|r| r.width).collect();
        let min = widths.iter().min().copied().unwrap();
        let max = widths.iter().max().copied().unwrap();
        assert!(max - min <= 1, "uneven widths: {widths:?}");
        for pair in layout.buttons.windows(2) {
            assert!(pair[0].right() <= pair[1].x);
        }
    }

    #[test]
    fn test_button_at_hits_each_button() {
        let layout = AlertLayout::compute(
            Rect::new(0, 0, 80, 20),
            &views("Message", &["Cancel", "Delete"]),
        );

        for (i, rect) in layout.buttons.iter().enumerate() {
            assert_eq!(layout.button_at(rect.x, rect.y), Some(i));
            assert_eq!(layout.button_at(rect.right() - 1, rect.y), Some(i));
        }
        assert_eq!(layout.button_at(0, 0), None);
    }

    #[test]
    fn test_no_buttons_gives_empty_row() {
        let layout = AlertLayout::compute(Rect::new(0, 0, 40, 12), &views("Message", &[]));
        assert!(layout.buttons.is_empty());
        assert_eq!(layout.button_at(layout.button_row.x, layout.button_row.y), None);
    }

    #[test]
    fn test_tiny_area_does_not_overflow() {
        let area = Rect::new(0, 0, 3, 2);
        let layout = AlertLayout::compute(area, &views("Message", &["Ok"]));
        assert!(area.contains(Position::new(layout.container.x, layout.container.y)));
        assert!(layout.container.height <= area.height);
    }

    proptest! {
        #[test]
        fn prop_wrapped_lines_fit_width(text in "[a-z 删除确认é]{0,200}", width in 2u16..40) {
            for line in wrap_text(&text, width) {
                prop_assert!(cell_width(&line) <= width as usize, "{line:?} wider than {width}");
            }
        }

        #[test]
        fn prop_wrapping_keeps_every_glyph(text in "[a-z 删除确认]{0,120}", width in 2u16..40) {
            let wrapped: String = wrap_text(&text, width).concat();
            let expected: String = text.split_whitespace().collect();
            let actual: String = wrapped.split_whitespace().collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_one_rect_per_button(count in 1usize..6, width in 30u16..160, height in 8u16..50) {
            let labels: Vec<String> = (0..count).map(|i| format!("B{i}")).collect();
            let config = AlertConfiguration::new("Title", "Message", labels);
            let views = AlertViews::build(&config);
            let area = Rect::new(0, 0, width, height);
            let layout = AlertLayout::compute(area, &views);

            prop_assert_eq!(layout.buttons.len(), count);
            for rect in &layout.buttons {
                prop_assert_eq!(rect.intersection(layout.button_row), *rect);
            }
        }
    }
}
