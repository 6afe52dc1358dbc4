//! Alert rendering implementation.
//!
//! This module provides `render_alert`, which draws a materialized alert
//! into the rectangles computed by `AlertLayout`.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::layout::AlertLayout;
use crate::ui::theme::focus_modifier;
use crate::ui::views::{AlertViews, ButtonId, Label, Separator};

/// Render an alert as a modal card.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `views` - The materialized visual tree
/// * `layout` - Geometry computed for the frame's area
/// * `focused` - The button to emphasize for keyboard users
pub fn render_alert(
    f: &mut Frame,
    views: &AlertViews,
    layout: &AlertLayout,
    focused: Option<ButtonId>,
) {
    if let (Some(shadow), Some(rect)) = (views.container.shadow, layout.shadow) {
        f.render_widget(Clear, rect);
        f.render_widget(
            Block::default().style(Style::default().bg(shadow.color)),
            rect,
        );
    }

    f.render_widget(Clear, layout.container);
    f.render_widget(
        Block::bordered()
            .border_type(views.container.border_type)
            .border_style(Style::default().fg(views.container.border_color))
            .style(Style::default().bg(views.container.background)),
        layout.container,
    );

    let title_lines = layout
        .title_lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    render_label(f, &views.title, title_lines, layout.title);
    render_separator(f, &views.top_separator, layout.top_separator);

    let message_lines = layout
        .message_lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    render_label(f, &views.message, message_lines, layout.message);
    render_separator(f, &views.bottom_separator, layout.bottom_separator);

    for (button, rect) in views.button_row.buttons().iter().zip(&layout.buttons) {
        let mut title = Line::from(button.title.as_str());
        if focused == Some(button.id()) {
            title = title.style(Style::default().add_modifier(focus_modifier()));
        }
        f.render_widget(
            Paragraph::new(title)
                .style(button.style())
                .alignment(Alignment::Center),
            *rect,
        );
    }
}

fn render_label(f: &mut Frame, label: &Label, lines: Vec<Line<'_>>, area: Rect) {
    f.render_widget(
        Paragraph::new(lines)
            .style(label.style())
            .alignment(label.alignment),
        area,
    );
}

fn render_separator(f: &mut Frame, separator: &Separator, area: Rect) {
    f.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(separator.color)),
        area,
    );
}
