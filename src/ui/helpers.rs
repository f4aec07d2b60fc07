//! UI utility functions
//!
//! Layout and styling helpers shared by the form, summary and dialogs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Creates a centered rectangle within a given area
///
/// # Arguments
/// - `percent_x` - Width as a percentage (0-100)
/// - `percent_y` - Height as a percentage (0-100)
/// - `r` - The parent rectangle to center within
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Label style for a form field, highlighted when focused
pub(crate) fn field_label_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Renders selector options on one line with the chosen one bracketed
pub(crate) fn selector_line<'a>(options: &[&'a str], selected: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(options.len());
    for (i, option) in options.iter().enumerate() {
        if i == selected {
            spans.push(Span::styled(
                format!("[{}]", option),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", option),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    Line::from(spans)
}
