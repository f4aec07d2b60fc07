//! Status bar and error display rendering
//!
//! Handles the rendering of the status bar (keyboard shortcuts and the copy
//! indicator) and the error log panel.

use crate::app::{App, AppMode};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the status bar with context-appropriate keyboard shortcuts
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
/// - `area` - The screen area to render in
pub(crate) fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.mode {
        AppMode::Form => {
            if app.has_calculated {
                "[Tab/↑↓] Field  [←→/Space] Change  [Ctrl+Y] Copy  [Ctrl+R] Reset  [F1] Help  [Esc] Quit"
            } else {
                "[Enter] Calculate split  [Tab/↑↓] Field  [Ctrl+R] Reset  [F1] Help  [Esc] Quit"
            }
        }
        AppMode::Help => "[Esc/F1] Close help",
    };

    let mut spans = Vec::new();
    if app.is_copied() {
        spans.push(Span::styled(
            "✓ Copied summary  ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::raw(shortcuts));

    let status_bar = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );

    f.render_widget(status_bar, area);
}

/// Renders the error log panel
///
/// Displays the most recent errors (up to 20), newest first.
pub(crate) fn render_error_panel(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Errors ({}) - Press F2 to hide", app.error_log.len());

    let errors: Vec<ListItem> = app
        .error_log
        .iter()
        .rev()
        .take(20)
        .map(|(timestamp, error)| {
            let time_str = timestamp.format("%H:%M:%S").to_string();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", time_str),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(error.as_str(), Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let list = List::new(errors).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Red)),
    );

    f.render_widget(list, area);
}
