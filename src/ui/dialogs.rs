//! Modal overlays

use crate::ui::helpers::centered_rect;
use crate::utils::formatting::{format_currency, CURRENCY_PREFIX};
use crate::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEY_HELP: [(&str, &str); 10] = [
    ("Tab / ↓", "Next field"),
    ("Shift+Tab / ↑", "Previous field"),
    ("← → / Space", "Change fuel, owner or rounding"),
    ("Enter", "Calculate split"),
    ("Ctrl+Y", "Copy summary to clipboard"),
    ("Ctrl+R", "Reset to defaults"),
    ("F1", "Toggle this help"),
    ("F2", "Toggle error log"),
    ("Esc", "Quit"),
    ("Ctrl+C", "Quit"),
];

/// Renders the key reference overlay
pub(crate) fn render_help_dialog(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let mut text = vec![
        Line::from(Span::styled(
            "Split fuel fairly",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (keys, action) in KEY_HELP {
        text.push(Line::from(vec![
            Span::styled(format!("{:<16}", keys), Style::default().fg(Color::Yellow)),
            Span::raw(action),
        ]));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        format!(
            "Presets: Petrol {cur} {}/l, Diesel {cur} {}/l",
            format_currency(app.presets().petrol),
            format_currency(app.presets().diesel),
            cur = CURRENCY_PREFIX
        ),
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Help"));

    f.render_widget(paragraph, area);
}
