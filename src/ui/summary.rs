//! Cost breakdown and shareable summary rendering

use crate::app::App;
use crate::utils::formatting::{format_currency, CURRENCY_PREFIX};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Shown in place of the summary while it is stale
const PENDING_NOTICE: &str =
    "Update complete. Press Enter to calculate split and refresh the summary.";

/// Renders the live cost breakdown
///
/// Recomputed on every draw, so it follows each keystroke even while the
/// shareable summary is stale.
pub(crate) fn render_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let result = app.result();
    let label = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Total cost:       ", label),
            Span::raw(format!("{} {}", CURRENCY_PREFIX, format_currency(result.total_cost))),
        ]),
        Line::from(vec![
            Span::styled("Paying people:    ", label),
            Span::raw(result.paying_people_count.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Each person pays: ", label),
            Span::styled(
                format!("{} {}", CURRENCY_PREFIX, format_currency(result.per_person_share)),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Breakdown"),
    );
    f.render_widget(paragraph, area);
}

/// Renders the shareable summary, or the pending notice when stale
pub(crate) fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_copied() {
        "Summary (copied)"
    } else {
        "Summary"
    };
    let border = if app.is_copied() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border);

    let paragraph = if app.has_calculated {
        Paragraph::new(app.share_text()).block(block)
    } else {
        Paragraph::new(Line::from(Span::styled(
            PENDING_NOTICE,
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
    };

    f.render_widget(paragraph, area);
}
