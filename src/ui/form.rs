//! Trip form rendering
//!
//! One line per field, in focus order, with the focused line highlighted.
//! Text fields show the raw text exactly as typed; the sanitized value only
//! shows up in the breakdown and summary.

use crate::app::{App, FormField};
use crate::splitter::{FuelType, RoundingUnit};
use crate::ui::helpers::{field_label_style, selector_line};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the label column, longest title plus a gap
const LABEL_WIDTH: usize = 13;

/// Rows the form needs: one per field plus its border
pub(crate) const FORM_HEIGHT: u16 = FormField::ALL.len() as u16 + 2;

/// Renders the trip details form
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
/// - `area` - The screen area to render in
pub(crate) fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| {
            let active = app.active_field == *field;
            let mut spans = vec![Span::styled(
                format!("{:<width$}", field.title(), width = LABEL_WIDTH),
                field_label_style(active),
            )];
            spans.extend(field_line(app, *field, active).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Trip details"));
    f.render_widget(paragraph, area);
}

fn field_line(app: &App, field: FormField, active: bool) -> Line<'static> {
    match field {
        FormField::Distance => text_line(&app.distance, active),
        FormField::Mileage => text_line(&app.mileage, active),
        FormField::FuelPrice => text_line(&app.fuel_price, active),
        FormField::People => text_line(&app.people, active),
        FormField::FuelType => {
            let selected = FuelType::ALL
                .iter()
                .position(|fuel| *fuel == app.fuel_type)
                .unwrap_or(0);
            let labels: Vec<&'static str> = FuelType::ALL.iter().map(|fuel| fuel.label()).collect();
            selector_line(&labels, selected)
        }
        FormField::IncludeOwner => {
            let mark = if app.include_owner { "[x]" } else { "[ ]" };
            Line::from(format!("{} Include owner", mark))
        }
        FormField::RoundTo => {
            let selected = RoundingUnit::ALL
                .iter()
                .position(|unit| *unit == app.rounding_unit)
                .unwrap_or(0);
            selector_line(&["Rs 1", "Rs 5", "Rs 10"], selected)
        }
    }
}

fn text_line(value: &str, active: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(value.to_string())];
    if active {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}
