//! User interface rendering module
//!
//! This module contains all TUI rendering logic using the ratatui library.
//! Rendering reads `App` and never mutates it; the breakdown and summary
//! are recomputed from the form fields on every frame.
//!
//! # Architecture
//!
//! - `form` - Trip details fields and selectors
//! - `summary` - Live breakdown and shareable summary
//! - `dialogs` - Help overlay
//! - `status` - Status bar and error panel
//! - `helpers` - Layout and styling utilities

mod dialogs;
mod form;
mod helpers;
mod status;
mod summary;

use crate::app::{App, AppMode};
use crate::utils::formatting::CURRENCY_PREFIX;
use dialogs::render_help_dialog;
use form::{render_form, FORM_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use status::{render_error_panel, render_status_bar};
use summary::{render_breakdown, render_summary};

/// Main UI rendering function
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let header_text = format!(
        "Trip Fuel Split Calculator | Fuel: {} | Round to {} {}",
        app.fuel_type.label(),
        CURRENCY_PREFIX,
        app.rounding_unit
    );
    let title = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let main_area = if app.show_errors && !app.error_log.is_empty() {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);

        render_error_panel(f, app, main_chunks[1]);
        main_chunks[0]
    } else {
        chunks[1]
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT), // Form
            Constraint::Length(5),           // Breakdown
            Constraint::Min(0),
        ])
        .split(columns[0]);

    render_form(f, app, left[0]);
    render_breakdown(f, app, left[1]);
    render_summary(f, app, columns[1]);

    if app.mode == AppMode::Help {
        render_help_dialog(f, app);
    }

    render_status_bar(f, app, chunks[2]);
}
