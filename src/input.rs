//! Keyboard handling
//!
//! Translates key events into form edits. Handlers return `true` when the
//! application should quit.

use crate::app::{App, AppMode, FormField};
use crate::traits::ClipboardSink;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Routes a key event to the handler for the current mode
pub fn handle_key_event(app: &mut App, key: KeyEvent, clipboard: &mut dyn ClipboardSink) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('y') => {
                app.copy_summary(clipboard);
                return false;
            }
            KeyCode::Char('r') => {
                app.reset();
                return false;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::F(1) => {
            app.mode = match app.mode {
                AppMode::Help => AppMode::Form,
                AppMode::Form => AppMode::Help,
            };
            return false;
        }
        KeyCode::F(2) => {
            app.show_errors = !app.show_errors;
            return false;
        }
        _ => {}
    }

    match app.mode {
        AppMode::Help => handle_help_input(app, key.code),
        AppMode::Form => handle_form_input(app, key.code, key.modifiers),
    }
}

/// Handles key events for Help mode
fn handle_help_input(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(key_code, KeyCode::Esc | KeyCode::Enter) {
        app.mode = AppMode::Form;
    }
    false
}

/// Handles key events for Form mode
fn handle_form_input(app: &mut App, key_code: KeyCode, modifiers: KeyModifiers) -> bool {
    match key_code {
        KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Down => app.active_field = app.active_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.active_field = app.active_field.prev(),
        KeyCode::Enter => app.recalculate(),
        KeyCode::Left => step_selector(app, false),
        KeyCode::Right => step_selector(app, true),
        KeyCode::Char(' ') if !app.active_field.is_text() => step_selector(app, true),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => app.push_char(c),
        _ => {}
    }
    false
}

/// Moves the focused selector forwards or backwards
fn step_selector(app: &mut App, forward: bool) {
    match app.active_field {
        FormField::FuelType => {
            let fuel = if forward {
                app.fuel_type.next()
            } else {
                app.fuel_type.prev()
            };
            app.select_fuel(fuel);
        }
        FormField::IncludeOwner => app.toggle_include_owner(),
        FormField::RoundTo => {
            let unit = if forward {
                app.rounding_unit.next()
            } else {
                app.rounding_unit.prev()
            };
            app.set_rounding_unit(unit);
        }
        _ => {}
    }
}
