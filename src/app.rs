//! Form state
//!
//! `App` holds everything the interactive calculator shows: the raw text of
//! each field, the selectors, whether the summary is current, and the
//! transient "copied" indicator. The cost breakdown is never stored; it is
//! recomputed from the fields whenever it is asked for.

use crate::config::{Config, FormDefaults, FuelPresets};
use crate::splitter::{calculate, sanitize, FuelType, RawTripInput, RoundingUnit, TripInput, TripResult};
use crate::traits::ClipboardSink;
use crate::utils::formatting::{compose_summary, format_plain_number};
use chrono::Utc;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long the "copied" indicator stays visible
pub const COPIED_INDICATOR: Duration = Duration::from_millis(1400);

/// Maximum number of entries kept in the error log
const ERROR_LOG_CAPACITY: usize = 100;

/// Current mode of the application UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Editing the trip form
    Form,
    /// Key reference overlay
    Help,
}

/// Fields of the trip form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Distance,
    Mileage,
    FuelType,
    FuelPrice,
    People,
    IncludeOwner,
    RoundTo,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Distance,
        FormField::Mileage,
        FormField::FuelType,
        FormField::FuelPrice,
        FormField::People,
        FormField::IncludeOwner,
        FormField::RoundTo,
    ];

    pub fn next(self) -> Self {
        match self {
            FormField::Distance => FormField::Mileage,
            FormField::Mileage => FormField::FuelType,
            FormField::FuelType => FormField::FuelPrice,
            FormField::FuelPrice => FormField::People,
            FormField::People => FormField::IncludeOwner,
            FormField::IncludeOwner => FormField::RoundTo,
            FormField::RoundTo => FormField::Distance,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Distance => FormField::RoundTo,
            FormField::Mileage => FormField::Distance,
            FormField::FuelType => FormField::Mileage,
            FormField::FuelPrice => FormField::FuelType,
            FormField::People => FormField::FuelPrice,
            FormField::IncludeOwner => FormField::People,
            FormField::RoundTo => FormField::IncludeOwner,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormField::Distance => "Distance km",
            FormField::Mileage => "Mileage km/l",
            FormField::FuelType => "Fuel",
            FormField::FuelPrice => "Price Rs/l",
            FormField::People => "People",
            FormField::IncludeOwner => "Owner",
            FormField::RoundTo => "Round to",
        }
    }

    /// Whether the field is free text rather than a selector
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Distance | FormField::Mileage | FormField::FuelPrice | FormField::People
        )
    }
}

pub struct App {
    pub mode: AppMode,
    pub active_field: FormField,
    pub distance: String,
    pub mileage: String,
    pub fuel_type: FuelType,
    pub fuel_price: String,
    pub people: String,
    pub include_owner: bool,
    pub rounding_unit: RoundingUnit,
    /// False after any edit until the user recalculates
    pub has_calculated: bool,
    copied_until: Option<Instant>,
    pub error_log: VecDeque<(chrono::DateTime<Utc>, String)>,
    pub show_errors: bool,
    defaults: FormDefaults,
    presets: FuelPresets,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut app = App {
            mode: AppMode::Form,
            active_field: FormField::Distance,
            distance: String::new(),
            mileage: String::new(),
            fuel_type: FuelType::default(),
            fuel_price: String::new(),
            people: String::new(),
            include_owner: true,
            rounding_unit: RoundingUnit::default(),
            has_calculated: true,
            copied_until: None,
            error_log: VecDeque::with_capacity(ERROR_LOG_CAPACITY),
            show_errors: false,
            defaults: config.defaults.clone(),
            presets: config.presets.clone(),
        };
        app.reset();
        app
    }

    pub fn presets(&self) -> &FuelPresets {
        &self.presets
    }

    /// Restores every field to the configured defaults
    pub fn reset(&mut self) {
        self.distance = format_plain_number(self.defaults.distance_km);
        self.mileage = format_plain_number(self.defaults.mileage_km_per_litre);
        self.people = self.defaults.people_count.to_string();
        self.fuel_type = self.defaults.fuel_type;
        self.fuel_price = format_plain_number(self.defaults.initial_fuel_price(&self.presets));
        self.include_owner = self.defaults.include_owner;
        self.rounding_unit = self.defaults.rounding_unit;
        self.has_calculated = true;
        self.copied_until = None;
        tracing::debug!("form reset to defaults");
    }

    /// Marks the summary stale after an edit
    pub fn mark_dirty(&mut self) {
        self.has_calculated = false;
        self.copied_until = None;
    }

    /// Accepts the current inputs as the shareable summary
    pub fn recalculate(&mut self) {
        self.has_calculated = true;
        self.copied_until = None;
    }

    /// Switches the fuel selector
    ///
    /// Presets overwrite the price field; `Custom` leaves it untouched.
    pub fn select_fuel(&mut self, fuel_type: FuelType) {
        self.fuel_type = fuel_type;
        if let Some(price) = self.presets.price_for(fuel_type) {
            self.fuel_price = format_plain_number(price);
        }
        self.mark_dirty();
    }

    /// Replaces the fuel price, switching the selector to `Custom`
    pub fn set_custom_price(&mut self, price: String) {
        self.fuel_type = FuelType::Custom;
        self.fuel_price = price;
        self.mark_dirty();
    }

    pub fn toggle_include_owner(&mut self) {
        self.include_owner = !self.include_owner;
        self.mark_dirty();
    }

    pub fn set_rounding_unit(&mut self, unit: RoundingUnit) {
        self.rounding_unit = unit;
        self.mark_dirty();
    }

    /// Appends a typed character to the focused text field
    pub fn push_char(&mut self, c: char) {
        match self.active_field {
            FormField::Distance => self.distance.push(c),
            FormField::Mileage => self.mileage.push(c),
            FormField::People => self.people.push(c),
            FormField::FuelPrice => {
                let mut price = std::mem::take(&mut self.fuel_price);
                price.push(c);
                self.set_custom_price(price);
                return;
            }
            _ => return,
        }
        self.mark_dirty();
    }

    /// Deletes the last character of the focused text field
    pub fn pop_char(&mut self) {
        match self.active_field {
            FormField::Distance => {
                self.distance.pop();
            }
            FormField::Mileage => {
                self.mileage.pop();
            }
            FormField::People => {
                self.people.pop();
            }
            FormField::FuelPrice => {
                let mut price = std::mem::take(&mut self.fuel_price);
                price.pop();
                self.set_custom_price(price);
                return;
            }
            _ => return,
        }
        self.mark_dirty();
    }

    pub fn raw_input(&self) -> RawTripInput {
        RawTripInput {
            distance: self.distance.clone(),
            mileage: self.mileage.clone(),
            people: self.people.clone(),
            fuel_price: self.fuel_price.clone(),
            include_owner: self.include_owner,
            rounding_unit: self.rounding_unit,
        }
    }

    pub fn trip_input(&self) -> TripInput {
        sanitize(&self.raw_input())
    }

    pub fn result(&self) -> TripResult {
        calculate(&self.trip_input())
    }

    pub fn share_text(&self) -> String {
        let input = self.trip_input();
        let result = calculate(&input);
        compose_summary(&input, &result)
    }

    /// Copies the summary to the clipboard
    ///
    /// Does nothing while the summary is stale. A failed write is logged and
    /// otherwise ignored; the only visible effect is that the indicator
    /// does not light up.
    ///
    /// # Returns
    /// `true` if the text reached the clipboard
    pub fn copy_summary(&mut self, clipboard: &mut dyn ClipboardSink) -> bool {
        if !self.has_calculated {
            return false;
        }

        match clipboard.put_text(&self.share_text()) {
            Ok(()) => {
                self.copied_until = Some(Instant::now() + COPIED_INDICATOR);
                tracing::info!("summary copied");
                true
            }
            Err(e) => {
                self.copied_until = None;
                tracing::warn!(error = %e, "copy to clipboard failed");
                false
            }
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Hides the "copied" indicator once its time is up
    pub fn expire_copied_indicator(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    pub fn log_error(&mut self, error: String) {
        if self.error_log.len() >= ERROR_LOG_CAPACITY {
            self.error_log.pop_front();
        }
        tracing::error!("{}", error);
        self.error_log.push_back((Utc::now(), error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryClipboard;

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_new_app_uses_defaults() {
        let app = app();
        assert_eq!(app.distance, "120");
        assert_eq!(app.mileage, "40");
        assert_eq!(app.people, "3");
        assert_eq!(app.fuel_type, FuelType::Petrol);
        assert_eq!(app.fuel_price, "107.4");
        assert!(app.include_owner);
        assert_eq!(app.rounding_unit, RoundingUnit::One);
        assert!(app.has_calculated);
    }

    #[test]
    fn test_default_form_splits_reference_trip() {
        let result = app().result();
        assert_eq!(result.paying_people_count, 3);
        assert_eq!(result.per_person_share, 107.0);
    }

    #[test]
    fn test_select_preset_overwrites_price() {
        let mut app = app();
        app.select_fuel(FuelType::Diesel);
        assert_eq!(app.fuel_price, "96.2");
        assert!(!app.has_calculated);

        app.select_fuel(FuelType::Custom);
        assert_eq!(app.fuel_price, "96.2");
    }

    #[test]
    fn test_typing_price_switches_to_custom() {
        let mut app = app();
        app.active_field = FormField::FuelPrice;
        app.pop_char();
        app.push_char('9');
        assert_eq!(app.fuel_price, "107.9");
        assert_eq!(app.fuel_type, FuelType::Custom);
    }

    #[test]
    fn test_typing_into_selector_is_ignored() {
        let mut app = app();
        app.active_field = FormField::IncludeOwner;
        app.push_char('7');
        assert!(app.has_calculated);
    }

    #[test]
    fn test_copy_requires_calculated_summary() {
        let mut app = app();
        let mut clipboard = MemoryClipboard::default();

        app.toggle_include_owner();
        assert!(!app.copy_summary(&mut clipboard));
        assert!(clipboard.contents.is_none());

        app.recalculate();
        assert!(app.copy_summary(&mut clipboard));
        assert!(app.is_copied());
        let copied = clipboard.contents.unwrap();
        assert!(copied.contains("(2 people paying excluding owner)"));
    }

    #[test]
    fn test_copy_failure_is_silent() {
        let mut app = app();
        let mut clipboard = MemoryClipboard::failing();
        assert!(!app.copy_summary(&mut clipboard));
        assert!(!app.is_copied());
        assert!(app.error_log.is_empty());
    }

    #[test]
    fn test_copied_indicator_expires() {
        let mut app = app();
        let mut clipboard = MemoryClipboard::default();
        assert!(app.copy_summary(&mut clipboard));

        app.expire_copied_indicator(Instant::now());
        assert!(app.is_copied());

        app.expire_copied_indicator(Instant::now() + COPIED_INDICATOR + Duration::from_millis(1));
        assert!(!app.is_copied());
    }

    #[test]
    fn test_edit_clears_copied_indicator() {
        let mut app = app();
        let mut clipboard = MemoryClipboard::default();
        app.copy_summary(&mut clipboard);

        app.push_char('0');
        assert!(!app.is_copied());
        assert_eq!(app.distance, "1200");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = app();
        app.distance = "5".to_string();
        app.select_fuel(FuelType::Diesel);
        app.set_rounding_unit(RoundingUnit::Ten);
        app.toggle_include_owner();

        app.reset();
        assert_eq!(app.distance, "120");
        assert_eq!(app.fuel_type, FuelType::Petrol);
        assert_eq!(app.fuel_price, "107.4");
        assert_eq!(app.rounding_unit, RoundingUnit::One);
        assert!(app.include_owner);
        assert!(app.has_calculated);
    }

    #[test]
    fn test_error_log_is_bounded() {
        let mut app = app();
        for i in 0..(ERROR_LOG_CAPACITY + 5) {
            app.log_error(format!("error {}", i));
        }
        assert_eq!(app.error_log.len(), ERROR_LOG_CAPACITY);
        assert_eq!(app.error_log.front().unwrap().1, "error 5");
    }

    #[test]
    fn test_field_cycle_covers_all_fields() {
        let mut field = FormField::Distance;
        for expected in FormField::ALL.iter().skip(1) {
            field = field.next();
            assert_eq!(field, *expected);
        }
        assert_eq!(field.next(), FormField::Distance);
        assert_eq!(FormField::Distance.prev(), FormField::RoundTo);
    }
}
