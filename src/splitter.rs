//! Trip fuel cost splitting
//!
//! The computational core: raw form values are sanitized into a
//! [`TripInput`], which is turned into a [`TripResult`] by pure arithmetic.
//! Neither step can fail; invalid input is coerced, never reported.

use crate::utils::validation::{count_at_least, number_at_least};
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback distance when the field is empty or invalid (km)
pub const DISTANCE_FALLBACK: f64 = 0.0;

/// Smallest mileage accepted, also the fallback (km/l)
pub const MIN_MILEAGE: f64 = 0.01;

/// Fallback fuel price when the field is empty or invalid
pub const PRICE_FALLBACK: f64 = 0.0;

/// Smallest head count accepted, also the fallback
pub const MIN_PEOPLE: u32 = 1;

/// Granularity the per-person share is rounded to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RoundingUnit {
    #[default]
    One,
    Five,
    Ten,
}

impl RoundingUnit {
    pub const ALL: [RoundingUnit; 3] = [RoundingUnit::One, RoundingUnit::Five, RoundingUnit::Ten];

    pub fn value(self) -> u32 {
        match self {
            RoundingUnit::One => 1,
            RoundingUnit::Five => 5,
            RoundingUnit::Ten => 10,
        }
    }

    pub fn next(self) -> Self {
        match self {
            RoundingUnit::One => RoundingUnit::Five,
            RoundingUnit::Five => RoundingUnit::Ten,
            RoundingUnit::Ten => RoundingUnit::One,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RoundingUnit::One => RoundingUnit::Ten,
            RoundingUnit::Five => RoundingUnit::One,
            RoundingUnit::Ten => RoundingUnit::Five,
        }
    }
}

impl TryFrom<u32> for RoundingUnit {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(RoundingUnit::One),
            5 => Ok(RoundingUnit::Five),
            10 => Ok(RoundingUnit::Ten),
            other => Err(anyhow!("rounding unit must be 1, 5 or 10 (got {})", other)),
        }
    }
}

impl From<RoundingUnit> for u32 {
    fn from(unit: RoundingUnit) -> Self {
        unit.value()
    }
}

impl FromStr for RoundingUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| anyhow!("rounding unit must be 1, 5 or 10 (got '{}')", s))?;
        RoundingUnit::try_from(value)
    }
}

impl fmt::Display for RoundingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Fuel selector state
///
/// The two presets carry a price from configuration; `Custom` means the
/// price field holds whatever the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Custom,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Petrol, FuelType::Diesel, FuelType::Custom];

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Custom => "Custom",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FuelType::Petrol => FuelType::Diesel,
            FuelType::Diesel => FuelType::Custom,
            FuelType::Custom => FuelType::Petrol,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FuelType::Petrol => FuelType::Custom,
            FuelType::Diesel => FuelType::Petrol,
            FuelType::Custom => FuelType::Diesel,
        }
    }
}

/// Form values exactly as entered
#[derive(Debug, Clone, PartialEq)]
pub struct RawTripInput {
    pub distance: String,
    pub mileage: String,
    pub people: String,
    pub fuel_price: String,
    pub include_owner: bool,
    pub rounding_unit: RoundingUnit,
}

/// Sanitized trip parameters
///
/// Always satisfies: distance ≥ 0, mileage ≥ 0.01, people ≥ 1, price ≥ 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripInput {
    pub distance_km: f64,
    pub mileage_km_per_litre: f64,
    pub people_count: u32,
    pub fuel_price_per_litre: f64,
    pub include_owner: bool,
    pub rounding_unit: RoundingUnit,
}

/// Cost breakdown derived from a [`TripInput`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResult {
    pub total_cost: f64,
    pub paying_people_count: u32,
    pub per_person_share: f64,
}

/// Coerces raw form values into a valid [`TripInput`]
///
/// Empty, non-numeric, non-finite or zero values take the field's fallback
/// (0 for distance and price, 0.01 for mileage, 1 for people), then every
/// value is clamped to its lower bound. The people count is floored.
pub fn sanitize(raw: &RawTripInput) -> TripInput {
    TripInput {
        distance_km: number_at_least(&raw.distance, DISTANCE_FALLBACK, 0.0),
        mileage_km_per_litre: number_at_least(&raw.mileage, MIN_MILEAGE, MIN_MILEAGE),
        people_count: count_at_least(&raw.people, MIN_PEOPLE, MIN_PEOPLE),
        fuel_price_per_litre: number_at_least(&raw.fuel_price, PRICE_FALLBACK, 0.0),
        include_owner: raw.include_owner,
        rounding_unit: raw.rounding_unit,
    }
}

/// Number of people sharing the cost
///
/// When the owner is excluded one head is dropped, but never below one.
pub fn paying_people(people_count: u32, include_owner: bool) -> u32 {
    if include_owner {
        people_count
    } else {
        people_count.saturating_sub(1).max(1)
    }
}

/// Rounds to the nearest multiple of `unit`, halves rounding up
pub fn round_to_unit(value: f64, unit: RoundingUnit) -> f64 {
    let step = f64::from(unit.value());
    (value / step + 0.5).floor() * step
}

/// Computes the total fuel cost and each payer's share
pub fn calculate(input: &TripInput) -> TripResult {
    let litres = input.distance_km / input.mileage_km_per_litre;
    let total_cost = litres * input.fuel_price_per_litre;
    let paying_people_count = paying_people(input.people_count, input.include_owner);
    let raw_share = total_cost / f64::from(paying_people_count);

    TripResult {
        total_cost,
        paying_people_count,
        per_person_share: round_to_unit(raw_share, input.rounding_unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(distance: &str, mileage: &str, people: &str, price: &str) -> RawTripInput {
        RawTripInput {
            distance: distance.to_string(),
            mileage: mileage.to_string(),
            people: people.to_string(),
            fuel_price: price.to_string(),
            include_owner: true,
            rounding_unit: RoundingUnit::One,
        }
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let input = sanitize(&raw("120", "40", "3", "107.4"));
        assert_eq!(input.distance_km, 120.0);
        assert_eq!(input.mileage_km_per_litre, 40.0);
        assert_eq!(input.people_count, 3);
        assert_eq!(input.fuel_price_per_litre, 107.4);
    }

    #[test]
    fn test_sanitize_applies_fallbacks() {
        let input = sanitize(&raw("abc", "", "zero", "?"));
        assert_eq!(input.distance_km, 0.0);
        assert_eq!(input.mileage_km_per_litre, MIN_MILEAGE);
        assert_eq!(input.people_count, 1);
        assert_eq!(input.fuel_price_per_litre, 0.0);
    }

    #[test]
    fn test_sanitize_clamps_negatives() {
        let input = sanitize(&raw("-10", "-3", "-4", "-1"));
        assert_eq!(input.distance_km, 0.0);
        assert_eq!(input.mileage_km_per_litre, MIN_MILEAGE);
        assert_eq!(input.people_count, 1);
        assert_eq!(input.fuel_price_per_litre, 0.0);
    }

    #[test]
    fn test_paying_people_floor() {
        assert_eq!(paying_people(1, false), 1);
        assert_eq!(paying_people(3, false), 2);
        assert_eq!(paying_people(3, true), 3);
    }

    #[test]
    fn test_round_to_unit_half_up() {
        assert_eq!(round_to_unit(107.4, RoundingUnit::One), 107.0);
        assert_eq!(round_to_unit(107.5, RoundingUnit::One), 108.0);
        assert_eq!(round_to_unit(107.4, RoundingUnit::Ten), 110.0);
        assert_eq!(round_to_unit(102.5, RoundingUnit::Five), 105.0);
        assert_eq!(round_to_unit(102.4, RoundingUnit::Five), 100.0);
        assert_eq!(round_to_unit(0.0, RoundingUnit::Ten), 0.0);
    }

    #[test]
    fn test_calculate_reference_trip() {
        let result = calculate(&sanitize(&raw("120", "40", "3", "107.4")));
        assert!((result.total_cost - 322.2).abs() < 1e-9);
        assert_eq!(result.paying_people_count, 3);
        assert_eq!(result.per_person_share, 107.0);
    }

    #[test]
    fn test_calculate_zero_distance() {
        let result = calculate(&sanitize(&raw("0", "40", "3", "107.4")));
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.per_person_share, 0.0);
    }

    #[test]
    fn test_rounding_unit_parsing() {
        assert_eq!("5".parse::<RoundingUnit>().unwrap(), RoundingUnit::Five);
        assert_eq!(" 10 ".parse::<RoundingUnit>().unwrap(), RoundingUnit::Ten);
        assert!("3".parse::<RoundingUnit>().is_err());
        assert!("ten".parse::<RoundingUnit>().is_err());
    }

    #[test]
    fn test_rounding_unit_cycles() {
        assert_eq!(RoundingUnit::Ten.next(), RoundingUnit::One);
        assert_eq!(RoundingUnit::One.prev(), RoundingUnit::Ten);
        assert_eq!(FuelType::Custom.next(), FuelType::Petrol);
        assert_eq!(FuelType::Petrol.prev(), FuelType::Custom);
    }
}
