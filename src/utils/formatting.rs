//! Presentation formatting
//!
//! Functions for turning computed amounts into display strings and for
//! assembling the shareable trip summary. Amounts follow the en-IN
//! convention: the last three integer digits form one group and the rest
//! are grouped in pairs (`1,23,45,678`).

use crate::splitter::{TripInput, TripResult};

/// Currency prefix used in every rendered amount
pub const CURRENCY_PREFIX: &str = "Rs";

/// Most fraction digits an amount is shown with
const MAX_FRACTION_DIGITS: usize = 2;

/// Formats an amount for display
///
/// Whole amounts show no fraction digits. Other amounts keep one or two,
/// rounded half-up from the shortest decimal form of the value, with
/// trailing zeros trimmed down to one digit.
///
/// # Arguments
/// - `value` - The amount to format
///
/// # Returns
/// The grouped display string, or `"0"` for NaN and infinities
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let min_fraction = if value.fract() == 0.0 { 0 } else { 1 };
    let (int_digits, mut frac_digits) =
        round_half_up(&format!("{}", value.abs()), MAX_FRACTION_DIGITS);

    while frac_digits.len() > min_fraction && frac_digits.ends_with('0') {
        frac_digits.pop();
    }
    while frac_digits.len() < min_fraction {
        frac_digits.push('0');
    }

    let mut result = String::new();
    if value < 0.0 {
        result.push('-');
    }
    result.push_str(&group_indian(&int_digits));
    if !frac_digits.is_empty() {
        result.push('.');
        result.push_str(&frac_digits);
    }
    result
}

/// Formats a plain quantity (distance, mileage) in its shortest form
///
/// `120.0` renders as `120`, `12.5` as `12.5`. No grouping is applied.
pub fn format_plain_number(value: f64) -> String {
    format!("{}", value)
}

/// Builds the shareable multi-line summary for a trip
pub fn compose_summary(input: &TripInput, result: &TripResult) -> String {
    let owner_clause = if input.include_owner {
        "including owner"
    } else {
        "excluding owner"
    };

    format!(
        "TRIP COST SPLIT\n\
         ---------------\n\
         Total Cost: {cur} {total}\n\
         Distance: {distance} km\n\
         Mileage: {mileage} km/l\n\
         Fuel Price: {cur} {price}/l\n\
         People: {people}\n\
         \n\
         SPLIT:\n\
         Each person pays: {cur} {share}\n\
         ({paying} people paying {owner_clause})",
        cur = CURRENCY_PREFIX,
        total = format_currency(result.total_cost),
        distance = format_plain_number(input.distance_km),
        mileage = format_plain_number(input.mileage_km_per_litre),
        price = format_currency(input.fuel_price_per_litre),
        people = input.people_count,
        share = format_currency(result.per_person_share),
        paying = result.paying_people_count,
        owner_clause = owner_clause,
    )
}

/// Rounds a plain decimal string to `max_fraction` digits, halves up
///
/// Expects the output of `f64`'s `Display` for a non-negative finite value
/// (digits with an optional single `.`). Returns the integer and fraction
/// digits separately; the fraction has exactly `max_fraction` digits when
/// rounding happened and may be shorter otherwise.
fn round_half_up(decimal: &str, max_fraction: usize) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    if frac_part.len() <= max_fraction {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[max_fraction] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..max_fraction].bytes())
        .collect();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - max_fraction;
    let text = String::from_utf8_lossy(&digits).into_owned();
    (text[..split].to_string(), text[split..].to_string())
}

/// Inserts en-IN digit group separators into a run of integer digits
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::RoundingUnit;

    #[test]
    fn test_format_currency_whole_values() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(107.0), "107");
        assert_eq!(format_currency(1000.0), "1,000");
    }

    #[test]
    fn test_format_currency_fractions() {
        assert_eq!(format_currency(1000.5), "1,000.5");
        assert_eq!(format_currency(107.4), "107.4");
        assert_eq!(format_currency(322.25), "322.25");
        assert_eq!(format_currency(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(1.005), "1.01");
        assert_eq!(format_currency(2.999), "3.0");
        assert_eq!(format_currency(999.996), "1,000.0");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "0");
        assert_eq!(format_currency(f64::INFINITY), "0");
        assert_eq!(format_currency(f64::NEG_INFINITY), "0");
    }

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(100000.0), "1,00,000");
        assert_eq!(format_currency(12345678.0), "1,23,45,678");
        assert_eq!(format_currency(-1500.0), "-1,500");
    }

    #[test]
    fn test_format_plain_number() {
        assert_eq!(format_plain_number(120.0), "120");
        assert_eq!(format_plain_number(12.5), "12.5");
        assert_eq!(format_plain_number(0.01), "0.01");
    }

    #[test]
    fn test_compose_summary_layout() {
        let input = TripInput {
            distance_km: 120.0,
            mileage_km_per_litre: 40.0,
            people_count: 3,
            fuel_price_per_litre: 107.4,
            include_owner: false,
            rounding_unit: RoundingUnit::One,
        };
        let result = TripResult {
            total_cost: 322.2,
            paying_people_count: 2,
            per_person_share: 161.0,
        };

        let expected = "TRIP COST SPLIT\n\
                        ---------------\n\
                        Total Cost: Rs 322.2\n\
                        Distance: 120 km\n\
                        Mileage: 40 km/l\n\
                        Fuel Price: Rs 107.4/l\n\
                        People: 3\n\
                        \n\
                        SPLIT:\n\
                        Each person pays: Rs 161\n\
                        (2 people paying excluding owner)";
        assert_eq!(compose_summary(&input, &result), expected);
    }
}
