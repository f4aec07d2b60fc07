//! Numeric input coercion
//!
//! Form fields arrive as free text. These helpers turn that text into
//! numbers without ever failing: anything unusable becomes a caller-chosen
//! fallback, and results are clamped to a lower bound.

/// Parses form text as a usable number
///
/// Surrounding whitespace is ignored. Empty text, text that is not a
/// number, non-finite values and zero all count as "missing" and yield
/// `None`, so callers substitute their fallback.
///
/// # Arguments
/// - `text` - The raw field contents
///
/// # Returns
/// `Some(value)` for a finite, non-zero number, otherwise `None`
pub fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => Some(value),
        _ => None,
    }
}

/// Coerces text to a number no smaller than `min`
///
/// Missing or invalid text is replaced by `fallback` before clamping.
pub fn number_at_least(text: &str, fallback: f64, min: f64) -> f64 {
    coerce_number(text).unwrap_or(fallback).max(min)
}

/// Coerces text to a whole count no smaller than `min`
///
/// Fractional values are floored before clamping, so `"2.9"` counts as 2
/// and `"0.5"` drops to 0 and is then raised to `min`. Values beyond
/// `u32::MAX` saturate.
pub fn count_at_least(text: &str, fallback: u32, min: u32) -> u32 {
    let floored = coerce_number(text).unwrap_or(f64::from(fallback)).floor();
    if floored < f64::from(min) {
        min
    } else {
        floored as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number_accepts_plain_numbers() {
        assert_eq!(coerce_number("120"), Some(120.0));
        assert_eq!(coerce_number("107.4"), Some(107.4));
        assert_eq!(coerce_number(" 40 "), Some(40.0));
        assert_eq!(coerce_number("1e3"), Some(1000.0));
        assert_eq!(coerce_number("-5"), Some(-5.0));
    }

    #[test]
    fn test_coerce_number_treats_zero_as_missing() {
        assert_eq!(coerce_number("0"), None);
        assert_eq!(coerce_number("-0"), None);
        assert_eq!(coerce_number("0.000"), None);
    }

    #[test]
    fn test_coerce_number_rejects_garbage() {
        assert_eq!(coerce_number(""), None);
        assert_eq!(coerce_number("   "), None);
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("12km"), None);
    }

    #[test]
    fn test_coerce_number_rejects_non_finite() {
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("-infinity"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number("1e400"), None);
    }

    #[test]
    fn test_number_at_least_clamps_and_falls_back() {
        assert_eq!(number_at_least("-3", 0.01, 0.01), 0.01);
        assert_eq!(number_at_least("0", 0.01, 0.01), 0.01);
        assert_eq!(number_at_least("abc", 0.0, 0.0), 0.0);
        assert_eq!(number_at_least("12.5", 0.01, 0.01), 12.5);
    }

    #[test]
    fn test_count_at_least_floors_before_clamping() {
        assert_eq!(count_at_least("2.9", 1, 1), 2);
        assert_eq!(count_at_least("0.5", 1, 1), 1);
        assert_eq!(count_at_least("-2", 1, 1), 1);
        assert_eq!(count_at_least("x", 1, 1), 1);
        assert_eq!(count_at_least("7", 1, 1), 7);
    }

    #[test]
    fn test_count_at_least_saturates_huge_values() {
        assert_eq!(count_at_least("1e20", 1, 1), u32::MAX);
    }
}
