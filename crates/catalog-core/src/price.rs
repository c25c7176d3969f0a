//! Price entry rules
//!
//! While typing, the field only ever holds text matching `^\d*\.?\d{0,2}$`.
//! At submission the text is parsed and re-rendered with exactly two decimals.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref PRICE_INPUT: Regex = Regex::new(r"^\d*\.?\d{0,2}$").expect("valid price pattern");
}

/// Whether `value` is an acceptable in-progress price entry.
pub fn is_price_input(value: &str) -> bool {
    PRICE_INPUT.is_match(value)
}

/// Keystroke guard: the candidate replaces the current value only if it
/// matches the entry pattern, otherwise the current value stays.
pub fn accept_price_input(current: &str, candidate: &str) -> String {
    if is_price_input(candidate) {
        candidate.to_string()
    } else {
        current.to_string()
    }
}

/// Render a raw price as a fixed two-decimal string, e.g. `12.3` -> `12.30`.
pub fn normalize_price(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidPrice(raw.to_string()))?;
    if !value.is_finite() {
        return Err(Error::InvalidPrice(raw.to_string()));
    }
    Ok(format!("{:.2}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(field: &str, keys: &str) -> String {
        keys.chars().fold(field.to_string(), |current, key| {
            let candidate = format!("{}{}", current, key);
            accept_price_input(&current, &candidate)
        })
    }

    #[test]
    fn test_typing_stops_at_two_decimals() {
        assert_eq!(type_into("", "12.345"), "12.34");
    }

    #[test]
    fn test_typing_letters_is_ignored() {
        assert_eq!(type_into("", "abc"), "");
        assert_eq!(type_into("5", "x"), "5");
    }

    #[test]
    fn test_second_decimal_point_is_rejected() {
        assert_eq!(type_into("", "1.2.3"), "1.23");
    }

    #[test]
    fn test_pattern() {
        for ok in ["", "0", "12", "12.", ".5", "12.3", "12.34"] {
            assert!(is_price_input(ok), "should accept {:?}", ok);
        }
        for bad in ["12.345", "abc", "-1", "1,5", "1e5", " 1"] {
            assert!(!is_price_input(bad), "should reject {:?}", bad);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_price("12.3").unwrap(), "12.30");
        assert_eq!(normalize_price("12").unwrap(), "12.00");
        assert_eq!(normalize_price("12.").unwrap(), "12.00");
        assert_eq!(normalize_price(".5").unwrap(), "0.50");
        assert_eq!(normalize_price("0.99").unwrap(), "0.99");
    }

    #[test]
    fn test_normalize_rejects_non_numbers() {
        assert_eq!(normalize_price(""), Err(Error::InvalidPrice("".into())));
        assert_eq!(normalize_price("."), Err(Error::InvalidPrice(".".into())));
        assert!(normalize_price("abc").is_err());
        assert!(normalize_price("inf").is_err());
    }
}
