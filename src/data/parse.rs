//! Field Parsing Module
//! Small pure helpers that turn raw CSV text into typed values.

use chrono::NaiveDate;
use thiserror::Error;

/// Currency symbols accepted in front of a price.
const CURRENCY_SYMBOLS: [char; 4] = ['$', '£', '€', '¥'];

/// Date layouts accepted for the `date` column, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty value")]
    Empty,
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

/// Trim and lowercase a free-text field for comparison and grouping.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse a currency-formatted string such as `"$3.50"` into a number.
///
/// A single leading currency symbol is optional. Surrounding whitespace is ignored.
/// Non-finite results are rejected.
pub fn parse_currency(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let number = trimmed
        .strip_prefix(|c: char| CURRENCY_SYMBOLS.contains(&c))
        .unwrap_or(trimmed)
        .trim_start();

    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidPrice(raw.to_string()))
}

/// Parse an integer quantity. Whitespace is ignored, anything else must be digits.
pub fn parse_quantity(raw: &str) -> Result<i64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidQuantity(raw.to_string()))
}

/// Parse a calendar date.
///
/// A trailing time component (`2021-01-12 00:00:00` or `2021-01-12T00:00:00`) is ignored.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let day = trimmed
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or(trimmed);

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
        .ok_or_else(|| ParseError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_with_symbol() {
        assert_eq!(parse_currency("$3.50"), Ok(3.5));
    }

    #[test]
    fn currency_without_symbol() {
        assert_eq!(parse_currency("3.50"), Ok(3.5));
    }

    #[test]
    fn currency_with_whitespace() {
        assert_eq!(parse_currency("  $3.50 \t"), Ok(3.5));
        assert_eq!(parse_currency("$ 3.50"), Ok(3.5));
    }

    #[test]
    fn currency_rejects_text() {
        assert!(matches!(parse_currency("$abc"), Err(ParseError::InvalidPrice(_))));
        assert!(matches!(parse_currency("three"), Err(ParseError::InvalidPrice(_))));
        assert!(matches!(parse_currency("$$3.50"), Err(ParseError::InvalidPrice(_))));
        assert!(matches!(parse_currency("$inf"), Err(ParseError::InvalidPrice(_))));
    }

    #[test]
    fn currency_rejects_empty() {
        assert_eq!(parse_currency(""), Err(ParseError::Empty));
        assert_eq!(parse_currency("   "), Err(ParseError::Empty));
    }

    #[test]
    fn quantity_parses_integers_only() {
        assert_eq!(parse_quantity(" 4 "), Ok(4));
        assert!(matches!(parse_quantity("4.5"), Err(ParseError::InvalidQuantity(_))));
        assert!(matches!(parse_quantity("four"), Err(ParseError::InvalidQuantity(_))));
        assert_eq!(parse_quantity(""), Err(ParseError::Empty));
    }

    #[test]
    fn date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 12).unwrap();
        assert_eq!(parse_date("2021-01-12"), Ok(expected));
        assert_eq!(parse_date("2021/01/12"), Ok(expected));
        assert_eq!(parse_date("01/12/2021"), Ok(expected));
        assert_eq!(parse_date("2021-01-12 00:00:00"), Ok(expected));
        assert!(matches!(parse_date("2021-13-01"), Err(ParseError::InvalidDate(_))));
        assert!(matches!(parse_date("yesterday"), Err(ParseError::InvalidDate(_))));
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_text("  Pink Morsel "), "pink morsel");
        assert_eq!(normalize_text("NORTH"), "north");
    }
}
