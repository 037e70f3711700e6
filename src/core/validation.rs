//! Input checks applied before a record is written to any collection.
//!
//! Anything that would turn into `NaN` or a nonsensical total is rejected here,
//! so the ledger can stay a total function over the values it receives.

use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Date format used for every calendar day in the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount accepted for a single task, advance or expense
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Largest weight accepted for a single harvest, in kilograms
pub const MAX_WEIGHT_KG: f64 = 1_000_000.0;

/// Largest tariff or market price per kilogram
pub const MAX_RATE: i64 = 1_000_000_000_000;

/// Accepts strictly positive amounts up to [`MAX_AMOUNT`].
///
/// # Errors
/// `InvalidAmount` for zero, negative or oversized values.
pub const fn validate_amount(amount: i64) -> Result<i64> {
    if amount <= 0 || amount > MAX_AMOUNT {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(amount)
}

/// Accepts finite, strictly positive weights up to [`MAX_WEIGHT_KG`].
///
/// # Errors
/// `InvalidWeight` for zero, negative, oversized, `NaN` or infinite weights.
pub fn validate_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() || weight <= 0.0 || weight > MAX_WEIGHT_KG {
        return Err(Error::InvalidWeight { weight });
    }
    Ok(weight)
}

/// Accepts pay rates and prices between 0 and [`MAX_RATE`].
///
/// # Errors
/// `InvalidPayRate` for negative or oversized rates.
pub const fn validate_pay_rate(rate: i64) -> Result<i64> {
    if rate < 0 || rate > MAX_RATE {
        return Err(Error::InvalidPayRate { rate });
    }
    Ok(rate)
}

/// Trims a required text field, rejecting blank input.
///
/// # Errors
/// `EmptyField` naming the field when it is empty or whitespace-only.
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Drops blank optional text.
#[must_use]
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a `YYYY-MM-DD` calendar day.
///
/// # Errors
/// `InvalidDate` when the input is not a valid date in that format.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses an optional date, defaulting to today in local time.
///
/// # Errors
/// `InvalidDate` when a value is given but cannot be parsed.
pub fn parse_date_or_today(value: Option<&str>) -> Result<NaiveDate> {
    value.map_or_else(|| Ok(chrono::Local::now().date_naive()), parse_date)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(1).unwrap(), 1);
        assert!(matches!(
            validate_amount(0),
            Err(Error::InvalidAmount { amount: 0 })
        ));
        assert!(validate_amount(-50).is_err());
        assert_eq!(validate_amount(MAX_AMOUNT).unwrap(), MAX_AMOUNT);
        assert!(validate_amount(MAX_AMOUNT + 1).is_err());
        assert!(validate_amount(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert_eq!(validate_weight(12.5).unwrap(), 12.5);
        assert!(validate_weight(0.0).is_err());
        assert!(validate_weight(-1.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
        assert_eq!(validate_weight(MAX_WEIGHT_KG).unwrap(), MAX_WEIGHT_KG);
        assert!(validate_weight(2e17).is_err());
    }

    #[test]
    fn test_validate_pay_rate_allows_zero() {
        assert_eq!(validate_pay_rate(0).unwrap(), 0);
        assert!(validate_pay_rate(-1).is_err());
        assert!(validate_pay_rate(MAX_RATE + 1).is_err());
    }

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("Name", "  Kouassi ").unwrap(), "Kouassi");
        assert!(matches!(
            require_text("Name", "   "),
            Err(Error::EmptyField { field }) if field == "Name"
        ));
    }

    #[test]
    fn test_optional_text_drops_blank() {
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(optional_text(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(
            parse_date("2023-02-29"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn test_parse_date_or_today_defaults() {
        let today = chrono::Local::now().date_naive();
        assert_eq!(parse_date_or_today(None).unwrap(), today);
        assert!(parse_date_or_today(Some("nope")).is_err());
    }
}
