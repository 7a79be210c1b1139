//! Form input parsing shared by every entity.
//!
//! Required text fields must be non-blank. Numeric fields are permissive: any
//! input that does not parse to a finite number is taken as `0`.

use crate::entities::Choice;
use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Returns the trimmed value of a required text field.
pub fn required_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::missing(field));
    }
    Ok(trimmed.to_string())
}

/// Parses a required `YYYY-MM-DD` date.
pub fn required_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let text = required_text(field, value)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .map_err(|e| Error::invalid(field, format!("`{text}` is not a YYYY-MM-DD date: {e}")))
}

/// Parses a required drop-down choice.
pub fn required_choice<T: Choice>(field: &'static str, value: &str) -> Result<T> {
    let text = required_text(field, value)?;
    T::parse_choice(&text).ok_or_else(|| {
        let options: Vec<&str> = T::ALL.iter().map(|option| option.label()).collect();
        Error::invalid(
            field,
            format!("`{text}` is not one of: {}", options.join(", ")),
        )
    })
}

/// Parses a monetary amount, taking anything unparseable as `0`.
#[must_use]
pub fn lenient_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

/// Parses a unit count, taking anything unparseable as `0`.
///
/// A fractional count is truncated; a negative one counts as `0`.
#[must_use]
pub fn lenient_count(value: &str) -> u32 {
    let trimmed = value.trim();
    if let Ok(count) = trimmed.parse::<u32>() {
        return count;
    }
    let amount = lenient_amount(trimmed);
    if amount <= 0.0 {
        return 0;
    }
    // Cast safety: amount is finite and positive; `as` saturates at u32::MAX.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = amount.trunc() as u32;
    count
}

/// Rejects negative amounts.
pub fn non_negative(field: &'static str, amount: f64) -> Result<f64> {
    if amount < 0.0 {
        return Err(Error::invalid(field, format!("{amount} must not be negative")));
    }
    Ok(amount)
}
