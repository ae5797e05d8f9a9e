//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so creation and partial updates enforce the same invariants.

use chrono::NaiveDate;

use crate::{AmountInput, EngineError, ResultEngine};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Require a present, non-blank value. The value is returned untouched.
pub(crate) fn require_text(value: Option<String>, field: &str) -> ResultEngine<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EngineError::MissingField(field.to_string())),
    }
}

/// Require a present value.
pub(crate) fn require<T>(value: Option<T>, field: &str) -> ResultEngine<T> {
    value.ok_or_else(|| EngineError::MissingField(field.to_string()))
}

/// Turn blank descriptions into `None`.
pub(crate) fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Check that `value` is a real calendar date written as `YYYY-MM-DD`.
pub(crate) fn validate_date(value: String) -> ResultEngine<String> {
    if value.len() != 10 || NaiveDate::parse_from_str(&value, DATE_FORMAT).is_err() {
        return Err(EngineError::InvalidDate(format!(
            "'{value}' is not a YYYY-MM-DD date"
        )));
    }
    Ok(value)
}

/// Parse an amount into a finite `f64`.
///
/// An empty text amount counts as missing; zero is a valid amount.
pub(crate) fn parse_amount(input: AmountInput) -> ResultEngine<f64> {
    let amount = match input {
        AmountInput::Number(value) => value,
        AmountInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(EngineError::MissingField("amount".to_string()));
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| EngineError::InvalidAmount(format!("'{trimmed}' is not a number")))?
        }
    };

    if !amount.is_finite() {
        return Err(EngineError::InvalidAmount(
            "amount must be a finite number".to_string(),
        ));
    }
    Ok(amount)
}
