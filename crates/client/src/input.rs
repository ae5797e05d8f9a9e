//! Checks run before a request leaves the client.

use api_types::expense::{AmountValue, ExpenseNew, ExpenseUpdate};
use chrono::{Local, NaiveDate};

use crate::error::{AppError, Result};

fn amount(raw: &str) -> Result<AmountValue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Input("Please enter an amount".to_string()));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(AmountValue::Number(value)),
        _ => Err(AppError::Input("Amount must be a number".to_string())),
    }
}

fn date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|_| raw.to_string())
        .map_err(|_| AppError::Input(format!("Invalid date {raw:?}, expected YYYY-MM-DD")))
}

fn category(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(AppError::Input("Please enter a category".to_string()));
    }
    Ok(raw.to_string())
}

pub fn new_expense(
    user_id: i32,
    raw_category: &str,
    raw_amount: &str,
    raw_date: Option<&str>,
    description: Option<String>,
) -> Result<ExpenseNew> {
    let category = category(raw_category)?;
    let amount = amount(raw_amount)?;
    let date = match raw_date {
        Some(raw) => date(raw)?,
        None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    Ok(ExpenseNew {
        user_id: Some(user_id),
        date: Some(date),
        category: Some(category),
        amount: Some(amount),
        description: description.filter(|text| !text.trim().is_empty()),
    })
}

pub fn update(
    raw_date: Option<&str>,
    raw_category: Option<&str>,
    raw_amount: Option<&str>,
    description: Option<String>,
    clear_description: bool,
) -> Result<ExpenseUpdate> {
    let update = ExpenseUpdate {
        date: raw_date.map(date).transpose()?,
        category: raw_category.map(category).transpose()?,
        amount: raw_amount.map(amount).transpose()?,
        description: if clear_description {
            Some(None)
        } else {
            description.map(Some)
        },
    };

    if update.is_empty() {
        return Err(AppError::Input("Nothing to update".to_string()));
    }
    Ok(update)
}
