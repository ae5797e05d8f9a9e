//! The module contains the error the engine can throw.
//!
//! Every error is returned to the caller as part of the operation result;
//! none of them leaves the store in an unusable state.
//!
//! - [`MissingField`] a required field is absent or empty.
//! - [`InvalidAmount`] an amount is not a finite number.
//! - [`ExistingKey`] an account name is already taken.
//! - [`InvalidCredentials`] login failed, without telling which field was wrong.
//! - [`KeyNotFound`] the referenced account or expense does not exist.
//! - [`NoData`] there is nothing to summarize.
//! - [`InvalidSummary`] category and amount lists do not line up.
//!
//!  [`MissingField`]: EngineError::MissingField
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`InvalidCredentials`]: EngineError::InvalidCredentials
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`NoData`]: EngineError::NoData
//!  [`InvalidSummary`]: EngineError::InvalidSummary
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("No expenses found")]
    NoData,
    #[error("Malformed summary: {0}")]
    InvalidSummary(String),
    #[error("Credential error: {0}")]
    Credential(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::NoData, Self::NoData) => true,
            (Self::InvalidSummary(a), Self::InvalidSummary(b)) => a == b,
            (Self::Credential(a), Self::Credential(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
