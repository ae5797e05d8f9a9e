//! Command structs for engine operations.
//!
//! Fields are `Option`s: the engine decides what "missing" means,
//! so an absent amount and a present zero amount stay distinguishable.

use crate::AccountId;

/// Amount as received from the outside, before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Create an expense.
#[derive(Clone, Debug, Default)]
pub struct ExpenseNewCmd {
    pub account_id: Option<AccountId>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<AmountInput>,
    pub description: Option<String>,
}

impl ExpenseNewCmd {
    #[must_use]
    pub fn new(
        account_id: AccountId,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<AmountInput>,
    ) -> Self {
        Self {
            account_id: Some(account_id),
            date: Some(date.into()),
            category: Some(category.into()),
            amount: Some(amount.into()),
            description: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of an expense. `None` keeps the stored value.
///
/// `description: Some(None)` clears the description.
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<AmountInput>,
    pub description: Option<Option<String>>,
}

impl ExpensePatch {
    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: impl Into<AmountInput>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }
}
