//! Record store and aggregation for the expense tracker.
//!
//! [`Engine`] owns the database and exposes account registration/login and
//! expense CRUD. [`summarize`] groups an account's expenses by category for
//! the analytics view.

pub use accounts::AccountId;
pub use commands::{AmountInput, ExpenseNewCmd, ExpensePatch};
pub use error::EngineError;
pub use expenses::{Expense, ExpenseId};
pub use ops::{Engine, EngineBuilder};
pub use summary::{CategoryTotal, Summary, summarize};

mod accounts;
mod commands;
mod credentials;
mod error;
mod expenses;
mod ops;
mod summary;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
