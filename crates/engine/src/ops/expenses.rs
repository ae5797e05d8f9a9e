use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    AccountId, EngineError, Expense, ExpenseId, ExpenseNewCmd, ExpensePatch, ResultEngine,
    Summary, expenses, summary,
    util::{normalize_optional_text, parse_amount, require, require_text, validate_date},
};

use super::{Engine, with_tx};

impl Engine {
    /// Add an expense for an existing account and return its id.
    ///
    /// Account, date, category and amount are required. Presence is checked
    /// for all of them before any value is validated.
    pub async fn create_expense(&self, cmd: ExpenseNewCmd) -> ResultEngine<ExpenseId> {
        let account_id = require(cmd.account_id, "user_id")?;
        let date = require_text(cmd.date, "date")?;
        let category = require_text(cmd.category, "category")?;
        let amount = require(cmd.amount, "amount")?;

        let date = validate_date(date)?;
        let amount = parse_amount(amount)?;
        let description = normalize_optional_text(cmd.description);

        with_tx!(self, |db_tx| {
            self.require_account(&db_tx, account_id).await?;

            let active = expenses::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                date: ActiveValue::Set(date),
                category: ActiveValue::Set(category),
                amount: ActiveValue::Set(amount),
                description: ActiveValue::Set(description),
                ..Default::default()
            };
            let model = active.insert(&db_tx).await?;

            tracing::debug!(expense_id = model.id, account_id, "expense created");
            Ok(model.id)
        })
    }

    /// All expenses of an account, in insertion order. Unknown accounts
    /// simply have no expenses.
    pub async fn list_expenses(&self, account_id: AccountId) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find()
            .filter(expenses::Column::AccountId.eq(account_id))
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Expense::from).collect())
    }

    /// Return a single expense.
    pub async fn expense(&self, expense_id: ExpenseId) -> ResultEngine<Expense> {
        expenses::Entity::find_by_id(expense_id)
            .one(&self.database)
            .await?
            .map(Expense::from)
            .ok_or_else(|| EngineError::KeyNotFound("expense".to_string()))
    }

    /// Replace the supplied fields of an expense, keeping the others.
    ///
    /// A missing expense is reported before anything about the patch.
    /// Supplied values go through the same checks as on creation, and a
    /// rejected patch writes nothing.
    pub async fn update_expense(
        &self,
        expense_id: ExpenseId,
        patch: ExpensePatch,
    ) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = expenses::Entity::find_by_id(expense_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("expense".to_string()))?;

            if patch.is_empty() {
                return Ok(());
            }

            let date = patch
                .date
                .map(|date| require_text(Some(date), "date").and_then(validate_date))
                .transpose()?;
            let category = patch
                .category
                .map(|category| require_text(Some(category), "category"))
                .transpose()?;
            let amount = patch.amount.map(parse_amount).transpose()?;
            let description = patch.description.map(normalize_optional_text);

            let mut active: expenses::ActiveModel = model.into();
            if let Some(date) = date {
                active.date = ActiveValue::Set(date);
            }
            if let Some(category) = category {
                active.category = ActiveValue::Set(category);
            }
            if let Some(amount) = amount {
                active.amount = ActiveValue::Set(amount);
            }
            if let Some(description) = description {
                active.description = ActiveValue::Set(description);
            }
            active.update(&db_tx).await?;

            tracing::debug!(expense_id, "expense updated");
            Ok(())
        })
    }

    /// Remove an expense.
    pub async fn delete_expense(&self, expense_id: ExpenseId) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let result = expenses::Entity::delete_by_id(expense_id)
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EngineError::KeyNotFound("expense".to_string()));
            }

            tracing::debug!(expense_id, "expense deleted");
            Ok(())
        })
    }

    /// Summarize the current expenses of an account.
    ///
    /// Fails with [`EngineError::NoData`] when the account has none.
    pub async fn summarize_account(&self, account_id: AccountId) -> ResultEngine<Summary> {
        let expenses = self.list_expenses(account_id).await?;
        summary::summarize(&expenses)
    }
}
