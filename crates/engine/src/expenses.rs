//! The module contains `Expense` struct and its table.

use sea_orm::entity::prelude::*;

use crate::AccountId;

/// Identifier assigned to an expense on creation.
pub type ExpenseId = i32;

/// A single dated, categorized amount owned by one account.
///
/// The account is referenced by id only; the store owns both records.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub account_id: AccountId,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Stored exactly as received. Grouping is case-sensitive.
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Account,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            account_id: model.account_id,
            date: model.date,
            category: model.category,
            amount: model.amount,
            description: model.description,
        }
    }
}
