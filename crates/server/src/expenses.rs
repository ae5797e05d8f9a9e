//! Expenses API endpoints

use api_types::{
    Message,
    expense::{
        AmountValue, ExpenseCreated, ExpenseListResponse, ExpenseNew, ExpenseUpdate, ExpenseView,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn map_amount(amount: AmountValue) -> engine::AmountInput {
    match amount {
        AmountValue::Number(value) => engine::AmountInput::Number(value),
        AmountValue::Text(text) => engine::AmountInput::Text(text),
    }
}

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        date: expense.date,
        category: expense.category,
        amount: expense.amount,
        description: expense.description,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ServerError> {
    let id = state
        .engine
        .create_expense(engine::ExpenseNewCmd {
            account_id: payload.user_id,
            date: payload.date,
            category: payload.category,
            amount: payload.amount.map(map_amount),
            description: payload.description,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ExpenseCreated {
            message: "Expense added successfully".to_string(),
            id,
        }),
    ))
}

/// `GET /expenses/{user_id}`
pub async fn list(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<ExpenseListResponse>, ServerError> {
    let expenses = state
        .engine
        .list_expenses(user_id)
        .await?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(ExpenseListResponse { expenses }))
}

/// `PUT /expenses/{expense_id}`
pub async fn update(
    State(state): State<ServerState>,
    Path(expense_id): Path<i32>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<Message>, ServerError> {
    if payload.is_empty() {
        // An unknown id answers 404 even without a body.
        state.engine.expense(expense_id).await?;
        return Err(ServerError::Generic("No data provided".to_string()));
    }

    let patch = engine::ExpensePatch {
        date: payload.date,
        category: payload.category,
        amount: payload.amount.map(map_amount),
        description: payload.description,
    };
    state.engine.update_expense(expense_id, patch).await?;

    Ok(Json(Message::new("Expense updated successfully")))
}

/// `DELETE /expenses/{expense_id}`
pub async fn delete(
    State(state): State<ServerState>,
    Path(expense_id): Path<i32>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_expense(expense_id).await?;
    Ok(Json(Message::new("Expense deleted successfully")))
}
