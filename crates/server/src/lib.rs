use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{router, run_with_listener};

mod accounts;
mod expenses;
mod server;
mod statistics;

pub mod types {
    pub mod user {
        pub use api_types::user::{Credentials, UserSession};
    }

    pub mod expense {
        pub use api_types::expense::{
            AmountValue, ExpenseCreated, ExpenseListResponse, ExpenseNew, ExpenseUpdate,
            ExpenseView,
        };
    }

    pub mod stats {
        pub use api_types::stats::ChartData;
    }
}

/// Failure of a handler, rendered as `{"error": "..."}`.
pub enum ServerError {
    Engine(EngineError),
    /// Malformed request caught before reaching the engine.
    Generic(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Status and client-facing text for an engine failure.
///
/// Storage and hashing failures are logged here and never described to the
/// caller.
fn engine_error_parts(err: EngineError) -> (StatusCode, String) {
    match err {
        EngineError::MissingField(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        EngineError::InvalidCredentials => (StatusCode::UNAUTHORIZED, err.to_string()),
        EngineError::KeyNotFound(_) | EngineError::NoData => {
            (StatusCode::NOT_FOUND, err.to_string())
        }
        EngineError::ExistingKey(_) => (StatusCode::CONFLICT, "Username already exists".to_string()),
        EngineError::InvalidAmount(_) | EngineError::InvalidDate(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        EngineError::Credential(reason) => {
            tracing::error!("credential error: {reason}");
            internal()
        }
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            internal()
        }
        EngineError::InvalidSummary(reason) => {
            tracing::error!("summary error: {reason}");
            internal()
        }
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_string(),
    )
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => engine_error_parts(err),
            ServerError::Generic(message) => (StatusCode::BAD_REQUEST, message),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err)
    }
}
