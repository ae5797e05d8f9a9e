//! Registration and login endpoints.
//!
//! No session is created: the returned `user_id` is what the client sends
//! with later requests.

use api_types::user::{Credentials, UserSession};
use axum::{Json, extract::State, http::StatusCode};

use crate::{ServerError, server::ServerState};

/// Register a new account.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<Credentials>,
) -> Result<(StatusCode, Json<UserSession>), ServerError> {
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user_id = state.engine.create_account(&username, &password).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserSession {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

/// Check credentials and hand back the account id.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<UserSession>, ServerError> {
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user_id = state.engine.authenticate(&username, &password).await?;

    Ok(Json(UserSession {
        message: "Login successful".to_string(),
        user_id,
    }))
}
