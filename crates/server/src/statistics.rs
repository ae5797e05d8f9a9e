//! Statistics API endpoints

use api_types::stats::ChartData;
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

/// Per-category totals for an account, ready for charting.
///
/// An account without expenses answers 404 rather than empty charts.
pub async fn visualize(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<ChartData>, ServerError> {
    let summary = state.engine.summarize_account(user_id).await?;
    let (categories, amounts) = summary.into_parts();

    Ok(Json(ChartData {
        categories,
        amounts,
    }))
}
