use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::stats::{compute_dashboard_stats, DashboardStats};
use crate::models::history::HistoryRecord;
use crate::state::AppState;

/// GET /api/v1/history
pub async fn handle_list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryRecord>>, AppError> {
    Ok(Json(state.history.list().await?))
}

/// GET /api/v1/history/stats
pub async fn handle_history_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let history = state.history.list().await?;
    Ok(Json(compute_dashboard_stats(&history)))
}

/// DELETE /api/v1/history
pub async fn handle_clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.history.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/history/:id
pub async fn handle_delete_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.history.remove(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Analysis {id} not found")))
    }
}
