use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::live::LiveStatus;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveScoreRequest {
    pub resume: Resume,
    pub role_id: String,
}

/// PUT /api/v1/live/:session_id
///
/// Replaces any pending score for the session. Unknown roles fail immediately.
pub async fn handle_schedule(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<LiveScoreRequest>,
) -> Result<(StatusCode, Json<LiveStatus>), AppError> {
    let target = state.catalog.role(&request.role_id)?;
    let status = state.live.schedule(&session_id, request.resume, target);
    Ok((StatusCode::ACCEPTED, Json(status)))
}

/// GET /api/v1/live/:session_id
pub async fn handle_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<LiveStatus>, AppError> {
    state
        .live
        .status(&session_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Live session {session_id} not found")))
}

/// DELETE /api/v1/live/:session_id
pub async fn handle_cancel(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.live.cancel(&session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Live session {session_id} not found")))
    }
}
