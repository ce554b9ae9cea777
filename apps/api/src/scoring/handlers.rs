//! Axum route handlers for catalog lookups and one-shot analyses.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::RoleSummary;
use crate::errors::AppError;
use crate::models::history::HistoryRecord;
use crate::models::job::JobProfile;
use crate::models::resume::Resume;
use crate::scoring::result::KeywordChips;
use crate::scoring::{ScoreResult, ScoringTarget};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAnalysisRequest {
    pub resume: Resume,
    pub role_id: String,
}

/// Either a catalog profile id or an inline profile, not both.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysisRequest {
    pub resume: Resume,
    pub job_profile_id: Option<String>,
    pub job_profile: Option<JobProfile>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub result: ScoreResult,
    pub matched_chips: KeywordChips,
    pub missing_chips: KeywordChips,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_id: Option<Uuid>,
}

impl AnalysisResponse {
    fn new(result: ScoreResult, history_id: Option<Uuid>) -> Self {
        Self {
            matched_chips: result.matched_chips(),
            missing_chips: result.missing_chips(),
            result,
            history_id,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleSummary>> {
    Json(state.catalog.roles())
}

/// GET /api/v1/catalog/job-profiles
pub async fn handle_list_job_profiles(State(state): State<AppState>) -> Json<Vec<JobProfile>> {
    Json(state.catalog.job_profiles().to_vec())
}

/// POST /api/v1/analysis/role
///
/// Role-weighted score with per-category breakdown. Not recorded in history.
pub async fn handle_role_analysis(
    State(state): State<AppState>,
    Json(request): Json<RoleAnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let target = state.catalog.role(&request.role_id)?;
    let result = state.scorer.compute_score(&request.resume, &target)?;

    Ok(Json(AnalysisResponse::new(result, None)))
}

/// POST /api/v1/analysis/job
///
/// Requirement-weighted score with gaps and feedback. The result is appended
/// to the analysis history.
pub async fn handle_job_analysis(
    State(state): State<AppState>,
    Json(request): Json<JobAnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let target = match (request.job_profile_id, request.job_profile) {
        (Some(id), None) => state.catalog.job_profile(&id)?,
        (None, Some(profile)) => ScoringTarget::Job(profile),
        _ => {
            return Err(AppError::Validation(
                "provide exactly one of jobProfileId or jobProfile".to_string(),
            ))
        }
    };

    let result = state.scorer.compute_score(&request.resume, &target)?;

    let record = HistoryRecord::new(result.clone(), &target);
    let history_id = record.id;
    state.history.append(record).await?;

    info!(
        "Analysis {history_id}: {} scored {} ({})",
        target.id(),
        result.overall,
        result.fit_level
    );

    Ok(Json(AnalysisResponse::new(result, Some(history_id))))
}
