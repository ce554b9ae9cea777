pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::history::handlers as history;
use crate::live::handlers as live;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/catalog/roles", get(scoring::handle_list_roles))
        .route(
            "/api/v1/catalog/job-profiles",
            get(scoring::handle_list_job_profiles),
        )
        // One-shot analysis
        .route("/api/v1/analysis/role", post(scoring::handle_role_analysis))
        .route("/api/v1/analysis/job", post(scoring::handle_job_analysis))
        // Analysis history
        .route(
            "/api/v1/history",
            get(history::handle_list_history).delete(history::handle_clear_history),
        )
        .route("/api/v1/history/stats", get(history::handle_history_stats))
        .route("/api/v1/history/:id", delete(history::handle_delete_history))
        // Debounced live scoring
        .route(
            "/api/v1/live/:session_id",
            put(live::handle_schedule)
                .get(live::handle_status)
                .delete(live::handle_cancel),
        )
        .with_state(state)
}
