use std::sync::Arc;

use crate::catalog::Catalog;
use crate::history::HistoryStore;
use crate::live::LiveScoring;
use crate::scoring::RelevanceScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Roles and job profiles, fixed for the process lifetime.
    pub catalog: Arc<Catalog>,
    /// Pluggable scorer. Default: KeywordScoringEngine.
    pub scorer: Arc<dyn RelevanceScorer>,
    /// Postgres when DATABASE_URL is set, in-memory otherwise.
    pub history: Arc<dyn HistoryStore>,
    pub live: LiveScoring,
}
