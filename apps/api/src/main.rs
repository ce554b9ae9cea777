mod catalog;
mod config;
mod db;
mod errors;
mod history;
mod live;
mod models;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::history::{HistoryStore, InMemoryHistoryStore, PgHistoryStore};
use crate::live::LiveScoring;
use crate::routes::build_router;
use crate::scoring::{KeywordScoringEngine, RelevanceScorer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Relevance API v{}", env!("CARGO_PKG_VERSION"));

    // Load role / job profile catalog
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => {
            info!("CATALOG_PATH not set, using built-in catalog");
            Catalog::builtin()?
        }
    };

    // Initialize analysis history
    let history: Arc<dyn HistoryStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            Arc::new(PgHistoryStore::connect(pool).await?)
        }
        None => {
            warn!("DATABASE_URL not set, analysis history is kept in memory");
            Arc::new(InMemoryHistoryStore::new())
        }
    };

    let scorer: Arc<dyn RelevanceScorer> = Arc::new(KeywordScoringEngine);
    let live = LiveScoring::new(scorer.clone(), config.score_delay, config.session_ttl);
    info!(
        "Live scoring debounce: {:?}, session TTL: {:?}",
        config.score_delay, config.session_ttl
    );

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        scorer,
        history,
        live,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
