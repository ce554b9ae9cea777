use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// History goes to Postgres when set.
    pub database_url: Option<String>,
    /// Catalog JSON replacing the built-in roles and job profiles.
    pub catalog_path: Option<PathBuf>,
    /// Debounce delay for live scoring sessions.
    pub score_delay: Duration,
    /// Live sessions untouched for this long are evicted.
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            database_url: optional_env("DATABASE_URL"),
            catalog_path: optional_env("CATALOG_PATH").map(PathBuf::from),
            score_delay: Duration::from_millis(
                std::env::var("SCORE_DELAY_MS")
                    .unwrap_or_else(|_| "800".to_string())
                    .parse::<u64>()
                    .context("SCORE_DELAY_MS must be a whole number of milliseconds")?,
            ),
            session_ttl: Duration::from_secs(
                std::env::var("SESSION_TTL_SECS")
                    .unwrap_or_else(|_| "1800".to_string())
                    .parse::<u64>()
                    .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

/// Unset and empty are the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
