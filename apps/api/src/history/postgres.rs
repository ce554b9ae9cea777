use anyhow::Result;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::history::HistoryStore;
use crate::models::history::{HistoryRecord, HistoryRow};

/// Postgres-backed history. Results are stored whole as JSONB.
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    /// Wraps the pool and makes sure the history table exists.
    pub async fn connect(pool: PgPool) -> Result<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS analysis_history (
                id          UUID PRIMARY KEY,
                job_title   TEXT NOT NULL,
                job_company TEXT,
                result      JSONB NOT NULL,
                created_at  TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        info!("analysis_history table ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn append(&self, record: HistoryRecord) -> Result<()> {
        // Append-only: rows are inserted and deleted, never updated.
        sqlx::query(
            "INSERT INTO analysis_history (id, job_title, job_company, result, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.id)
        .bind(&record.job_title)
        .bind(&record.job_company)
        .bind(Json(&record.result))
        .bind(record.result.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryRecord>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT id, job_title, job_company, result \
             FROM analysis_history ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(HistoryRecord::from).collect())
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM analysis_history WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM analysis_history")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
