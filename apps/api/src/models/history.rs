use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::{ScoreResult, ScoringTarget};

/// A stored analysis: the score result plus the job it was run against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: Uuid,
    pub job_title: String,
    pub job_company: Option<String>,
    #[serde(flatten)]
    pub result: ScoreResult,
}

impl HistoryRecord {
    pub fn new(result: ScoreResult, target: &ScoringTarget) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_title: target.title().to_string(),
            job_company: target.company().map(str::to_string),
            result,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct HistoryRow {
    pub id: Uuid,
    pub job_title: String,
    pub job_company: Option<String>,
    pub result: Json<ScoreResult>,
}

impl From<HistoryRow> for HistoryRecord {
    fn from(row: HistoryRow) -> Self {
        Self {
            id: row.id,
            job_title: row.job_title,
            job_company: row.job_company,
            result: row.result.0,
        }
    }
}
