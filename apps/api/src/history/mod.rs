//! Analysis history — an append-only, caller-managed log of score results.
//!
//! The log is not validated or bounded here; callers decide what to keep.

pub mod handlers;
pub mod postgres;
pub mod stats;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::history::HistoryRecord;

pub use postgres::PgHistoryStore;

/// Storage seam for analysis history. Carried in `AppState` as `Arc<dyn HistoryStore>`.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, record: HistoryRecord) -> Result<()>;

    /// All records, oldest first.
    async fn list(&self) -> Result<Vec<HistoryRecord>>;

    /// Returns false when no record had that id.
    async fn remove(&self, id: Uuid) -> Result<bool>;

    async fn clear(&self) -> Result<()>;
}

/// Process-local history, used when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    records: RwLock<Vec<HistoryRecord>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, record: HistoryRecord) -> Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    async fn clear(&self) -> Result<()> {
        self.records.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;

    use crate::models::history::HistoryRecord;
    use crate::scoring::fit_level::FitLevel;
    use crate::scoring::result::{ScoreResult, ScoringMode};

    pub fn record(job_title: &str, overall: u32) -> HistoryRecord {
        HistoryRecord {
            id: uuid::Uuid::new_v4(),
            job_title: job_title.to_string(),
            job_company: Some("Acme".to_string()),
            result: ScoreResult {
                mode: ScoringMode::RequirementWeighted,
                target_id: job_title.to_lowercase(),
                overall,
                fit_level: FitLevel::from_score(overall),
                breakdown: None,
                accuracy: 100,
                confidence: FitLevel::High,
                matched_keywords: vec![],
                missing_keywords: vec![],
                gaps: vec![],
                strengths: vec![],
                improvement_feedback: vec![],
                timestamp: Utc::now(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = InMemoryHistoryStore::new();
        store.append(record("First", 10)).await.unwrap();
        store.append(record("Second", 20)).await.unwrap();

        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.job_title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_remove_by_id() {
        let store = InMemoryHistoryStore::new();
        let keep = record("Keep", 50);
        let gone = record("Gone", 60);
        let gone_id = gone.id;
        store.append(keep).await.unwrap();
        store.append(gone).await.unwrap();

        assert!(store.remove(gone_id).await.unwrap());
        assert!(!store.remove(gone_id).await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_empties_log() {
        let store = InMemoryHistoryStore::new();
        store.append(record("One", 1)).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_record_flattens_result_fields() {
        let value = serde_json::to_value(record("Data Scientist", 72)).unwrap();
        assert_eq!(value["jobTitle"], "Data Scientist");
        assert_eq!(value["jobCompany"], "Acme");
        assert_eq!(value["overall"], 72);
        assert_eq!(value["fitLevel"], "Medium");
    }
}
