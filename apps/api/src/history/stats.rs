use serde::Serialize;

use crate::models::history::HistoryRecord;
use crate::scoring::fit_level::FitLevel;

const RECENT_LIMIT: usize = 5;

/// Aggregates shown on the analysis dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_analyses: usize,
    /// Rounded mean of `overall`; 0 for an empty history.
    pub average_score: u32,
    pub high_fit_count: usize,
    /// Up to five most recent records, newest first.
    pub recent_analyses: Vec<HistoryRecord>,
}

pub fn compute_dashboard_stats(history: &[HistoryRecord]) -> DashboardStats {
    let total_analyses = history.len();

    let average_score = if total_analyses > 0 {
        let sum: u64 = history.iter().map(|r| r.result.overall as u64).sum();
        (sum as f64 / total_analyses as f64).round() as u32
    } else {
        0
    };

    let high_fit_count = history
        .iter()
        .filter(|r| r.result.fit_level == FitLevel::High)
        .count();

    let recent_analyses = history.iter().rev().take(RECENT_LIMIT).cloned().collect();

    DashboardStats {
        total_analyses,
        average_score,
        high_fit_count,
        recent_analyses,
    }
}
