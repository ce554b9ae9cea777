use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::fit_level::FitLevel;
use crate::scoring::gaps::GapEntry;

/// Matched keyword chips shown before collapsing into an overflow count.
pub const MATCHED_DISPLAY_LIMIT: usize = 15;
/// Missing keywords shown, and the role-mode storage cap.
pub const MISSING_KEYWORD_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Fixed categories weighted per role.
    RoleWeighted,
    /// Arbitrary requirement list weighted per requirement.
    RequirementWeighted,
}

/// Per-category scores of the role-weighted mode, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub projects: u32,
}

/// Outcome of one analysis. Immutable once assembled.
///
/// `fit_level` rates the overall score; `confidence` rates resume data
/// completeness (`accuracy`). Both use the same Low/Medium/High scale but
/// measure different things.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub mode: ScoringMode,
    /// Role id or job profile id the resume was scored against.
    pub target_id: String,
    pub overall: u32,
    pub fit_level: FitLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    pub accuracy: u32,
    pub confidence: FitLevel,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub gaps: Vec<GapEntry>,
    /// Titles of matched requirements.
    pub strengths: Vec<String>,
    pub improvement_feedback: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Keyword chips as rendered: the leading slice plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordChips {
    pub shown: Vec<String>,
    pub overflow: usize,
}

impl KeywordChips {
    fn take(keywords: &[String], limit: usize) -> Self {
        Self {
            shown: keywords.iter().take(limit).cloned().collect(),
            overflow: keywords.len().saturating_sub(limit),
        }
    }
}

impl ScoreResult {
    pub fn matched_chips(&self) -> KeywordChips {
        KeywordChips::take(&self.matched_keywords, MATCHED_DISPLAY_LIMIT)
    }

    pub fn missing_chips(&self) -> KeywordChips {
        KeywordChips::take(&self.missing_keywords, MISSING_KEYWORD_LIMIT)
    }
}

/// Appends `value` unless it is already present. Keeps insertion order.
pub(crate) fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(matched: usize, missing: usize) -> ScoreResult {
        ScoreResult {
            mode: ScoringMode::RoleWeighted,
            target_id: "frontend-developer".to_string(),
            overall: 50,
            fit_level: FitLevel::Low,
            breakdown: None,
            accuracy: 50,
            confidence: FitLevel::Low,
            matched_keywords: (0..matched).map(|i| format!("m{i}")).collect(),
            missing_keywords: (0..missing).map(|i| format!("x{i}")).collect(),
            gaps: vec![],
            strengths: vec![],
            improvement_feedback: vec![],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_matched_chips_overflow() {
        let chips = result_with(18, 0).matched_chips();
        assert_eq!(chips.shown.len(), 15);
        assert_eq!(chips.shown[0], "m0");
        assert_eq!(chips.overflow, 3);
    }

    #[test]
    fn test_chips_without_overflow() {
        let result = result_with(4, 12);
        assert_eq!(result.matched_chips().overflow, 0);
        assert_eq!(result.missing_chips().shown.len(), 10);
        assert_eq!(result.missing_chips().overflow, 2);
    }

    #[test]
    fn test_push_unique_keeps_first_occurrence() {
        let mut list = Vec::new();
        push_unique(&mut list, "react");
        push_unique(&mut list, "css");
        push_unique(&mut list, "react");
        assert_eq!(list, vec!["react", "css"]);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let value = serde_json::to_value(result_with(1, 1)).unwrap();
        assert!(value.get("matchedKeywords").is_some());
        assert!(value.get("fitLevel").is_some());
        assert!(value.get("breakdown").is_none());
        assert_eq!(value["mode"], "role_weighted");
    }
}
