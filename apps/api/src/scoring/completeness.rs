use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;
use crate::scoring::fit_level::FitLevel;

/// One completeness check and whether the resume passes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletenessCheck {
    pub field: String,
    pub present: bool,
}

/// Data completeness of a resume, independent of any target role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletenessReport {
    /// Share of passed checks, 0–100.
    pub accuracy: u32,
    pub confidence: FitLevel,
    pub checks: Vec<CompletenessCheck>,
}

impl CompletenessReport {
    pub fn missing_fields(&self) -> impl Iterator<Item = &str> {
        self.checks
            .iter()
            .filter(|c| !c.present)
            .map(|c| c.field.as_str())
    }
}

pub fn compute_completeness_report(resume: &Resume) -> CompletenessReport {
    let has_skill = !resume.skills.descriptions.is_empty()
        || resume
            .skills
            .featured_skills
            .iter()
            .any(|s| !s.skill.is_empty());

    let checks: Vec<CompletenessCheck> = [
        ("name", !resume.profile.name.is_empty()),
        ("email", !resume.profile.email.is_empty()),
        ("summary", !resume.profile.summary.is_empty()),
        ("work_experience", !resume.work_experiences.is_empty()),
        ("education", !resume.educations.is_empty()),
        ("skills", has_skill),
    ]
    .into_iter()
    .map(|(field, present)| CompletenessCheck {
        field: field.to_string(),
        present,
    })
    .collect();

    let passed = checks.iter().filter(|c| c.present).count();
    let accuracy = ((passed as f64 / checks.len() as f64) * 100.0).round() as u32;

    CompletenessReport {
        accuracy,
        confidence: FitLevel::from_score(accuracy),
        checks,
    }
}
