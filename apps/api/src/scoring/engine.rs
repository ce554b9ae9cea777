//! Scoring engine — one keyword-matching core behind two weighting modes.
//!
//! Role-weighted: fixed categories (skills, experience, education, projects)
//! combined with per-role weights summing to 100. Requirement-weighted: the
//! share of requirement weight whose keywords appear in the resume.
//!
//! Both modes start from the same [`ResumeCorpus`] and report the same
//! completeness-based `accuracy`/`confidence`.

use chrono::Utc;
use tracing::debug;

use crate::models::job::{JobProfile, Requirement, RoleProfile};
use crate::models::resume::Resume;
use crate::scoring::completeness::compute_completeness_report;
use crate::scoring::error::ScoringError;
use crate::scoring::extract::{extract_resume_text, ResumeCorpus};
use crate::scoring::fit_level::FitLevel;
use crate::scoring::gaps::{analyze_gaps, improvement_feedback, GapEntry};
use crate::scoring::result::{
    push_unique, ScoreBreakdown, ScoreResult, ScoringMode, MISSING_KEYWORD_LIMIT,
};

/// Degree words that earn the higher education score.
const TECHNICAL_DEGREE_TERMS: &[&str] = &["computer", "engineering", "science", "technology"];
const TECHNICAL_DEGREE_SCORE: f64 = 80.0;
const OTHER_DEGREE_SCORE: f64 = 40.0;

const PROJECT_POINTS_EACH: usize = 30;
const NO_PROJECTS_SCORE: f64 = 20.0;

/// What a resume is scored against. The variant selects the scoring mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringTarget {
    Role { id: String, profile: RoleProfile },
    Job(JobProfile),
}

impl ScoringTarget {
    pub fn id(&self) -> &str {
        match self {
            ScoringTarget::Role { id, .. } => id,
            ScoringTarget::Job(profile) => &profile.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ScoringTarget::Role { profile, .. } => &profile.title,
            ScoringTarget::Job(profile) => &profile.title,
        }
    }

    pub fn company(&self) -> Option<&str> {
        match self {
            ScoringTarget::Role { .. } => None,
            ScoringTarget::Job(profile) => Some(&profile.company),
        }
    }

    pub fn mode(&self) -> ScoringMode {
        match self {
            ScoringTarget::Role { .. } => ScoringMode::RoleWeighted,
            ScoringTarget::Job(_) => ScoringMode::RequirementWeighted,
        }
    }
}

/// The scorer seam. Carried in `AppState` as `Arc<dyn RelevanceScorer>`.
pub trait RelevanceScorer: Send + Sync {
    fn compute_score(
        &self,
        resume: &Resume,
        target: &ScoringTarget,
    ) -> Result<ScoreResult, ScoringError>;
}

/// Deterministic case-insensitive substring scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScoringEngine;

impl RelevanceScorer for KeywordScoringEngine {
    fn compute_score(
        &self,
        resume: &Resume,
        target: &ScoringTarget,
    ) -> Result<ScoreResult, ScoringError> {
        let corpus = extract_resume_text(resume);

        let scored = match target {
            ScoringTarget::Role { id, profile } => {
                profile.validate(id)?;
                score_role(resume, &corpus, profile)
            }
            ScoringTarget::Job(profile) => {
                profile.validate()?;
                score_requirements(&corpus, &profile.requirements)
            }
        };

        let completeness = compute_completeness_report(resume);
        let overall = scored.overall.min(100);

        debug!(
            target_id = target.id(),
            overall,
            accuracy = completeness.accuracy,
            missing_fields = ?completeness.missing_fields().collect::<Vec<_>>(),
            "Scored resume"
        );

        Ok(ScoreResult {
            mode: target.mode(),
            target_id: target.id().to_string(),
            overall,
            fit_level: FitLevel::from_score(overall),
            breakdown: scored.breakdown,
            accuracy: completeness.accuracy,
            confidence: completeness.confidence,
            matched_keywords: scored.matched_keywords,
            missing_keywords: scored.missing_keywords,
            gaps: scored.gaps,
            strengths: scored.strengths,
            improvement_feedback: scored.improvement_feedback,
            timestamp: Utc::now(),
        })
    }
}

/// Mode-specific part of a result, before completeness is merged in.
#[derive(Debug, Default)]
struct ModeScore {
    overall: u32,
    breakdown: Option<ScoreBreakdown>,
    matched_keywords: Vec<String>,
    missing_keywords: Vec<String>,
    gaps: Vec<GapEntry>,
    strengths: Vec<String>,
    improvement_feedback: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Role-weighted mode
// ────────────────────────────────────────────────────────────────────────────

fn score_role(resume: &Resume, corpus: &ResumeCorpus, role: &RoleProfile) -> ModeScore {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    let skills = keyword_category_score(corpus, &role.keywords.skills, &mut matched, &mut missing);
    let experience = keyword_category_score(
        corpus,
        &role.keywords.experience,
        &mut matched,
        &mut missing,
    );
    // Tools feed the keyword lists only.
    keyword_category_score(corpus, &role.keywords.tools, &mut matched, &mut missing);

    let education = education_score(resume);
    let projects = projects_score(resume.projects.len());

    let w = role.weights;
    let weighted = skills * w.skills as f64
        + experience * w.experience as f64
        + education * w.education as f64
        + projects * w.projects as f64;
    let overall = (weighted / 100.0).round() as u32;

    missing.truncate(MISSING_KEYWORD_LIMIT);

    ModeScore {
        overall,
        breakdown: Some(ScoreBreakdown {
            skills: skills.round() as u32,
            experience: experience.round() as u32,
            education: education.round() as u32,
            projects: projects.round() as u32,
        }),
        matched_keywords: matched,
        missing_keywords: missing,
        ..ModeScore::default()
    }
}

/// Percentage of `keywords` found in the corpus; 0 for an empty list.
fn keyword_category_score(
    corpus: &ResumeCorpus,
    keywords: &[String],
    matched: &mut Vec<String>,
    missing: &mut Vec<String>,
) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }

    let mut hits = 0usize;
    for keyword in keywords {
        if corpus.matches(keyword) {
            hits += 1;
            push_unique(matched, keyword);
        } else {
            push_unique(missing, keyword);
        }
    }

    hits as f64 / keywords.len() as f64 * 100.0
}

fn education_score(resume: &Resume) -> f64 {
    let technical = resume.educations.iter().any(|edu| {
        let degree = edu.degree.to_lowercase();
        TECHNICAL_DEGREE_TERMS.iter().any(|t| degree.contains(t))
    });

    if technical {
        TECHNICAL_DEGREE_SCORE
    } else {
        OTHER_DEGREE_SCORE
    }
}

fn projects_score(project_count: usize) -> f64 {
    if project_count == 0 {
        return NO_PROJECTS_SCORE;
    }
    (project_count.saturating_mul(PROJECT_POINTS_EACH)).min(100) as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Requirement-weighted mode
// ────────────────────────────────────────────────────────────────────────────

fn score_requirements(corpus: &ResumeCorpus, requirements: &[Requirement]) -> ModeScore {
    let mut total_weight = 0u32;
    let mut matched_weight = 0u32;
    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();
    let mut strengths = Vec::new();
    let mut improvement = Vec::new();
    let mut misses: Vec<&Requirement> = Vec::new();

    for requirement in requirements {
        total_weight += requirement.weight as u32;

        if corpus.matches_any(requirement.keywords.as_slice()) {
            matched_weight += requirement.weight as u32;
            strengths.push(requirement.title.clone());
            for keyword in requirement.keywords.iter().filter(|k| corpus.matches(k)) {
                push_unique(&mut matched_keywords, keyword);
            }
        } else {
            for keyword in &requirement.keywords {
                push_unique(&mut missing_keywords, keyword);
            }
            improvement.push(improvement_feedback(requirement));
            misses.push(requirement);
        }
    }

    let overall = if total_weight > 0 {
        (matched_weight as f64 / total_weight as f64 * 100.0).round() as u32
    } else {
        0
    };

    ModeScore {
        overall,
        breakdown: None,
        matched_keywords,
        missing_keywords,
        gaps: analyze_gaps(misses),
        strengths,
        improvement_feedback: improvement,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
