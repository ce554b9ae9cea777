//! Gap analysis — groups unmatched requirements by category with severity and remediation hints.

use serde::{Deserialize, Serialize};

use crate::models::job::{Requirement, RequirementCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Unmatched requirements of one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GapEntry {
    pub category: RequirementCategory,
    /// Requirement titles, in requirement order.
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
    pub severity: Severity,
}

/// Static remediation hints per category, attached once per gap entry.
pub fn suggestions_for(category: RequirementCategory) -> &'static [&'static str] {
    match category {
        RequirementCategory::Skills => &[
            "Add this skill to your Featured Skills section",
            "Mention projects where you used this technology",
            "Include relevant coursework or certifications",
        ],
        RequirementCategory::Experience => &[
            "Highlight relevant work experience",
            "Include internships or freelance projects",
            "Mention volunteer work in this area",
        ],
        RequirementCategory::Education => &[
            "Add relevant degree or certification",
            "Include online courses or bootcamps",
            "Mention self-study projects",
        ],
        RequirementCategory::Certification => &[
            "Obtain industry-recognized certification",
            "Include completion certificates from online courses",
            "Add professional development activities",
        ],
        RequirementCategory::Project => &[
            "Create a project demonstrating this skill",
            "Contribute to open source projects",
            "Build a portfolio showcasing your work",
        ],
    }
}

/// Builds gap entries from unmatched requirements, preserving first-seen category order.
///
/// A new entry starts at `high` for a required miss and `medium` otherwise.
/// Any later required miss in the same category raises it to `high`; severity
/// never goes back down.
pub fn analyze_gaps<'a, I>(misses: I) -> Vec<GapEntry>
where
    I: IntoIterator<Item = &'a Requirement>,
{
    let mut gaps: Vec<GapEntry> = Vec::new();

    for requirement in misses {
        match gaps.iter_mut().find(|g| g.category == requirement.category) {
            Some(gap) => {
                gap.missing.push(requirement.title.clone());
                if requirement.required {
                    gap.severity = Severity::High;
                }
            }
            None => gaps.push(GapEntry {
                category: requirement.category,
                missing: vec![requirement.title.clone()],
                suggestions: suggestions_for(requirement.category)
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                severity: if requirement.required {
                    Severity::High
                } else {
                    Severity::Medium
                },
            }),
        }
    }

    gaps
}

/// One line of improvement feedback for an unmatched requirement.
pub fn improvement_feedback(requirement: &Requirement) -> String {
    if requirement.required {
        format!(
            "Add {} to your {} section - this is a required skill.",
            requirement.title, requirement.category
        )
    } else {
        format!(
            "Consider adding {} to strengthen your profile for this role.",
            requirement.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(title: &str, category: RequirementCategory, required: bool) -> Requirement {
        Requirement {
            id: title.to_lowercase(),
            title: title.to_string(),
            category,
            required,
            keywords: vec![title.to_lowercase()],
            weight: 5,
        }
    }

    #[test]
    fn test_misses_grouped_by_category() {
        let misses = vec![
            req("Kafka", RequirementCategory::Skills, false),
            req("3+ Years", RequirementCategory::Experience, false),
            req("Redis", RequirementCategory::Skills, false),
        ];
        let gaps = analyze_gaps(&misses);

        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].category, RequirementCategory::Skills);
        assert_eq!(gaps[0].missing, vec!["Kafka", "Redis"]);
        assert_eq!(gaps[1].category, RequirementCategory::Experience);
        assert_eq!(gaps[0].suggestions.len(), 3);
    }

    #[test]
    fn test_initial_severity_follows_required_flag() {
        let gaps = analyze_gaps(&[
            req("AWS", RequirementCategory::Skills, false),
            req("BSc", RequirementCategory::Education, true),
        ]);
        assert_eq!(gaps[0].severity, Severity::Medium);
        assert_eq!(gaps[1].severity, Severity::High);
    }

    #[test]
    fn test_required_miss_escalates_existing_gap() {
        let gaps = analyze_gaps(&[
            req("AWS", RequirementCategory::Skills, false),
            req("Rust", RequirementCategory::Skills, true),
        ]);
        assert_eq!(gaps[0].severity, Severity::High);
    }

    #[test]
    fn test_severity_never_downgrades() {
        let gaps = analyze_gaps(&[
            req("Rust", RequirementCategory::Skills, true),
            req("AWS", RequirementCategory::Skills, false),
            req("GCP", RequirementCategory::Skills, false),
        ]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].severity, Severity::High);
        assert_eq!(gaps[0].missing.len(), 3);
    }

    #[test]
    fn test_suggestions_attached_once_per_entry() {
        let gaps = analyze_gaps(&[
            req("PMP", RequirementCategory::Certification, false),
            req("CKA", RequirementCategory::Certification, false),
        ]);
        assert_eq!(
            gaps[0].suggestions,
            suggestions_for(RequirementCategory::Certification)
        );
    }

    #[test]
    fn test_feedback_wording() {
        let required = req("React.js", RequirementCategory::Skills, true);
        assert_eq!(
            improvement_feedback(&required),
            "Add React.js to your skills section - this is a required skill."
        );

        let optional = req("Cloud Services", RequirementCategory::Skills, false);
        assert_eq!(
            improvement_feedback(&optional),
            "Consider adding Cloud Services to strengthen your profile for this role."
        );
    }

    #[test]
    fn test_severity_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), r#""high""#);
    }
}
