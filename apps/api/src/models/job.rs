use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::error::ScoringError;

/// Section of a resume a requirement belongs to. Gaps are grouped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Skills,
    Experience,
    Education,
    Certification,
    Project,
}

impl RequirementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementCategory::Skills => "skills",
            RequirementCategory::Experience => "experience",
            RequirementCategory::Education => "education",
            RequirementCategory::Certification => "certification",
            RequirementCategory::Project => "project",
        }
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single job requirement. Matched when any of its keywords occurs in the resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Requirement {
    pub id: String,
    pub title: String,
    pub category: RequirementCategory,
    pub required: bool,
    pub keywords: Vec<String>,
    /// Importance on a 1–10 scale.
    pub weight: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobProfile {
    pub id: String,
    pub title: String,
    pub company: String,
    pub requirements: Vec<Requirement>,
}

impl JobProfile {
    /// Rejects profiles the requirement-weighted scorer cannot meaningfully score.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.requirements.is_empty() {
            return Err(ScoringError::MalformedProfile(format!(
                "job profile '{}' has no requirements",
                self.id
            )));
        }

        for req in &self.requirements {
            if !(1..=10).contains(&req.weight) {
                return Err(ScoringError::InvalidRequirement {
                    profile: self.id.clone(),
                    requirement: req.id.clone(),
                    reason: format!("weight {} is outside 1..=10", req.weight),
                });
            }
            validate_keywords(&req.keywords).map_err(|reason| {
                ScoringError::InvalidRequirement {
                    profile: self.id.clone(),
                    requirement: req.id.clone(),
                    reason,
                }
            })?;
        }

        Ok(())
    }
}

/// Keyword lists for a role, one per scored dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleKeywords {
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    /// Matched for keyword reporting only; tools carry no category weight.
    pub tools: Vec<String>,
}

/// Category weights for the role-weighted score. Must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoleWeights {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub projects: u32,
}

impl RoleWeights {
    /// Widened so that no combination of `u32` weights can wrap.
    pub fn total(&self) -> u64 {
        [self.skills, self.experience, self.education, self.projects]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleProfile {
    pub title: String,
    pub keywords: RoleKeywords,
    pub weights: RoleWeights,
}

impl RoleProfile {
    pub fn validate(&self, role_id: &str) -> Result<(), ScoringError> {
        let sum = self.weights.total();
        if sum != 100 {
            return Err(ScoringError::InvalidRoleWeights {
                role: role_id.to_string(),
                sum,
            });
        }

        for list in [
            &self.keywords.skills,
            &self.keywords.experience,
            &self.keywords.tools,
        ] {
            if list.iter().any(|k| k.trim().is_empty()) {
                return Err(ScoringError::MalformedProfile(format!(
                    "role '{role_id}' contains an empty keyword"
                )));
            }
        }

        Ok(())
    }
}

fn validate_keywords(keywords: &[String]) -> Result<(), String> {
    if keywords.is_empty() {
        return Err("keyword list is empty".to_string());
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err("keyword list contains an empty keyword".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(id: &str, weight: u8, keywords: &[&str]) -> Requirement {
        Requirement {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: RequirementCategory::Skills,
            required: true,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
        }
    }

    fn profile(requirements: Vec<Requirement>) -> JobProfile {
        JobProfile {
            id: "backend".to_string(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            requirements,
        }
    }

    #[test]
    fn test_profile_without_requirements_is_malformed() {
        let err = profile(vec![]).validate().unwrap_err();
        assert!(matches!(err, ScoringError::MalformedProfile(_)));
    }

    #[test]
    fn test_weight_out_of_range_rejected() {
        let err = profile(vec![requirement("rust", 0, &["rust"])])
            .validate()
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidRequirement { .. }));

        let err = profile(vec![requirement("rust", 11, &["rust"])])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("11"));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert!(profile(vec![requirement("rust", 5, &[])]).validate().is_err());
        assert!(profile(vec![requirement("rust", 5, &["rust", " "])])
            .validate()
            .is_err());
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(profile(vec![requirement("rust", 10, &["rust", "cargo"])])
            .validate()
            .is_ok());
    }

    #[test]
    fn test_role_weights_must_sum_to_100() {
        let role = RoleProfile {
            title: "Tester".to_string(),
            keywords: RoleKeywords {
                skills: vec!["qa".to_string()],
                experience: vec![],
                tools: vec![],
            },
            weights: RoleWeights {
                skills: 50,
                experience: 30,
                education: 10,
                projects: 5,
            },
        };
        match role.validate("tester") {
            Err(ScoringError::InvalidRoleWeights { role, sum }) => {
                assert_eq!(role, "tester");
                assert_eq!(sum, 95);
            }
            other => panic!("expected InvalidRoleWeights, got {other:?}"),
        }
    }

    #[test]
    fn test_category_serde_is_lowercase() {
        let json = serde_json::to_string(&RequirementCategory::Certification).unwrap();
        assert_eq!(json, r#""certification""#);
        let cat: RequirementCategory = serde_json::from_str(r#""project""#).unwrap();
        assert_eq!(cat, RequirementCategory::Project);
    }

    #[test]
    fn test_huge_role_weights_do_not_wrap() {
        // 2^32 + 100 would wrap to exactly 100 in u32 arithmetic.
        let role = RoleProfile {
            title: "Overflow".to_string(),
            keywords: RoleKeywords {
                skills: vec!["qa".to_string()],
                experience: vec![],
                tools: vec![],
            },
            weights: RoleWeights {
                skills: u32::MAX,
                experience: 101,
                education: 0,
                projects: 0,
            },
        };
        assert_eq!(role.weights.total(), u64::from(u32::MAX) + 101);
        match role.validate("overflow") {
            Err(ScoringError::InvalidRoleWeights { sum, .. }) => {
                assert_eq!(sum, 4_294_967_396);
            }
            other => panic!("expected InvalidRoleWeights, got {other:?}"),
        }
    }
}
