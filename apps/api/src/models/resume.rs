use serde::{Deserialize, Serialize};

/// A structured resume as produced by the resume builder.
///
/// Every field defaults to empty so partially parsed resumes deserialize
/// cleanly; an absent field and an empty string are treated the same way
/// by the scoring core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub profile: Profile,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Skills,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub summary: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub company: String,
    pub job_title: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    /// Project name. The resume builder calls this field `project`.
    #[serde(alias = "name")]
    pub project: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub descriptions: Vec<String>,
    pub featured_skills: Vec<FeaturedSkill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeaturedSkill {
    pub skill: String,
    pub level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_builder_json_deserializes() {
        let json = r#"{
            "profile": {"name": "Ada Lovelace", "email": "ada@example.com"},
            "workExperiences": [
                {"company": "Analytical Engines", "jobTitle": "Programmer", "descriptions": ["Wrote the first program"]}
            ],
            "projects": [{"project": "Note G", "descriptions": []}],
            "skills": {"descriptions": [], "featuredSkills": [{"skill": "Mathematics", "level": 5}]}
        }"#;

        let resume: Resume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.profile.name, "Ada Lovelace");
        assert!(resume.profile.summary.is_empty());
        assert_eq!(resume.work_experiences[0].job_title, "Programmer");
        assert!(resume.educations.is_empty());
        assert_eq!(resume.projects[0].project, "Note G");
        assert_eq!(resume.skills.featured_skills[0].level, 5);
    }

    #[test]
    fn test_empty_object_is_empty_resume() {
        let resume: Resume = serde_json::from_str("{}").unwrap();
        assert_eq!(resume, Resume::default());
    }
}
