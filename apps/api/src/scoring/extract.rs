//! Text extraction — flattens a resume into the lowercase corpus keywords are matched against.

use crate::models::resume::Resume;

/// Lowercased, space-joined text of every non-empty resume field.
///
/// Field order is fixed: profile (name, summary, email, location), each work
/// experience (company, title, descriptions), each education (school, degree,
/// descriptions), each project (name, descriptions), skill descriptions, and
/// finally featured skill names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeCorpus(String);

impl ResumeCorpus {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn extract_resume_text(resume: &Resume) -> ResumeCorpus {
    let profile = &resume.profile;

    let fields = [
        profile.name.as_str(),
        profile.summary.as_str(),
        profile.email.as_str(),
        profile.location.as_str(),
    ]
    .into_iter()
    .chain(resume.work_experiences.iter().flat_map(|exp| {
        [exp.company.as_str(), exp.job_title.as_str()]
            .into_iter()
            .chain(exp.descriptions.iter().map(String::as_str))
    }))
    .chain(resume.educations.iter().flat_map(|edu| {
        [edu.school.as_str(), edu.degree.as_str()]
            .into_iter()
            .chain(edu.descriptions.iter().map(String::as_str))
    }))
    .chain(resume.projects.iter().flat_map(|proj| {
        std::iter::once(proj.project.as_str()).chain(proj.descriptions.iter().map(String::as_str))
    }))
    .chain(resume.skills.descriptions.iter().map(String::as_str))
    .chain(
        resume
            .skills
            .featured_skills
            .iter()
            .map(|s| s.skill.as_str()),
    );

    let text = fields
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    ResumeCorpus(text)
}
