//! Role and job profile catalog, loaded once at startup.
//!
//! The built-in catalog is compiled in from `catalog/default.json`;
//! `CATALOG_PATH` points at a replacement file with the same shape.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::job::{JobProfile, RoleProfile};
use crate::scoring::{ScoringError, ScoringTarget};

const BUILTIN_CATALOG: &str = include_str!("../catalog/default.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    roles: BTreeMap<String, RoleProfile>,
    job_profiles: Vec<JobProfile>,
}

/// Listing entry for a role.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoleSummary {
    pub id: String,
    pub title: String,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("Built-in catalog is invalid")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("Invalid catalog file '{}'", path.display()))?;
        info!(
            "Loaded catalog from {} ({} roles, {} job profiles)",
            path.display(),
            catalog.roles.len(),
            catalog.job_profiles.len()
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(raw).context("Catalog JSON is malformed")?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        for (id, role) in &self.roles {
            role.validate(id)?;
        }

        let mut seen = HashSet::new();
        for profile in &self.job_profiles {
            if !seen.insert(profile.id.as_str()) {
                bail!("Duplicate job profile id '{}'", profile.id);
            }
            profile.validate()?;
        }

        Ok(())
    }

    /// Resolves a role id into a role-weighted scoring target.
    pub fn role(&self, id: &str) -> Result<ScoringTarget, ScoringError> {
        self.roles
            .get(id)
            .map(|profile| ScoringTarget::Role {
                id: id.to_string(),
                profile: profile.clone(),
            })
            .ok_or_else(|| ScoringError::UnknownRole(id.to_string()))
    }

    /// Resolves a job profile id into a requirement-weighted scoring target.
    pub fn job_profile(&self, id: &str) -> Result<ScoringTarget, ScoringError> {
        self.job_profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(ScoringTarget::Job)
            .ok_or_else(|| ScoringError::UnknownJobProfile(id.to_string()))
    }

    pub fn roles(&self) -> Vec<RoleSummary> {
        self.roles
            .iter()
            .map(|(id, role)| RoleSummary {
                id: id.clone(),
                title: role.title.clone(),
            })
            .collect()
    }

    pub fn job_profiles(&self) -> &[JobProfile] {
        &self.job_profiles
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.roles().len(), 5);
        assert_eq!(catalog.job_profiles().len(), 3);
        assert!(catalog.roles().iter().any(|r| r.id == "devops-engineer"));
    }

    #[test]
    fn test_role_lookup() {
        let catalog = Catalog::builtin().unwrap();
        let target = catalog.role("data-scientist").unwrap();
        assert_eq!(target.title(), "Data Scientist");

        let err = catalog.role("astronaut").unwrap_err();
        assert_eq!(err, ScoringError::UnknownRole("astronaut".to_string()));
    }

    #[test]
    fn test_job_profile_lookup() {
        let catalog = Catalog::builtin().unwrap();
        let target = catalog.job_profile("fullstack-dev").unwrap();
        assert_eq!(target.company(), Some("StartupXYZ"));
        assert!(matches!(
            catalog.job_profile("nope"),
            Err(ScoringError::UnknownJobProfile(_))
        ));
    }

    #[test]
    fn test_bad_weights_rejected_at_load() {
        let raw = r#"{
            "roles": {
                "qa": {
                    "title": "QA",
                    "keywords": {"skills": ["selenium"], "experience": [], "tools": []},
                    "weights": {"skills": 60, "experience": 30, "education": 15, "projects": 10}
                }
            },
            "job_profiles": []
        }"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(format!("{err:#}").contains("sum to 115"));
    }

    #[test]
    fn test_duplicate_profile_ids_rejected() {
        let profile = r#"{"id": "x", "title": "X", "company": "C", "requirements": [
            {"id": "r", "title": "R", "category": "skills", "required": true, "keywords": ["r"], "weight": 1}
        ]}"#;
        let raw = format!(r#"{{"roles": {{}}, "job_profiles": [{profile}, {profile}]}}"#);
        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("Duplicate job profile id 'x'"));
    }

    #[test]
    fn test_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_CATALOG.as_bytes()).unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.roles().len(), 5);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
