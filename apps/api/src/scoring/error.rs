use thiserror::Error;

/// Caller contract violations raised by the scoring core.
///
/// Valid inputs never fail; these cover lookups and profile shapes that would
/// otherwise degrade into a silent zero score.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown job profile: {0}")]
    UnknownJobProfile(String),

    #[error("Malformed job profile: {0}")]
    MalformedProfile(String),

    #[error("Role '{role}' weights sum to {sum}, expected 100")]
    InvalidRoleWeights { role: String, sum: u64 },

    #[error("Requirement '{requirement}' in profile '{profile}' is invalid: {reason}")]
    InvalidRequirement {
        profile: String,
        requirement: String,
        reason: String,
    },
}
