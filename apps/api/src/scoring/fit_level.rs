use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-tier rating shared by the fit verdict and the data-completeness confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLevel {
    Low,
    Medium,
    High,
}

impl FitLevel {
    pub const HIGH_THRESHOLD: u32 = 80;
    pub const MEDIUM_THRESHOLD: u32 = 60;

    /// `>= 80` is High, `>= 60` is Medium, anything lower is Low.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= Self::HIGH_THRESHOLD => FitLevel::High,
            s if s >= Self::MEDIUM_THRESHOLD => FitLevel::Medium,
            _ => FitLevel::Low,
        }
    }
}

impl fmt::Display for FitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FitLevel::Low => "Low",
            FitLevel::Medium => "Medium",
            FitLevel::High => "High",
        };
        f.write_str(label)
    }
}
