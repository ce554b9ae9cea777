//! Resume relevance scoring.
//!
//! Pipeline: extract (flatten resume to a corpus) → match keywords → score
//! (role- or requirement-weighted) → analyze gaps on misses → assemble the
//! result. Completeness is computed from the raw resume on the side.
//! Everything here is synchronous and pure apart from the result timestamp.

pub mod completeness;
pub mod engine;
pub mod error;
pub mod extract;
pub mod fit_level;
pub mod gaps;
pub mod handlers;
pub mod matcher;
pub mod result;

pub use engine::{KeywordScoringEngine, RelevanceScorer, ScoringTarget};
pub use error::ScoringError;
pub use result::ScoreResult;
