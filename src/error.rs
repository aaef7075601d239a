use crate::checks::ThreatCategory;
use thiserror::Error;

/// A snapshot field failed validation. No partial result is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid snapshot field '{field}': {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Analysis failure. A check that cannot evaluate fails the whole analysis
/// rather than silently skipping, since a missing check would degrade the
/// safety score without any indication.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid pattern in {category} rules: {source}")]
    InvalidPattern {
        category: ThreatCategory,
        #[source]
        source: regex::Error,
    },
    #[error(transparent)]
    InvalidSnapshot(#[from] ValidationError),
}
