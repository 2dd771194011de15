//! Scoring error types.

use thiserror::Error;

use crate::domain::dataset::Metric;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that abort a scoring run before any derived data is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// One or more required metric columns are absent from the dataset schema.
    #[error("Required columns missing: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}

impl ScoringError {
    /// Creates a missing-columns error from the absent metrics.
    pub fn missing_columns(metrics: &[Metric]) -> Self {
        ScoringError::MissingColumns {
            missing: metrics.iter().map(|m| m.column_name().to_string()).collect(),
        }
    }

    /// Names of the missing columns.
    pub fn missing(&self) -> &[String] {
        match self {
            ScoringError::MissingColumns { missing } => missing,
        }
    }
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        let missing = err.missing().join(",");
        DomainError::new(ErrorCode::SchemaMismatch, err.to_string())
            .with_detail("missing_columns", missing)
    }
}
