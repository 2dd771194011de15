//! Dataset Source Port - tabular input loading interface.
//!
//! The application depends on this trait to obtain a dataset; adapters
//! (file, in-memory) provide the implementation. Sources only produce a
//! rectangular table. Schema checks against the required metric columns
//! happen in the scoring domain.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::dataset::Dataset;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for loading a dataset to score.
///
/// # Contract
///
/// Implementations must:
/// - Preserve row order (it defines alternative identifiers U1..UN)
/// - Preserve column names exactly (matching is case-sensitive)
/// - Leave cell values uncoerced
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Load the full dataset.
    ///
    /// # Errors
    ///
    /// Returns `IngestError` when the input cannot be read or is not a
    /// rectangular table.
    async fn load(&self) -> Result<Dataset, IngestError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Errors that can occur while loading a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// Source does not exist.
    #[error("Dataset not found: {0}")]
    NotFound(String),

    /// Source exists but could not be read.
    #[error("Failed to read dataset: {0}")]
    Io(String),

    /// Content is not valid for the declared format.
    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    /// Format cannot be determined or is not supported.
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    /// Rows and columns do not line up.
    #[error("Dataset is not rectangular: {0}")]
    NotRectangular(String),
}

impl IngestError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an unsupported format error.
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat(message.into())
    }
}

impl From<IngestError> for DomainError {
    fn from(err: IngestError) -> Self {
        let code = match err {
            IngestError::NotFound(_) => ErrorCode::DatasetNotFound,
            IngestError::Io(_) => ErrorCode::DatasetUnreadable,
            IngestError::Parse(_) | IngestError::NotRectangular(_) => ErrorCode::InvalidFormat,
            IngestError::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
        };

        DomainError::new(code, err.to_string())
    }
}
