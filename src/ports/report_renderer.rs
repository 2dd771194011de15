//! Report Renderer Port - scoring run presentation interface.
//!
//! Renderers turn a completed `ScoringRun` into a text document. They never
//! recompute scores; everything shown comes from the run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scoring::ScoringRun;

/// Port for rendering a scoring run.
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn ReportRenderer = get_renderer(ReportFormat::Markdown);
/// let document = renderer.render(&run)?;
/// ```
pub trait ReportRenderer: Send + Sync {
    /// Render the run as a complete document.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the run cannot be serialized or written.
    fn render(&self, run: &ScoringRun) -> Result<String, RenderError>;

    /// The format this renderer produces.
    fn format(&self) -> ReportFormat;
}

/// Report output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Markdown tables for reading.
    #[default]
    Markdown,

    /// Pretty-printed JSON document.
    Json,

    /// YAML document.
    Yaml,
}

impl ReportFormat {
    /// Returns the lowercase name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors that can occur during report rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Run could not be serialized.
    #[error("Report serialization failed: {0}")]
    Serialization(String),

    /// Writing the document failed.
    #[error("Report write failed: {0}")]
    Io(String),

    /// Requested format name is not recognised.
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}

impl From<std::fmt::Error> for RenderError {
    fn from(err: std::fmt::Error) -> Self {
        RenderError::Io(err.to_string())
    }
}

impl From<RenderError> for DomainError {
    fn from(err: RenderError) -> Self {
        DomainError::new(ErrorCode::RenderFailed, err.to_string())
    }
}
