//! Adapters - Implementations of port interfaces.
//!
//! - `dataset` - File (JSON/YAML) and in-memory dataset sources
//! - `report` - Markdown and structured (JSON/YAML) report renderers

pub mod dataset;
pub mod report;

pub use dataset::{DatasetFormat, FileDatasetSource, InMemoryDatasetSource};
pub use report::{renderer_for, MarkdownReportRenderer, StructuredReportRenderer};
