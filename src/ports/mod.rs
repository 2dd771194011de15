//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DatasetSource` - Loads the tabular input to score
//! - `ReportRenderer` - Presents a completed scoring run

mod dataset_source;
mod report_renderer;

pub use dataset_source::{DatasetSource, IngestError};
pub use report_renderer::{RenderError, ReportFormat, ReportRenderer};
