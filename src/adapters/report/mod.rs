//! Report renderer adapters.

mod markdown_renderer;
mod structured_renderer;

pub use markdown_renderer::{MarkdownReportRenderer, CLOSENESS_DECIMALS};
pub use structured_renderer::StructuredReportRenderer;

use crate::config::ReportConfig;
use crate::ports::{ReportFormat, ReportRenderer};

/// Selects the renderer for the configured format.
pub fn renderer_for(config: &ReportConfig) -> Box<dyn ReportRenderer> {
    match config.format {
        ReportFormat::Markdown => Box::new(MarkdownReportRenderer::from_config(config)),
        ReportFormat::Json => Box::new(StructuredReportRenderer::json()),
        ReportFormat::Yaml => Box::new(StructuredReportRenderer::yaml()),
    }
}
