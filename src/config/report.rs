//! Report configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::ReportFormat;

/// Largest accepted number of decimals in rendered tables.
pub const MAX_REPORT_DECIMALS: usize = 10;

/// Report rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Output format
    #[serde(default)]
    pub format: ReportFormat,

    /// Decimals for matrix and distance tables
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Render the intermediate matrices, not only the ranking
    #[serde(default = "default_include_process_tables")]
    pub include_process_tables: bool,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.decimals > MAX_REPORT_DECIMALS {
            return Err(ValidationError::DecimalsOutOfRange {
                max: MAX_REPORT_DECIMALS,
                actual: self.decimals,
            });
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            decimals: default_decimals(),
            include_process_tables: default_include_process_tables(),
        }
    }
}

fn default_decimals() -> usize {
    2
}

fn default_include_process_tables() -> bool {
    true
}
