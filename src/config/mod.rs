//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates, with the `WELLBEING_PRIORITY` prefix and `__` between
//! nested keys. Every section has defaults, so an empty environment loads.
//! Scoring constants (weights, epsilons, band thresholds) are fixed in the
//! domain and cannot be configured.
//!
//! # Example
//!
//! ```no_run
//! use wellbeing_priority::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Rendering {} reports", config.report.format);
//! ```

mod error;
mod logging;
mod report;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use report::{ReportConfig, MAX_REPORT_DECIMALS};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report format and precision
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WELLBEING_PRIORITY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WELLBEING_PRIORITY__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `WELLBEING_PRIORITY__REPORT__DECIMALS=4` -> `report.decimals = 4`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WELLBEING_PRIORITY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty or malformed log filter, or
    /// report decimals above [`MAX_REPORT_DECIMALS`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.report.validate()?;
        Ok(())
    }
}
