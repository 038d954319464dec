//! Application configuration

use application::CorrelationConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Top-level configuration for a process hosting the enrichment stage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Correlation enrichment settings
    #[serde(default)]
    pub correlation: CorrelationConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g. SPANLINK_LOGGING__JSON)
            .add_source(
                config::Environment::with_prefix("SPANLINK")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
