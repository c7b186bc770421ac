//! Runtime validation of loaded configuration.

use crate::schema::Config;
use stats_common::{Result, StatsError};
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        let url = Url::parse(&config.backend.base_url).map_err(|e| {
            StatsError::validation_field(
                format!("invalid backend URL '{}': {e}", config.backend.base_url),
                "backend.base_url",
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(StatsError::validation_field(
                format!("unsupported URL scheme '{}'", url.scheme()),
                "backend.base_url",
            ));
        }

        if config.backend.timeout_secs == 0 {
            return Err(StatsError::validation_field(
                "timeout must be greater than 0",
                "backend.timeout_secs",
            ));
        }

        if config.logging.level.trim().is_empty() {
            return Err(StatsError::validation_field(
                "log level cannot be empty",
                "logging.level",
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}
