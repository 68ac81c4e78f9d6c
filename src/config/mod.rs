//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for secrets like `SPORTS_API_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use fanboard::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

mod logging;

pub use crate::adapter::outbound::indexer::IndexerConfig;
pub use crate::adapter::outbound::sports::SportsApiConfig;
pub use logging::LoggingConfig;

use crate::domain::Sport;
use crate::error::{ConfigError, Result};

/// Environment variable holding the sports API key.
pub const SPORTS_API_KEY_ENV: &str = "SPORTS_API_KEY";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sports_api: SportsApiConfig,
    #[serde(default)]
    pub indexer: IndexerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from a TOML file, then apply environment overrides and validate.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    // API key comes from the environment only, never from the file.
    fn apply_env(&mut self) {
        self.sports_api.api_key = std::env::var(SPORTS_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
    }

    /// Parse a TOML document without touching the environment.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.indexer.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "indexer.base_url",
            }
            .into());
        }
        if url::Url::parse(&self.indexer.base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "indexer.base_url",
                reason: format!("'{}' is not an absolute URL", self.indexer.base_url),
            }
            .into());
        }

        for (slug, host) in &self.sports_api.hosts {
            if slug.parse::<Sport>().is_err() {
                return Err(ConfigError::InvalidValue {
                    field: "sports_api.hosts",
                    reason: format!("unknown sport '{slug}'"),
                }
                .into());
            }
            if host.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "sports_api.hosts",
                }
                .into());
            }
        }

        if self.sports_api.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sports_api.retry_max_attempts",
                reason: "must be at least 1".into(),
            }
            .into());
        }

        if !logging::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "'{}' is not one of {}",
                    self.logging.format,
                    logging::FORMATS.join(", ")
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
