//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TAX_ENGINE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working
//! configuration pointing at the bundled reference data.
//!
//! # Example
//!
//! ```no_run
//! use tax_strategy_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Rules loaded from {}", config.reference.rules_path.display());
//! ```

mod audit;
mod error;
mod reference;
mod telemetry;

pub use audit::{AuditConfig, AuditSinkKind};
pub use error::{ConfigError, ConfigValidationError};
pub use reference::ReferenceConfig;
pub use telemetry::{Environment, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Rule library and jurisdiction pack locations
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Audit sink selection
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TAX_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TAX_ENGINE__AUDIT__SINK=file` -> `audit.sink = file`
    /// - `TAX_ENGINE__REFERENCE__RULES_PATH=...` -> `reference.rules_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TAX_ENGINE")
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
    /// Returns `ConfigValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.reference.validate()?;
        self.audit.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.telemetry.is_production()
    }
}
