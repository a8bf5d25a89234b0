//! Reference data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigValidationError;

/// Locations of the rule library and jurisdiction pack
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    /// Rule library document (JSON or YAML)
    #[serde(default = "default_rules_path")]
    pub rules_path: PathBuf,

    /// Jurisdiction pack document (JSON or YAML)
    #[serde(default = "default_statepack_path")]
    pub statepack_path: PathBuf,
}

impl ReferenceConfig {
    /// Validate reference data configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.rules_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::MissingRequired("reference.rules_path"));
        }
        if self.statepack_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::MissingRequired("reference.statepack_path"));
        }
        Ok(())
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            rules_path: default_rules_path(),
            statepack_path: default_statepack_path(),
        }
    }
}

fn default_rules_path() -> PathBuf {
    PathBuf::from("data/rules.bundle.v1.json")
}

fn default_statepack_path() -> PathBuf {
    PathBuf::from("data/statepacks/CA.statepack.json")
}
