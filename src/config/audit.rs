//! Audit sink configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigValidationError;

/// Which audit sink the engine writes to
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuditSinkKind {
    /// Discard audit documents
    #[default]
    None,
    /// Keep audit documents in process memory, unbounded; development only
    Memory,
    /// Append audit documents to a JSON-lines file
    File,
}

/// Audit configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuditConfig {
    #[serde(default)]
    pub sink: AuditSinkKind,

    /// Audit log location, required for the file sink
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let has_path = self
            .path
            .as_ref()
            .is_some_and(|p| !p.as_os_str().is_empty());
        if self.sink == AuditSinkKind::File && !has_path {
            return Err(ConfigValidationError::AuditPathRequired);
        }
        Ok(())
    }
}
