//! Reference Data Port - rule library and jurisdiction pack loading.
//!
//! Loaded once when the engine is built. A failure here is fatal to
//! construction.

use std::path::PathBuf;

use crate::domain::catalog::{JurisdictionPack, RuleLibrary};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors that can occur while loading reference data
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("Reference data not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error reading {path}: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("Unsupported reference data format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    #[error("Invalid reference data: {0}")]
    Invalid(#[from] ValidationError),
}

/// Port for loading read-only reference data
pub trait ReferenceDataSource: Send + Sync {
    /// Load and validate the strategy rule library.
    fn load_rule_library(&self) -> Result<RuleLibrary, ReferenceDataError>;

    /// Load and validate the jurisdiction pack.
    fn load_jurisdiction_pack(&self) -> Result<JurisdictionPack, ReferenceDataError>;
}

impl From<ReferenceDataError> for DomainError {
    fn from(err: ReferenceDataError) -> Self {
        let code = match &err {
            ReferenceDataError::Invalid(_) | ReferenceDataError::ParseFailed { .. } => {
                ErrorCode::InvalidReferenceData
            }
            _ => ErrorCode::ReferenceDataUnavailable,
        };
        DomainError::new(code, err.to_string())
    }
}
