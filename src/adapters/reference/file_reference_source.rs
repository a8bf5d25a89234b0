//! File-based Reference Data Adapter
//!
//! Reads the rule library and jurisdiction pack from JSON (`.json`) or
//! YAML (`.yaml`, `.yml`) documents on disk.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::catalog::{JurisdictionPack, RuleLibrary};
use crate::ports::{ReferenceDataError, ReferenceDataSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Result<Self, ReferenceDataError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(ReferenceDataError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reference data read from two files
#[derive(Debug, Clone)]
pub struct FileReferenceSource {
    rules_path: PathBuf,
    statepack_path: PathBuf,
}

impl FileReferenceSource {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(rules_path: P, statepack_path: Q) -> Self {
        Self {
            rules_path: rules_path.as_ref().to_path_buf(),
            statepack_path: statepack_path.as_ref().to_path_buf(),
        }
    }

    pub fn rules_path(&self) -> &Path {
        &self.rules_path
    }

    pub fn statepack_path(&self) -> &Path {
        &self.statepack_path
    }

    fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ReferenceDataError> {
        let format = DocumentFormat::from_path(path)?;
        if !path.exists() {
            return Err(ReferenceDataError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ReferenceDataError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let parse_failed = |message: String| ReferenceDataError::ParseFailed {
            path: path.to_path_buf(),
            message,
        };
        match format {
            DocumentFormat::Json => serde_json::from_str(&content).map_err(|e| parse_failed(e.to_string())),
            DocumentFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| parse_failed(e.to_string())),
        }
    }
}

impl ReferenceDataSource for FileReferenceSource {
    fn load_rule_library(&self) -> Result<RuleLibrary, ReferenceDataError> {
        let library: RuleLibrary = Self::read_document(&self.rules_path)?;
        library.validate()?;
        Ok(library)
    }

    fn load_jurisdiction_pack(&self) -> Result<JurisdictionPack, ReferenceDataError> {
        let pack: JurisdictionPack = Self::read_document(&self.statepack_path)?;
        pack.validate()?;
        Ok(pack)
    }
}
