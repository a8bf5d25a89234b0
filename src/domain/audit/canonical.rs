//! # Canonical Serialization
//!
//! `CanonicalBytes` is the only input accepted by the audit digests. It is
//! produced by serializing a value to a JSON tree and emitting that tree in
//! RFC 8785 (JCS) form: object keys sorted, compact separators, shortest
//! round-trip number formatting.
//!
//! Two values that serialize to equal JSON trees always produce identical
//! bytes, whatever the insertion order of their maps. This is what makes
//! `inputs_hash` independent of how a profile's deductions were collected.
//!
//! Monetary amounts are `f64` throughout the engine and are hashed as JSON
//! numbers. Non-finite floats serialize as `null`.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failure to produce canonical bytes.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

impl From<CanonicalizationError> for DomainError {
    fn from(err: CanonicalizationError) -> Self {
        DomainError::new(ErrorCode::CanonicalizationFailed, err.to_string())
    }
}

/// Bytes produced exclusively by JCS canonicalization.
///
/// The inner buffer is private; [`CanonicalBytes::new`] is the only
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalizes any serializable value.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let canonical = serde_jcs::to_string(&value)?;
        Ok(Self(canonical.into_bytes()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lowercase hex SHA-256 of canonical bytes.
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    Sha256::digest(data.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Canonicalizes `obj` and returns its SHA-256 hex digest.
pub fn digest_of(obj: &impl Serialize) -> Result<String, CanonicalizationError> {
    Ok(sha256_hex(&CanonicalBytes::new(obj)?))
}
