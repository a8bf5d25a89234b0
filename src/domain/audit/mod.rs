//! Audit module - canonical hashing and reproducibility records.

mod canonical;
mod recorder;

pub use canonical::{digest_of, sha256_hex, CanonicalBytes, CanonicalizationError};
pub use recorder::{AuditDocument, AuditRecorder, AuditVerification};
