//! Audit Sink Port - destination for reproducibility records.
//!
//! The engine hands each audit document to the sink exactly once and never
//! waits on the outcome. Delivery is at-most-once; implementations should
//! not retry.

use async_trait::async_trait;

use crate::domain::audit::AuditDocument;

/// Errors that can occur while recording an audit document
#[derive(Debug, thiserror::Error)]
pub enum AuditSinkError {
    #[error("Audit sink unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize audit document: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting audit documents
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Record one audit document.
    ///
    /// # Errors
    /// Returns `AuditSinkError` if the document could not be recorded. The
    /// engine logs the failure and continues.
    async fn log(&self, document: &AuditDocument) -> Result<(), AuditSinkError>;
}
