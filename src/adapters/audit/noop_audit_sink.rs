//! No-op Audit Sink
//!
//! Accepts every document and records nothing. Used when auditing is
//! disabled or the configured sink could not be opened.

use async_trait::async_trait;
use tracing::trace;

use crate::domain::audit::AuditDocument;
use crate::ports::{AuditSink, AuditSinkError};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl NoopAuditSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditSink for NoopAuditSink {
    async fn log(&self, document: &AuditDocument) -> Result<(), AuditSinkError> {
        trace!(calc_id = %document.calc_id, "Audit document discarded");
        Ok(())
    }
}
