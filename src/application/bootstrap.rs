//! Composition root helpers - wire adapters into an engine from configuration.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::engine::TaxEngine;
use crate::adapters::audit::{FileAuditSink, InMemoryAuditSink, NoopAuditSink};
use crate::adapters::reference::FileReferenceSource;
use crate::config::{AppConfig, AuditConfig, AuditSinkKind};
use crate::domain::foundation::DomainError;
use crate::ports::AuditSink;

/// Builds the configured audit sink.
///
/// A file sink that cannot be opened degrades to the no-op sink; auditing
/// problems never prevent the engine from starting.
pub async fn build_audit_sink(config: &AuditConfig) -> Arc<dyn AuditSink> {
    match (config.sink, config.path.as_ref()) {
        (AuditSinkKind::None, _) => {
            debug!("No audit sink configured, audit documents will be discarded");
            Arc::new(NoopAuditSink::new())
        }
        (AuditSinkKind::Memory, _) => Arc::new(InMemoryAuditSink::new()),
        (AuditSinkKind::File, Some(path)) => match FileAuditSink::open(path).await {
            Ok(sink) => {
                info!(path = %path.display(), "Audit log opened");
                Arc::new(sink)
            }
            Err(e) => {
                warn!(error = %e, "Audit log unavailable, audit documents will be discarded");
                Arc::new(NoopAuditSink::new())
            }
        },
        (AuditSinkKind::File, None) => {
            warn!("Audit sink 'file' configured without a path, audit documents will be discarded");
            Arc::new(NoopAuditSink::new())
        }
    }
}

/// Loads reference data and builds an engine from configuration.
///
/// # Errors
/// Returns `DomainError` if the rule library or jurisdiction pack cannot
/// be loaded.
pub async fn build_engine(config: &AppConfig) -> Result<TaxEngine, DomainError> {
    let source = FileReferenceSource::new(
        &config.reference.rules_path,
        &config.reference.statepack_path,
    );
    let sink = build_audit_sink(&config.audit).await;
    Ok(TaxEngine::from_source(&source, sink)?)
}
