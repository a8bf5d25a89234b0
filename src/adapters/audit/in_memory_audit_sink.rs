//! In-Memory Audit Sink
//!
//! Keeps audit documents in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::audit::AuditDocument;
use crate::ports::{AuditSink, AuditSinkError};

/// In-memory store of recorded audit documents
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditSink {
    documents: Arc<RwLock<Vec<AuditDocument>>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded documents, oldest first
    pub async fn documents(&self) -> Vec<AuditDocument> {
        self.documents.read().await.clone()
    }

    /// Find a document by calculation id
    pub async fn find(&self, calc_id: &str) -> Option<AuditDocument> {
        self.documents
            .read()
            .await
            .iter()
            .find(|d| d.calc_id == calc_id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Clear all stored documents (useful for tests)
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn log(&self, document: &AuditDocument) -> Result<(), AuditSinkError> {
        self.documents.write().await.push(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn document(calc_id: &str) -> AuditDocument {
        AuditDocument {
            calc_id: calc_id.to_string(),
            inputs_hash: "a".repeat(64),
            result_hash: "b".repeat(64),
            rule_library_version: "1.0.0".to_string(),
            engine_version: "0.1.0".to_string(),
            timestamp: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn records_documents_in_order() {
        let sink = InMemoryAuditSink::new();
        sink.log(&document("one")).await.unwrap();
        sink.log(&document("two")).await.unwrap();

        let ids: Vec<String> = sink.documents().await.into_iter().map(|d| d.calc_id).collect();
        assert_eq!(ids, vec!["one", "two"]);
        assert_eq!(sink.len().await, 2);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let sink = InMemoryAuditSink::new();
        let handle = sink.clone();
        handle.log(&document("shared")).await.unwrap();

        assert!(sink.find("shared").await.is_some());
        assert!(sink.find("missing").await.is_none());
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let sink = InMemoryAuditSink::new();
        sink.log(&document("x")).await.unwrap();
        sink.clear().await;
        assert!(sink.is_empty().await);
    }
}
