//! File-based Audit Sink
//!
//! Appends each audit document as one JSON line. The file is opened in
//! append mode on every write, so concurrent engines in one process never
//! truncate each other's records.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::audit::AuditDocument;
use crate::ports::{AuditSink, AuditSinkError};

/// Append-only JSON-lines audit log
#[derive(Debug)]
pub struct FileAuditSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileAuditSink {
    /// Opens (creating if needed) the audit log at `path`.
    ///
    /// Missing parent directories are created. Fails if the file cannot be
    /// opened for appending.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, AuditSinkError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AuditSinkError::Unavailable(format!("{}: {}", parent.display(), e)))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| AuditSinkError::Unavailable(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every recorded document back.
    pub async fn read_all(&self) -> Result<Vec<AuditDocument>, AuditSinkError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| AuditSinkError::IoError(e.to_string()))?;

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .map_err(|e| AuditSinkError::SerializationFailed(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl AuditSink for FileAuditSink {
    async fn log(&self, document: &AuditDocument) -> Result<(), AuditSinkError> {
        let mut line = serde_json::to_string(document)
            .map_err(|e| AuditSinkError::SerializationFailed(e.to_string()))?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| AuditSinkError::IoError(e.to_string()))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| AuditSinkError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| AuditSinkError::IoError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use tempfile::TempDir;

    fn document(calc_id: &str) -> AuditDocument {
        AuditDocument {
            calc_id: calc_id.to_string(),
            inputs_hash: "1".repeat(64),
            result_hash: "2".repeat(64),
            rule_library_version: "1.0.0".to_string(),
            engine_version: "0.1.0".to_string(),
            timestamp: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn appends_one_line_per_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("audit.jsonl");
        let sink = FileAuditSink::open(&path).await.unwrap();

        sink.log(&document("first")).await.unwrap();
        sink.log(&document("second")).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content.lines().count(), 2);

        let documents = sink.read_all().await.unwrap();
        assert_eq!(documents[0].calc_id, "first");
        assert_eq!(documents[1].calc_id, "second");
    }

    #[tokio::test]
    async fn reopening_preserves_existing_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("audit.jsonl");

        FileAuditSink::open(&path).await.unwrap().log(&document("old")).await.unwrap();
        let reopened = FileAuditSink::open(&path).await.unwrap();
        reopened.log(&document("new")).await.unwrap();

        assert_eq!(reopened.read_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("audit.jsonl");
        let sink = FileAuditSink::open(&path).await.unwrap();

        sink.log(&document("x")).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn open_fails_when_path_is_a_directory() {
        let dir = TempDir::new().unwrap();
        let result = FileAuditSink::open(dir.path()).await;
        assert!(matches!(result, Err(AuditSinkError::Unavailable(_))));
    }
}
