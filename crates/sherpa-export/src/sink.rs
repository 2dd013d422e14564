//! Artifact sinks: the single delivery side effect at the end of an export.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ExportError;

/// Delivers rendered bytes to their destination (download, response body, file).
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    async fn deliver(&self, bytes: &[u8], filename: &str, mime_type: &str)
    -> Result<(), ExportError>;
}

/// Writes artifacts into a directory, creating it on first delivery.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path an artifact named `filename` is written to.
    #[must_use]
    pub fn path_for(&self, filename: &str) -> PathBuf {
        let safe: String = filename
            .chars()
            .map(|ch| if matches!(ch, '/' | '\\') { '_' } else { ch })
            .collect();
        self.dir.join(safe)
    }
}

#[async_trait]
impl ArtifactSink for FileSink {
    async fn deliver(
        &self,
        bytes: &[u8],
        filename: &str,
        _mime_type: &str,
    ) -> Result<(), ExportError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|error| ExportError::delivery(filename, error))?;
        let path = self.path_for(filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|error| ExportError::delivery(filename, format!("{}: {error}", path.display())))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote artifact");
        Ok(())
    }
}

/// One artifact captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

/// Keeps delivered artifacts in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    deliveries: Mutex<Vec<Delivery>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, in delivery order.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ArtifactSink for MemorySink {
    async fn deliver(
        &self,
        bytes: &[u8],
        filename: &str,
        mime_type: &str,
    ) -> Result<(), ExportError> {
        let mut guard = self
            .deliveries
            .lock()
            .map_err(|_| ExportError::delivery(filename, "memory sink lock poisoned"))?;
        guard.push(Delivery {
            bytes: bytes.to_vec(),
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
        });
        Ok(())
    }
}
