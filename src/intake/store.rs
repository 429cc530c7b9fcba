use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::domain::SubmissionRecord;

/// Storage abstraction over the submission log so the agent can be exercised
/// against in-memory doubles.
pub trait SubmissionStore: Send + Sync {
    /// Append a record; on success it is the last element of `load`.
    fn append(&self, record: SubmissionRecord) -> Result<(), StoreError>;

    /// The full stored sequence, oldest first. Read problems degrade to an
    /// empty sequence rather than propagating.
    fn load(&self) -> Vec<SubmissionRecord>;
}

/// Failures on the store's write path. Read failures on the list path are
/// soft and never reach callers.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read submission store: {0}")]
    Read(#[source] std::io::Error),
    #[error("submission store is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("failed to write submission store: {0}")]
    Write(#[source] std::io::Error),
}

/// File-backed store holding the whole submission log as one JSON array.
///
/// Every append re-reads the file and rewrites it in full, so the document on
/// disk is always the complete sequence. There is no locking: concurrent
/// writers can lose appends, and an interrupted write can leave a partial
/// document. Callers needing stronger guarantees should supply a different
/// `SubmissionStore`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read(&self.path).map_err(StoreError::Read)?;
        let records = serde_json::from_slice(&raw)?;
        Ok(records)
    }
}

impl SubmissionStore for JsonFileStore {
    fn append(&self, record: SubmissionRecord) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        records.push(record);

        let payload = serde_json::to_vec_pretty(&records)?;
        fs::write(&self.path, payload).map_err(StoreError::Write)
    }

    fn load(&self) -> Vec<SubmissionRecord> {
        match self.read_all() {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "submission store unreadable, listing empty"
                );
                Vec::new()
            }
        }
    }
}
