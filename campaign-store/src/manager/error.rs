use crate::storage::StorageError;
use thiserror::Error;

/// Data manager errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored payload could not be decoded; there is no fallback to seed data
    #[error("Corrupted payload under {key}: {source}")]
    Corrupted {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported schema version {version} under {key}")]
    UnsupportedVersion { key: &'static str, version: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
