//! Persistence error types.

use thiserror::Error;

use crate::adapter::AdapterError;

/// Failure while saving state through the persistence adapter.
///
/// Save failures do not roll back in-memory state: the edit already happened
/// locally, so callers surface the error and let the user retry the save.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write to storage: {0}")]
    Write(#[from] AdapterError),

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}
