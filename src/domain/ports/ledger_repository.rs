//! LedgerRepository port
//!
//! Persists the activity record as a flat document, `user_data.json` by
//! default.

use std::path::{Path, PathBuf};

use crate::domain::entities::ActivityRecord;

pub trait LedgerRepository {
    /// Read the record stored at `path`. `Ok(None)` means nothing is stored yet.
    fn load(&self, path: &Path) -> Result<Option<ActivityRecord>, LedgerStoreError>;

    /// Replace whatever is stored at `path` with `record`.
    fn save(&self, record: &ActivityRecord, path: &Path) -> Result<(), LedgerStoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerStoreError {
    #[error("failed to access {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to serialize ledger: {message}")]
    Serialization { message: String },

    #[error(
        "data file malformed: {path}\n  → Fix: Repair or delete the file to start fresh\n  → Details: {message}"
    )]
    Malformed { path: PathBuf, message: String },
}

impl LedgerStoreError {
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
