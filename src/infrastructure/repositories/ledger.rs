//! JSON Ledger Repository
//!
//! Stores the activity record as a flat JSON object, e.g.
//!
//! ```json
//! {
//!   "beef_kg": 2.0,
//!   "car_miles": 100.0
//! }
//! ```
//!
//! No version header and no nesting. Writes go through a temp file in the
//! target directory that is renamed over the target.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::entities::ActivityRecord;
use crate::domain::ports::{LedgerRepository, LedgerStoreError};

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "user_data.json";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLedgerRepository;

impl JsonLedgerRepository {
    pub fn new() -> Self {
        Self
    }
}

impl LedgerRepository for JsonLedgerRepository {
    fn load(&self, path: &Path) -> Result<Option<ActivityRecord>, LedgerStoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no data file");
                return Ok(None);
            }
            Err(e) => return Err(LedgerStoreError::io(path, e)),
        };

        let quantities: BTreeMap<String, f64> =
            serde_json::from_str(&content).map_err(|e| LedgerStoreError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), activities = quantities.len(), "read data file");
        Ok(Some(quantities.into_iter().collect()))
    }

    fn save(&self, record: &ActivityRecord, path: &Path) -> Result<(), LedgerStoreError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| LedgerStoreError::io(path, e))?;

        let quantities: BTreeMap<&str, f64> = record.iter().collect();
        let mut content = serde_json::to_string_pretty(&quantities).map_err(|e| {
            LedgerStoreError::Serialization {
                message: e.to_string(),
            }
        })?;
        content.push('\n');

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LedgerStoreError::io(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| LedgerStoreError::io(path, e))?;
        tmp.persist(path)
            .map_err(|e| LedgerStoreError::io(path, e.error))?;

        tracing::debug!(path = %path.display(), activities = record.len(), "wrote data file");
        Ok(())
    }
}
