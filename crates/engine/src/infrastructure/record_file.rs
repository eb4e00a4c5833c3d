//! Record list file adapter.
//!
//! Stores the whole record list as one JSON array. Loading is forgiving: a
//! missing file is an empty list, and an unreadable or malformed file is an
//! empty list plus a warning. The broken file stays on disk until the next
//! save overwrites it.

use std::path::{Path, PathBuf};

use itemforge_domain::Record;

use crate::infrastructure::json_file::{read_if_exists, write_pretty};
use crate::infrastructure::ports::{RecordLoad, RecordRepo, RepoError};

#[derive(Debug, Clone)]
pub struct JsonRecordFile {
    path: PathBuf,
}

impl JsonRecordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordRepo for JsonRecordFile {
    fn load(&self) -> RecordLoad {
        let contents = match read_if_exists(&self.path) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "No record file yet, starting empty");
                return RecordLoad::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read record file");
                return RecordLoad::degraded(format!(
                    "'{}' could not be read ({}). Starting with an empty list.",
                    self.path.display(),
                    e
                ));
            }
        };

        match serde_json::from_str::<Vec<Record>>(&contents) {
            Ok(records) => {
                tracing::debug!(path = %self.path.display(), count = records.len(), "Records loaded");
                RecordLoad::loaded(records)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Record file is corrupted");
                RecordLoad::degraded(format!(
                    "'{}' is corrupted ({}). Starting with an empty list.",
                    self.path.display(),
                    e
                ))
            }
        }
    }

    fn save(&self, records: &[Record]) -> Result<(), RepoError> {
        write_pretty("save_records", &self.path, records)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "Records saved");
        Ok(())
    }
}
