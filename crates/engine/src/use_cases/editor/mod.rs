//! Record editor use cases.
//!
//! Owns the in-memory record list and the current selection, and persists
//! the full list through [`RecordRepo`] after every mutation.
//!
//! # Selection
//!
//! - `Idle` (no selection): `upsert` looks for an existing record with the
//!   same `(name, type)` and asks before overwriting it.
//! - `Selected(index)`: `upsert` overwrites that index directly, without a
//!   duplicate search.
//!
//! Every successful upsert or delete returns the editor to `Idle`.

mod error;
mod types;

use std::sync::Arc;

use itemforge_domain::Record;

use crate::infrastructure::ports::{ConfirmPort, Confirmation, RecordRepo};

pub use error::EditorError;
pub use types::{DeleteOutcome, UpsertOutcome};

const UNNAMED: &str = "(unnamed)";

pub struct RecordEditor {
    records: Vec<Record>,
    selection: Option<usize>,
    repo: Arc<dyn RecordRepo>,
    confirm: Arc<dyn ConfirmPort>,
}

impl RecordEditor {
    pub fn new(
        records: Vec<Record>,
        repo: Arc<dyn RecordRepo>,
        confirm: Arc<dyn ConfirmPort>,
    ) -> Self {
        Self {
            records,
            selection: None,
            repo,
            confirm,
        }
    }

    /// Load the stored list. A degraded load yields an empty editor plus the
    /// warning to show the user.
    pub fn load(repo: Arc<dyn RecordRepo>, confirm: Arc<dyn ConfirmPort>) -> (Self, Option<String>) {
        let loaded = repo.load();
        tracing::info!(count = loaded.records.len(), "Record editor ready");
        (Self::new(loaded.records, repo, confirm), loaded.warning)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn record(&self, index: usize) -> Result<&Record, EditorError> {
        self.records.get(index).ok_or(EditorError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Enter `Selected(index)`.
    pub fn select(&mut self, index: usize) -> Result<&Record, EditorError> {
        self.record(index)?;
        self.selection = Some(index);
        self.record(index)
    }

    /// Return to `Idle`.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The selected record.
    ///
    /// # Errors
    ///
    /// `SelectionRequired` when idle, `IndexOutOfRange` when the selection is stale.
    pub fn selected(&self) -> Result<&Record, EditorError> {
        let index = self.selection.ok_or(EditorError::SelectionRequired)?;
        self.record(index)
    }

    /// Last record in insertion order.
    pub fn latest(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Display labels, one per record, in store order.
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(Record::label).collect()
    }

    /// `(key, value)` rows of one record, without `type`.
    pub fn detail(&self, index: usize) -> Result<Vec<(String, String)>, EditorError> {
        Ok(self.record(index)?.detail_rows())
    }

    /// Add a record or replace an existing one.
    ///
    /// # Errors
    ///
    /// - `MissingName` when the record has no non-blank name (nothing changes)
    /// - `IndexOutOfRange` when the selection is stale
    /// - `Repo` when persisting fails (the in-memory list is left as it was)
    pub fn upsert(&mut self, record: Record) -> Result<UpsertOutcome, EditorError> {
        if record.validate().is_err() {
            return Err(EditorError::MissingName);
        }

        let mut next = self.records.clone();
        let outcome = match self.selection {
            Some(index) => {
                let len = next.len();
                let slot = next
                    .get_mut(index)
                    .ok_or(EditorError::IndexOutOfRange { index, len })?;
                *slot = record;
                UpsertOutcome::Updated { index }
            }
            None => {
                let name = record.name().unwrap_or_default().to_string();
                let category = record.category().unwrap_or_default().to_string();
                let existing = next.iter().position(|r| r.has_identity(&name, &category));

                match existing {
                    Some(index) => {
                        let request = Confirmation::OverwriteDuplicate { name, category };
                        if !self.confirm.confirm(&request) {
                            tracing::debug!(index, "Overwrite of duplicate record declined");
                            return Ok(UpsertOutcome::Cancelled);
                        }
                        next[index] = record;
                        UpsertOutcome::Updated { index }
                    }
                    None => {
                        next.push(record);
                        UpsertOutcome::Added {
                            index: next.len() - 1,
                        }
                    }
                }
            }
        };

        self.persist(next)?;
        self.selection = None;
        tracing::info!(outcome = ?outcome, "Record saved");
        Ok(outcome)
    }

    /// Delete the selected record after confirmation.
    ///
    /// # Errors
    ///
    /// - `SelectionRequired` when idle (nothing changes)
    /// - `IndexOutOfRange` when the selection is stale
    /// - `Repo` when persisting fails (the in-memory list is left as it was)
    pub fn delete_selected(&mut self) -> Result<DeleteOutcome, EditorError> {
        let index = self.selection.ok_or(EditorError::SelectionRequired)?;
        let label = self
            .record(index)?
            .name()
            .unwrap_or(UNNAMED)
            .to_string();

        if !self.confirm.confirm(&Confirmation::DeleteRecord { label }) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let mut next = self.records.clone();
        let record = next.remove(index);
        self.persist(next)?;
        self.selection = None;
        tracing::info!(index, "Record deleted");
        Ok(DeleteOutcome::Deleted { record })
    }

    /// Selected record as pretty JSON.
    pub fn selected_as_json(&self) -> Result<String, EditorError> {
        Ok(self.selected()?.to_pretty_json()?)
    }

    /// Selected record as `key: value` lines.
    pub fn selected_as_text(&self) -> Result<String, EditorError> {
        Ok(self.selected()?.to_plain_text())
    }

    /// Latest record as pretty JSON, `None` when the store is empty.
    pub fn latest_as_json(&self) -> Result<Option<String>, EditorError> {
        self.latest()
            .map(|record| record.to_pretty_json().map_err(EditorError::from))
            .transpose()
    }

    fn persist(&mut self, next: Vec<Record>) -> Result<(), EditorError> {
        self.repo.save(&next)?;
        self.records = next;
        Ok(())
    }
}
