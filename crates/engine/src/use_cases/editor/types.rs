//! Record editor result types.

use itemforge_domain::Record;

/// Result of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Appended as a new record at `index`.
    Added { index: usize },
    /// Replaced the record at `index`.
    Updated { index: usize },
    /// The user declined to overwrite a duplicate. Nothing changed.
    Cancelled,
}

/// Result of a delete.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted { record: Record },
    /// The user declined. Nothing changed.
    Cancelled,
}
