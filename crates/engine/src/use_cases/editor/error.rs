//! Record editor errors.

use crate::infrastructure::ports::RepoError;
use itemforge_domain::DomainError;

/// Errors that can occur during record editing.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Name is required")]
    MissingName,
    #[error("No record selected")]
    SelectionRequired,
    #[error("Record index {index} out of range ({len} records)")]
    IndexOutOfRange { index: usize, len: usize },
    /// Domain failure, e.g. a record that cannot be exported
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
