//! Editor session errors.

use itemforge_domain::DomainError;

use crate::use_cases::editor::EditorError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Schema defines no categories besides 'common'")]
    NoCategories,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Form error: {0}")]
    Form(#[from] DomainError),
    #[error(transparent)]
    Editor(#[from] EditorError),
}
