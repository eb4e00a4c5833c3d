//! Storage port traits for the schema and record files.

use itemforge_domain::Record;
use serde_json::Value;

use super::error::{ConfigError, RepoError};

// =============================================================================
// Schema Storage
// =============================================================================

/// Raw access to the schema document.
///
/// The document is handed out as untyped JSON so that key corrections can be
/// applied and written back before it is parsed into a `Schema`.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaRepo: Send + Sync {
    fn load(&self) -> Result<Value, ConfigError>;
    fn save(&self, document: &Value) -> Result<(), RepoError>;
}

// =============================================================================
// Record Storage
// =============================================================================

/// Result of loading the record list. Loading never fails the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordLoad {
    pub records: Vec<Record>,
    /// Set when the stored list was unreadable and an empty list was used instead
    pub warning: Option<String>,
}

impl RecordLoad {
    pub fn loaded(records: Vec<Record>) -> Self {
        Self {
            records,
            warning: None,
        }
    }

    pub fn degraded(warning: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            warning: Some(warning.into()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait RecordRepo: Send + Sync {
    fn load(&self) -> RecordLoad;
    /// Overwrite the whole stored list.
    fn save(&self, records: &[Record]) -> Result<(), RepoError>;
}
