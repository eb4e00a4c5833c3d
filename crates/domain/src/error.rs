//! Unified error types for the domain layer
//!
//! Provides a common error type for schema, record and form operations,
//! so adapters never have to fall back to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Value does not belong to the declared option set
    #[error("'{value}' is not an option of field '{field}'")]
    NotAnOption { field: String, value: String },

    /// Parse error (schema or record shape)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value could not be written out as JSON
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Creates a validation error for violated record invariants.
    ///
    /// Use this when a record cannot be persisted as-is:
    /// - Required fields are empty or missing
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("name is required"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an option membership error
    pub fn not_an_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotAnOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a parse error for JSON that has the wrong shape.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a serialization error for values that cannot be exported.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
