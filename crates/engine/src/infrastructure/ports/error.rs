//! Error types for port operations.

/// Storage operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// File operation failed - includes operation name and path for tracing.
    #[error("I/O error in {operation} on {path}: {message}")]
    Io {
        operation: &'static str,
        path: String,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create an Io error with operation and path context.
    pub fn io(operation: &'static str, path: impl ToString, message: impl ToString) -> Self {
        Self::Io {
            operation,
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Schema loading errors. Every variant ends the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The schema file does not exist. No default schema is synthesized.
    #[error("Schema file '{path}' not found")]
    Missing { path: String },

    /// The schema file is not valid JSON.
    #[error("Schema file '{path}' is not valid JSON: {message}")]
    Parse {
        path: String,
        message: String,
        /// 1-based line of the error
        line: usize,
        /// 1-based column of the error, in characters
        column: usize,
        /// Literal text of the offending line, when it could be recovered
        line_text: Option<String>,
    },

    /// Valid JSON, but not shaped like a schema.
    #[error("Schema has an invalid shape: {message}")]
    Invalid { message: String },

    /// The schema file exists but could not be read.
    #[error("Schema file '{path}' could not be read: {message}")]
    Io { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_messages() {
        let err = RepoError::io("save_records", "items.json", "permission denied");
        assert_eq!(
            err.to_string(),
            "I/O error in save_records on items.json: permission denied"
        );
        assert_eq!(
            RepoError::serialization("bad").to_string(),
            "Serialization error: bad"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::Missing {
            path: "config.json".into(),
        };
        assert_eq!(err.to_string(), "Schema file 'config.json' not found");
    }
}
