//! Schema file adapter.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::infrastructure::json_file::{read_if_exists, write_pretty};
use crate::infrastructure::ports::{ConfigError, RepoError, SchemaRepo};

/// Schema stored as a single JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonSchemaFile {
    path: PathBuf,
}

impl JsonSchemaFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// serde_json reports byte columns; the error report counts characters.
fn char_column(line_text: &str, byte_column: usize) -> usize {
    if byte_column == 0 {
        return 0;
    }
    let mut end = (byte_column - 1).min(line_text.len());
    while !line_text.is_char_boundary(end) {
        end -= 1;
    }
    line_text[..end].chars().count() + 1
}

impl SchemaRepo for JsonSchemaFile {
    fn load(&self) -> Result<Value, ConfigError> {
        let contents = read_if_exists(&self.path)
            .map_err(|e| ConfigError::Io {
                path: self.display_path(),
                message: e.to_string(),
            })?
            .ok_or_else(|| ConfigError::Missing {
                path: self.display_path(),
            })?;

        let document = serde_json::from_str(&contents).map_err(|e| {
            let line = e.line();
            let raw_line = line
                .checked_sub(1)
                .and_then(|index| contents.lines().nth(index));
            let column = raw_line.map_or(e.column(), |text| char_column(text, e.column()));
            ConfigError::Parse {
                path: self.display_path(),
                message: e.to_string(),
                line,
                column,
                line_text: raw_line.map(|text| text.trim_end().to_string()),
            }
        })?;

        tracing::debug!(path = %self.path.display(), "Schema file loaded");
        Ok(document)
    }

    fn save(&self, document: &Value) -> Result<(), RepoError> {
        write_pretty("save_schema", &self.path, document)?;
        tracing::info!(path = %self.path.display(), "Schema file updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_missing_file_is_config_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonSchemaFile::new(dir.path().join("config.json"));

        let err = repo.load().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
    }

    #[test]
    fn test_parse_error_reports_line_column_and_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            "{\n  \"weapon\": {\n    \"grade\": { \"tooltip\": \"x\" }\n    \"name\": {}\n  }\n}\n",
        )
        .unwrap();

        let err = JsonSchemaFile::new(&path).load().unwrap_err();
        match err {
            ConfigError::Parse {
                line,
                column,
                line_text,
                ..
            } => {
                assert_eq!(line, 4);
                assert!(column > 0);
                assert_eq!(line_text.as_deref(), Some("    \"name\": {}"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_column_counts_characters() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{\n  \"공통\" {}\n}\n").unwrap();

        let err = JsonSchemaFile::new(&path).load().unwrap_err();
        match err {
            ConfigError::Parse {
                line,
                column,
                line_text,
                ..
            } => {
                assert_eq!(line, 2);
                let text = line_text.unwrap();
                assert_eq!(text.chars().nth(column - 1), Some('{'));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_char_column_conversion() {
        assert_eq!(char_column("  \"공통\" {}", 12), 8);
        assert_eq!(char_column("abc", 2), 2);
        assert_eq!(char_column("abc", 0), 0);
        // Past the end of the line, or inside a multi-byte character.
        assert_eq!(char_column("공", 9), 2);
        assert_eq!(char_column("공", 2), 1);
    }

    #[test]
    fn test_save_then_load_keeps_key_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonSchemaFile::new(dir.path().join("config.json"));
        let document = json!({
            "weapon": { "zeta": {}, "alpha": { "options": ["b", "a"] } },
            "common": { "name": {} }
        });

        repo.save(&document).unwrap();
        let loaded = repo.load().unwrap();

        let categories: Vec<&str> = loaded.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["weapon", "common"]);
        assert_eq!(loaded, document);
    }
}
