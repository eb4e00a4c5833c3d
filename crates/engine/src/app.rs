//! Application state and composition.

use std::sync::Arc;

use crate::api::StatusMessage;
use crate::infrastructure::{
    config::EngineConfig,
    ports::{ConfigError, ConfirmPort, RecordRepo, SchemaRepo},
    record_file::JsonRecordFile,
    schema_file::JsonSchemaFile,
};
use crate::use_cases::{EditorSession, LoadSchema, RecordEditor, SchemaCheckReport, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Main application state.
///
/// One editing session plus the startup notices a front end should show once.
pub struct App {
    pub session: EditorSession,
    pub schema_check: SchemaCheckReport,
    pub records_warning: Option<String>,
}

impl App {
    /// Wire the JSON file adapters from `config`.
    pub fn bootstrap(config: &EngineConfig, confirm: Arc<dyn ConfirmPort>) -> Result<Self, AppError> {
        tracing::info!(
            schema = %config.schema_path.display(),
            records = %config.records_path.display(),
            "Bootstrapping editor"
        );
        Self::with_ports(
            Arc::new(JsonSchemaFile::new(&config.schema_path)),
            Arc::new(JsonRecordFile::new(&config.records_path)),
            confirm,
        )
    }

    /// The schema is loaded (and checked) before records; a schema error
    /// stops here without touching the records file.
    pub fn with_ports(
        schema_repo: Arc<dyn SchemaRepo>,
        record_repo: Arc<dyn RecordRepo>,
        confirm: Arc<dyn ConfirmPort>,
    ) -> Result<Self, AppError> {
        let loaded = LoadSchema::new(schema_repo, confirm.clone()).execute()?;
        let (editor, records_warning) = RecordEditor::load(record_repo, confirm);
        let session = EditorSession::new(loaded.schema, editor)?;

        Ok(Self {
            session,
            schema_check: loaded.check,
            records_warning,
        })
    }

    /// Messages to show right after startup.
    pub fn startup_messages(&self) -> Vec<StatusMessage> {
        let mut messages = Vec::new();
        if let Some(message) = StatusMessage::from_schema_check(&self.schema_check) {
            messages.push(message);
        }
        if let Some(warning) = &self.records_warning {
            messages.push(StatusMessage::from_records_warning(warning));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use crate::infrastructure::ports::{FixedAnswer, MockRecordRepo, MockSchemaRepo};
    use crate::use_cases::UpsertOutcome;
    use itemforge_domain::{Record, NAME_KEY};
    use serde_json::{json, Value};

    const SCHEMA: &str = r#"{
  "common": {
    "name": {"tooltip": "Unique item name"},
    "grade": {"options": ["common", "rare", "legendary"]}
  },
  "weapon": {
    "attack_power": {"tooltip": "Base damage"}
  }
}"#;

    fn config_in(dir: &Path) -> EngineConfig {
        EngineConfig {
            schema_path: dir.join("config.json"),
            records_path: dir.join("items.json"),
        }
    }

    fn stored(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_add_sword_end_to_end() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        fs::write(&config.schema_path, SCHEMA).unwrap();

        let mut app = App::bootstrap(&config, Arc::new(FixedAnswer(true))).unwrap();
        assert!(app.startup_messages().is_empty());

        app.session.set_text(NAME_KEY, "Sword").unwrap();
        app.session.set_text("attack_power", "10").unwrap();
        app.session.set_text("grade", "").unwrap();
        assert_eq!(app.session.submit().unwrap(), UpsertOutcome::Added { index: 0 });

        let expected = Record::new("weapon")
            .with(NAME_KEY, "Sword")
            .with("grade", "common")
            .with("attack_power", "10");
        assert_eq!(app.session.latest(), Some(&expected));
        assert_eq!(
            stored(&config.records_path),
            json!([{"type": "weapon", "name": "Sword", "grade": "common", "attack_power": "10"}])
        );

        // A fresh session sees the same store.
        let reopened = App::bootstrap(&config, Arc::new(FixedAnswer(true))).unwrap();
        assert_eq!(reopened.session.latest(), Some(&expected));
    }

    #[test]
    fn test_malformed_records_file_is_replaced_on_first_save() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        fs::write(&config.schema_path, SCHEMA).unwrap();
        fs::write(&config.records_path, "[{\"type\": \"weapon\", ").unwrap();

        let mut app = App::bootstrap(&config, Arc::new(FixedAnswer(true))).unwrap();
        assert!(app.session.list_records().is_empty());
        assert_eq!(app.startup_messages().len(), 1);
        // Nothing is written until the first mutation.
        assert_eq!(
            fs::read_to_string(&config.records_path).unwrap(),
            "[{\"type\": \"weapon\", "
        );

        app.session.set_text(NAME_KEY, "Axe").unwrap();
        app.session.submit().unwrap();

        let records = stored(&config.records_path);
        assert_eq!(records.as_array().map(Vec::len), Some(1));
        assert_eq!(records[0]["name"], "Axe");
    }

    #[test]
    fn test_typo_in_schema_is_corrected_and_saved() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        fs::write(
            &config.schema_path,
            r#"{"weapon": {"grade": {"optoins": ["common", "rare"]}}}"#,
        )
        .unwrap();

        let app = App::bootstrap(&config, Arc::new(FixedAnswer(true))).unwrap();

        assert!(app.schema_check.saved);
        assert_eq!(
            stored(&config.schema_path),
            json!({"weapon": {"grade": {"options": ["common", "rare"]}}})
        );
        let views = app.session.field_views();
        assert!(views[0].is_choice());
        assert_eq!(app.startup_messages().len(), 1);
    }

    #[test]
    fn test_missing_schema_stops_before_records() {
        let mut schema_repo = MockSchemaRepo::new();
        schema_repo.expect_load().times(1).returning(|| {
            Err(ConfigError::Missing {
                path: "config.json".into(),
            })
        });
        let mut record_repo = MockRecordRepo::new();
        record_repo.expect_load().never();

        let result = App::with_ports(
            Arc::new(schema_repo),
            Arc::new(record_repo),
            Arc::new(FixedAnswer(false)),
        );

        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::Missing { .. }))
        ));
    }

    #[test]
    fn test_schema_without_categories_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        fs::write(&config.schema_path, r#"{"common": {"name": {}}}"#).unwrap();

        let result = App::bootstrap(&config, Arc::new(FixedAnswer(true)));
        assert!(matches!(
            result,
            Err(AppError::Session(SessionError::NoCategories))
        ));
    }
}
