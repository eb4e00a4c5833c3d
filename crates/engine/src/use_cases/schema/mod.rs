//! Schema loading use case.
//!
//! Reads the schema document, runs the key-typo pass, and parses the result.
//! The typo pass is advisory: declining every correction, or failing to save
//! the corrected document, still yields a usable schema.

use std::sync::Arc;

use itemforge_domain::{apply_correction, correction_applies, find_key_corrections, Schema};

use crate::infrastructure::ports::{ConfigError, ConfirmPort, Confirmation, SchemaRepo};

/// What the typo pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaCheckReport {
    /// Corrections proposed to the user.
    pub offered: usize,
    /// Corrections accepted and applied to the in-memory document.
    pub applied: usize,
    /// Whether the corrected document was written back.
    pub saved: bool,
    /// Save failure, if the user asked to save and it did not work.
    pub save_error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoadedSchema {
    pub schema: Schema,
    pub check: SchemaCheckReport,
}

/// Use case for loading the schema at startup.
pub struct LoadSchema {
    repo: Arc<dyn SchemaRepo>,
    confirm: Arc<dyn ConfirmPort>,
}

impl LoadSchema {
    pub fn new(repo: Arc<dyn SchemaRepo>, confirm: Arc<dyn ConfirmPort>) -> Self {
        Self { repo, confirm }
    }

    /// # Errors
    ///
    /// - `Missing` / `Parse` / `Io` straight from the repository
    /// - `Invalid` when the JSON is not shaped like a schema
    pub fn execute(&self) -> Result<LoadedSchema, ConfigError> {
        let mut document = self.repo.load()?;
        let mut check = SchemaCheckReport::default();

        for correction in find_key_corrections(&document) {
            // An earlier rename in the same field may have claimed the target key.
            if !correction_applies(&document, &correction) {
                tracing::warn!(
                    path = %correction.path(),
                    suggested = correction.suggested,
                    "Possible typo not offered: target key already present"
                );
                continue;
            }
            check.offered += 1;
            let request = Confirmation::RenameSchemaKey {
                path: correction.path(),
                found: correction.found.clone(),
                suggested: correction.suggested.to_string(),
            };
            if !self.confirm.confirm(&request) {
                continue;
            }
            if apply_correction(&mut document, &correction) {
                tracing::info!(path = %correction.path(), to = correction.suggested, "Schema key corrected");
                check.applied += 1;
            }
        }

        // Never write back a document that is about to be rejected.
        let schema = Schema::from_value(document.clone()).map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })?;

        if check.applied > 0 && self.confirm.confirm(&Confirmation::SaveSchemaCorrections) {
            match self.repo.save(&document) {
                Ok(()) => check.saved = true,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to save corrected schema");
                    check.save_error = Some(e.to_string());
                }
            }
        }

        Ok(LoadedSchema { schema, check })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockConfirmPort, MockSchemaRepo, RepoError};
    use serde_json::json;

    fn repo_with(document: serde_json::Value) -> MockSchemaRepo {
        let mut repo = MockSchemaRepo::new();
        repo.expect_load()
            .times(1)
            .returning(move || Ok(document.clone()));
        repo
    }

    #[test]
    fn test_clean_schema_asks_nothing() {
        let mut repo = repo_with(json!({
            "common": {"name": {"tooltip": "Name"}},
            "weapon": {"grade": {"options": ["common", "rare"]}}
        }));
        repo.expect_save().never();
        let mut confirm = MockConfirmPort::new();
        confirm.expect_confirm().never();

        let loaded = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap();

        assert_eq!(loaded.check, SchemaCheckReport::default());
        assert!(loaded.schema.has_category("weapon"));
    }

    #[test]
    fn test_accepted_correction_is_applied_and_saved() {
        let mut repo = repo_with(json!({
            "weapon": {"grade": {"optons": ["common", "rare"], "tooltip": "Grade"}}
        }));
        repo.expect_save()
            .withf(|document| {
                document["weapon"]["grade"]["options"] == json!(["common", "rare"])
                    && document["weapon"]["grade"].get("optons").is_none()
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut confirm = MockConfirmPort::new();
        confirm.expect_confirm().times(2).returning(|_| true);

        let loaded = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap();

        assert_eq!(loaded.check.offered, 1);
        assert_eq!(loaded.check.applied, 1);
        assert!(loaded.check.saved);
        let fields = loaded.schema.fields_for("weapon").unwrap();
        assert_eq!(fields["grade"].options(), ["common", "rare"]);
    }

    #[test]
    fn test_declined_correction_keeps_document() {
        let mut repo = repo_with(json!({
            "weapon": {"grade": {"tooltp": "Grade"}}
        }));
        repo.expect_save().never();

        let mut confirm = MockConfirmPort::new();
        confirm
            .expect_confirm()
            .withf(|request| matches!(request, Confirmation::RenameSchemaKey { .. }))
            .times(1)
            .returning(|_| false);

        let loaded = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap();

        assert_eq!(loaded.check.offered, 1);
        assert_eq!(loaded.check.applied, 0);
        let fields = loaded.schema.fields_for("weapon").unwrap();
        assert_eq!(fields["grade"].tooltip(), "");
    }

    #[test]
    fn test_declined_save_still_uses_corrected_schema() {
        let mut repo = repo_with(json!({
            "weapon": {"grade": {"tooltp": "Grade"}}
        }));
        repo.expect_save().never();

        let mut confirm = MockConfirmPort::new();
        confirm
            .expect_confirm()
            .returning(|request| !matches!(request, Confirmation::SaveSchemaCorrections));

        let loaded = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap();

        assert!(!loaded.check.saved);
        let fields = loaded.schema.fields_for("weapon").unwrap();
        assert_eq!(fields["grade"].tooltip(), "Grade");
    }

    #[test]
    fn test_save_failure_is_reported_not_fatal() {
        let mut repo = repo_with(json!({
            "weapon": {"grade": {"tooltp": "Grade"}}
        }));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(RepoError::io("save_schema", "config.json", "read-only")));

        let mut confirm = MockConfirmPort::new();
        confirm.expect_confirm().returning(|_| true);

        let loaded = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap();

        assert!(!loaded.check.saved);
        assert!(loaded.check.save_error.unwrap().contains("read-only"));
    }

    #[test]
    fn test_missing_file_is_passed_through() {
        let mut repo = MockSchemaRepo::new();
        repo.expect_load().times(1).returning(|| {
            Err(ConfigError::Missing {
                path: "config.json".into(),
            })
        });
        let confirm = MockConfirmPort::new();

        let err = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
    }

    #[test]
    fn test_wrong_shape_is_invalid() {
        let repo = repo_with(json!({"weapon": {"grade": {"options": "rare"}}}));
        let confirm = MockConfirmPort::new();

        let err = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_two_typos_of_the_same_key_are_offered_once() {
        let mut repo = repo_with(json!({
            "weapon": {"grade": {"tooltp": "first", "toolip": "second"}}
        }));
        repo.expect_save().times(1).returning(|_| Ok(()));

        let mut confirm = MockConfirmPort::new();
        confirm
            .expect_confirm()
            .withf(|request| matches!(request, Confirmation::RenameSchemaKey { .. }))
            .times(1)
            .returning(|_| true);
        confirm
            .expect_confirm()
            .withf(|request| *request == Confirmation::SaveSchemaCorrections)
            .times(1)
            .returning(|_| true);

        let loaded = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap();

        assert_eq!(loaded.check.offered, 1);
        assert_eq!(loaded.check.applied, 1);
        let fields = loaded.schema.fields_for("weapon").unwrap();
        assert_eq!(fields["grade"].tooltip(), "first");
    }

    #[test]
    fn test_corrected_but_invalid_schema_is_not_saved() {
        let mut repo = repo_with(json!({
            "weapon": {
                "grade": {"tooltp": "Grade"},
                "kind": {"options": "sword"}
            }
        }));
        repo.expect_save().never();

        let mut confirm = MockConfirmPort::new();
        confirm
            .expect_confirm()
            .withf(|request| matches!(request, Confirmation::RenameSchemaKey { .. }))
            .times(1)
            .returning(|_| true);
        confirm
            .expect_confirm()
            .withf(|request| *request == Confirmation::SaveSchemaCorrections)
            .never();

        let err = LoadSchema::new(Arc::new(repo), Arc::new(confirm))
            .execute()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
