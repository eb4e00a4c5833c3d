//! Editor session.
//!
//! Couples the active category, its form and the record editor the way a
//! front end drives them: pick a category, fill the form, submit; or pick a
//! record from the list, edit it, submit.

mod error;

use itemforge_domain::{FieldSpec, FieldViewModel, FormModel, Record, Schema};

use crate::use_cases::editor::{DeleteOutcome, RecordEditor, UpsertOutcome};

pub use error::SessionError;

pub struct EditorSession {
    schema: Schema,
    form: FormModel,
    editor: RecordEditor,
}

impl EditorSession {
    /// Start a session on the schema's first category.
    pub fn new(schema: Schema, editor: RecordEditor) -> Result<Self, SessionError> {
        let first = schema
            .categories()
            .next()
            .ok_or(SessionError::NoCategories)?
            .to_string();
        let form = FormModel::build(&schema, &first)?;
        Ok(Self {
            schema,
            form,
            editor,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn editor(&self) -> &RecordEditor {
        &self.editor
    }

    pub fn list_categories(&self) -> Vec<String> {
        self.schema.categories().map(str::to_string).collect()
    }

    /// Effective fields of a category, common fields first.
    pub fn fields_for_category(&self, category: &str) -> Result<Vec<(String, FieldSpec)>, SessionError> {
        self.schema
            .fields_for(category)
            .map(|fields| fields.into_iter().collect())
            .ok_or_else(|| SessionError::UnknownCategory(category.to_string()))
    }

    pub fn active_category(&self) -> &str {
        self.form.category()
    }

    pub fn field_views(&self) -> Vec<FieldViewModel> {
        self.form.views()
    }

    /// Rebuild the form for another category. Any selection is dropped.
    pub fn switch_category(&mut self, category: &str) -> Result<(), SessionError> {
        if !self.schema.has_category(category) {
            return Err(SessionError::UnknownCategory(category.to_string()));
        }
        self.form = FormModel::build(&self.schema, category)?;
        self.editor.clear_selection();
        tracing::debug!(category, "Switched category");
        Ok(())
    }

    pub fn list_records(&self) -> Vec<String> {
        self.editor.labels()
    }

    pub fn record_detail(&self, index: usize) -> Result<Vec<(String, String)>, SessionError> {
        Ok(self.editor.detail(index)?)
    }

    /// Show a stored record in the form and select it for editing.
    ///
    /// A record whose `type` is not a schema category cannot be shown, so it
    /// is not selected either.
    pub fn select_record(&mut self, index: usize) -> Result<(), SessionError> {
        let record = self.editor.record(index)?.clone();
        if !self.form.populate(&self.schema, &record) {
            let category = record.category().unwrap_or_default().to_string();
            return Err(SessionError::UnknownCategory(category));
        }
        self.editor.select(index)?;
        Ok(())
    }

    /// Reset the form and drop the selection.
    pub fn clear(&mut self) {
        self.form.clear();
        self.editor.clear_selection();
    }

    pub fn set_text(&mut self, key: &str, text: impl Into<String>) -> Result<(), SessionError> {
        Ok(self.form.set_text(key, text)?)
    }

    pub fn select_option(&mut self, key: &str, option: &str) -> Result<(), SessionError> {
        Ok(self.form.select(key, option)?)
    }

    /// What the form would store right now.
    pub fn preview(&self) -> Record {
        self.form.read()
    }

    /// Read the form and upsert it. The form is cleared unless the user
    /// declined an overwrite.
    pub fn submit(&mut self) -> Result<UpsertOutcome, SessionError> {
        let outcome = self.editor.upsert(self.form.read())?;
        if outcome != UpsertOutcome::Cancelled {
            self.form.clear();
        }
        Ok(outcome)
    }

    pub fn delete_selected(&mut self) -> Result<DeleteOutcome, SessionError> {
        let outcome = self.editor.delete_selected()?;
        if matches!(outcome, DeleteOutcome::Deleted { .. }) {
            self.form.clear();
        }
        Ok(outcome)
    }

    pub fn latest(&self) -> Option<&Record> {
        self.editor.latest()
    }

    pub fn selected_as_json(&self) -> Result<String, SessionError> {
        Ok(self.editor.selected_as_json()?)
    }

    pub fn selected_as_text(&self) -> Result<String, SessionError> {
        Ok(self.editor.selected_as_text()?)
    }

    pub fn latest_as_json(&self) -> Result<Option<String>, SessionError> {
        Ok(self.editor.latest_as_json()?)
    }
}
