//! Form model - schema-driven, UI-agnostic form state
//!
//! A [`FormModel`] is generated from a [`Schema`] for one active category.
//! Every effective field becomes a [`FormField`] carrying a
//! [`FieldViewModel`] (what to render) and the field's current input.
//!
//! # Field kinds
//!
//! - **Free**: a single free-text slot.
//! - **Choice**: a free-text slot plus a suggested value drawn from the
//!   field's options. Non-blank free text always wins over the suggestion.
//!
//! Rendering is left to the presentation layer; nothing here knows about widgets.

use serde::Serialize;

use crate::error::DomainError;
use crate::record::{FieldValue, Record, TYPE_KEY};
use crate::schema::{FieldSpec, Schema};

const CHOICE_PLACEHOLDER: &str = "Direct input (optional)";

/// How a field accepts input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldKind {
    Free,
    Choice { options: Vec<String> },
}

/// Everything a renderer needs to draw one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViewModel {
    pub key: String,
    pub label: String,
    pub tooltip: String,
    pub placeholder: String,
    pub kind: FieldKind,
}

impl FieldViewModel {
    /// Pure mapping from a schema field to its view model.
    pub fn from_spec(key: &str, spec: &FieldSpec) -> Self {
        let (kind, placeholder) = if spec.has_options() {
            (
                FieldKind::Choice {
                    options: spec.options().to_vec(),
                },
                CHOICE_PLACEHOLDER.to_string(),
            )
        } else {
            (FieldKind::Free, format!("Enter {}", key))
        };

        Self {
            key: key.to_string(),
            label: format!("{}:", key),
            tooltip: spec.tooltip().to_string(),
            placeholder,
            kind,
        }
    }

    pub fn options(&self) -> &[String] {
        match &self.kind {
            FieldKind::Free => &[],
            FieldKind::Choice { options } => options,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice { .. })
    }
}

/// One field of the form with its current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    view: FieldViewModel,
    text: String,
    suggested: Option<String>,
}

impl FormField {
    fn new(view: FieldViewModel) -> Self {
        let mut field = Self {
            view,
            text: String::new(),
            suggested: None,
        };
        field.reset();
        field
    }

    pub fn view(&self) -> &FieldViewModel {
        &self.view
    }

    pub fn key(&self) -> &str {
        &self.view.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggested(&self) -> Option<&str> {
        self.suggested.as_deref()
    }

    /// Empty free text; a choice field falls back to its first option, the way
    /// a freshly shown dropdown does.
    fn reset(&mut self) {
        self.text.clear();
        self.suggested = self.view.options().first().cloned();
    }

    /// Apply the precedence rule: trimmed free text, then suggestion, then nothing.
    pub fn value(&self) -> Option<String> {
        let text = self.text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
        self.suggested
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn fill(&mut self, value: Option<&FieldValue>) {
        let Some(value) = value else {
            self.text.clear();
            self.suggested = None;
            return;
        };

        let shown = value.to_string();
        if self.view.options().iter().any(|option| *option == shown) {
            self.suggested = Some(shown);
            self.text.clear();
        } else {
            self.text = shown;
            self.suggested = None;
        }
    }
}

/// Editable form for one active category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    category: String,
    fields: Vec<FormField>,
}

impl FormModel {
    /// Generate the form for `category` from the schema's effective fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` when the schema has no such category.
    pub fn build(schema: &Schema, category: &str) -> Result<Self, DomainError> {
        let effective = schema
            .fields_for(category)
            .ok_or_else(|| DomainError::not_found("Category", category))?;

        let fields = effective
            .iter()
            .filter(|(key, _)| key.as_str() != TYPE_KEY)
            .map(|(key, spec)| FormField::new(FieldViewModel::from_spec(key, spec)))
            .collect();

        Ok(Self {
            category: category.to_string(),
            fields,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key() == key)
    }

    pub fn views(&self) -> Vec<FieldViewModel> {
        self.fields.iter().map(|f| f.view.clone()).collect()
    }

    fn field_mut(&mut self, key: &str) -> Result<&mut FormField, DomainError> {
        self.fields
            .iter_mut()
            .find(|f| f.key() == key)
            .ok_or_else(|| DomainError::not_found("Field", key))
    }

    /// Replace the free-text slot of a field.
    pub fn set_text(&mut self, key: &str, text: impl Into<String>) -> Result<(), DomainError> {
        self.field_mut(key)?.text = text.into();
        Ok(())
    }

    /// Pick one of a choice field's options as its suggested value.
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound` for unknown keys
    /// - `DomainError::NotAnOption` when the field is free text only or the
    ///   value is not one of its options
    pub fn select(&mut self, key: &str, option: &str) -> Result<(), DomainError> {
        let field = self.field_mut(key)?;
        if !field.view.options().iter().any(|o| o == option) {
            return Err(DomainError::not_an_option(key, option));
        }
        field.suggested = Some(option.to_string());
        Ok(())
    }

    /// Reset every field to its initial state.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }

    /// Read the form back into a record of the active category.
    ///
    /// Fields without a value are omitted, never stored as empty strings.
    pub fn read(&self) -> Record {
        let mut record = Record::new(self.category.clone());
        for field in &self.fields {
            if let Some(value) = field.value() {
                record.insert(field.key(), value);
            }
        }
        record
    }

    /// Load a record into the form.
    ///
    /// When the record belongs to another category the form is regenerated
    /// for that category first. Returns `false`, leaving the form untouched,
    /// when the record's category is not an exact match for any schema
    /// category.
    pub fn populate(&mut self, schema: &Schema, record: &Record) -> bool {
        let Some(category) = record.category() else {
            tracing::debug!("Record has no category, populate skipped");
            return false;
        };

        if category != self.category {
            match Self::build(schema, category) {
                Ok(form) => *self = form,
                Err(_) => {
                    tracing::debug!(category, "Unknown record category, populate skipped");
                    return false;
                }
            }
        }

        for field in &mut self.fields {
            let value = record.get(field.key());
            field.fill(value);
        }
        true
    }
}
