//! Record entity - one user-created item
//!
//! A record is a flat, ordered mapping from field key to value. Two keys are
//! reserved: [`TYPE_KEY`] names the record's category and [`NAME_KEY`] is the
//! uniqueness discriminant within that category.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Reserved key naming the record's category.
pub const TYPE_KEY: &str = "type";

/// Reserved key holding the record's name.
pub const NAME_KEY: &str = "name";

const MISSING_NAME_LABEL: &str = "(unnamed)";
const MISSING_TYPE_LABEL: &str = "?";

/// A stored field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    /// Any other JSON value found on disk, kept verbatim for forward compatibility
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::List(items) => write!(f, "{}", items.join(", ")),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// One item record.
///
/// Records are validated when they are persisted, not when they are built:
/// a form may legitimately produce a record without a name, and the editor
/// rejects it with a validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create a record tagged with `category`.
    pub fn new(category: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(TYPE_KEY.to_string(), FieldValue::Text(category.into()));
        Self { fields }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Category named by the `type` key, if it is text.
    pub fn category(&self) -> Option<&str> {
        self.get(TYPE_KEY).and_then(FieldValue::as_text)
    }

    /// Value of the `name` key, if it is text.
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_KEY).and_then(FieldValue::as_text)
    }

    /// Reject records that cannot be persisted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `name` is missing or blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.name() {
            Some(name) if !name.trim().is_empty() => Ok(()),
            _ => Err(DomainError::validation("name is required")),
        }
    }

    /// Whether this record has the given `(name, type)` identity.
    pub fn has_identity(&self, name: &str, category: &str) -> bool {
        self.name() == Some(name) && self.category() == Some(category)
    }

    /// List label: `"{name} [{type}]"`.
    pub fn label(&self) -> String {
        let name = self
            .get(NAME_KEY)
            .map(ToString::to_string)
            .unwrap_or_else(|| MISSING_NAME_LABEL.to_string());
        let category = self
            .get(TYPE_KEY)
            .map(ToString::to_string)
            .unwrap_or_else(|| MISSING_TYPE_LABEL.to_string());
        format!("{} [{}]", name, category)
    }

    /// `(key, display value)` pairs in stored order, without `type`.
    pub fn detail_rows(&self) -> Vec<(String, String)> {
        self.iter()
            .filter(|(key, _)| *key != TYPE_KEY)
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    /// `key: value` lines, without `type`.
    pub fn to_plain_text(&self) -> String {
        self.detail_rows()
            .into_iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::serialization(e.to_string()))
    }
}
