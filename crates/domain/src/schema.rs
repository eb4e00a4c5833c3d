//! Field schema - the categorized description every form is generated from
//!
//! The schema is a JSON object whose top-level keys are category names.
//! One key is reserved: [`COMMON_CATEGORY`] holds fields shared by every
//! category. Each category maps field names to a [`FieldSpec`].
//!
//! ```json
//! {
//!   "common": { "name": { "tooltip": "Unique item name" } },
//!   "weapon": { "grade": { "options": ["common", "rare"] } }
//! }
//! ```
//!
//! Declared order is preserved for categories and for fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Reserved category whose fields are merged into every other category.
pub const COMMON_CATEGORY: &str = "common";

/// Property keys a [`FieldSpec`] object understands. Anything else is ignored.
pub const FIELD_SPEC_KEYS: [&str; 2] = ["tooltip", "options"];

/// Field name -> spec, in declared order.
pub type FieldMap = IndexMap<String, FieldSpec>;

/// Schema declaration of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Informational text shown next to the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Enumerated suggestions; free text is still accepted when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Tooltip text, empty when the schema declares none.
    pub fn tooltip(&self) -> &str {
        self.tooltip.as_deref().unwrap_or_default()
    }

    /// Declared options, empty when the schema declares none.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    /// An empty `options` array behaves like no options at all.
    pub fn has_options(&self) -> bool {
        !self.options().is_empty()
    }
}

/// The loaded schema: category name -> fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    groups: IndexMap<String, FieldMap>,
}

impl Schema {
    /// Build a schema from an already parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` when the document does not have the
    /// category -> field -> spec shape (e.g. a category that is not an object,
    /// or `options` that is not an array of strings).
    pub fn from_value(value: serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(value).map_err(|e| DomainError::parse(e.to_string()))
    }

    /// Add or replace a whole group. Used to assemble schemas in code.
    pub fn with_group(mut self, category: impl Into<String>, fields: FieldMap) -> Self {
        self.groups.insert(category.into(), fields);
        self
    }

    /// Selectable category names in declared order, `common` excluded.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups
            .keys()
            .map(String::as_str)
            .filter(|name| *name != COMMON_CATEGORY)
    }

    /// Exact-match lookup of a selectable category.
    pub fn has_category(&self, category: &str) -> bool {
        category != COMMON_CATEGORY && self.groups.contains_key(category)
    }

    /// Fields shared by every category.
    pub fn common_fields(&self) -> Option<&FieldMap> {
        self.groups.get(COMMON_CATEGORY)
    }

    /// Effective fields of a category: common fields first, then the
    /// category's own. A category field shadows a common field with the same
    /// key; the shadowed key keeps its position.
    ///
    /// Returns `None` for unknown categories and for `common` itself.
    pub fn fields_for(&self, category: &str) -> Option<FieldMap> {
        if !self.has_category(category) {
            return None;
        }

        let mut merged = self.common_fields().cloned().unwrap_or_default();
        if let Some(own) = self.groups.get(category) {
            for (key, spec) in own {
                merged.insert(key.clone(), spec.clone());
            }
        }
        Some(merged)
    }
}
