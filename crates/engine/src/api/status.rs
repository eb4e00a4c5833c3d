//! Status line messages.
//!
//! Every outcome and error a front end may want to show is turned into a
//! [`StatusMessage`] here, so renderers never match on engine error types.

use std::fmt;

use serde::Serialize;

use crate::use_cases::{
    DeleteOutcome, EditorError, SchemaCheckReport, SessionError, UpsertOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

/// What an export copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Export {
    SelectedJson,
    SelectedText,
    LatestJson,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }

    /// `None` when the user declined: nothing happened, nothing to report.
    pub fn from_upsert(outcome: UpsertOutcome) -> Option<Self> {
        match outcome {
            UpsertOutcome::Added { .. } => Some(Self::info("Record added")),
            UpsertOutcome::Updated { .. } => Some(Self::info("Record updated")),
            UpsertOutcome::Cancelled => None,
        }
    }

    pub fn from_delete(outcome: &DeleteOutcome) -> Option<Self> {
        match outcome {
            DeleteOutcome::Deleted { .. } => Some(Self::info("Record deleted")),
            DeleteOutcome::Cancelled => None,
        }
    }

    pub fn from_export(export: Export) -> Self {
        Self::info(match export {
            Export::SelectedJson => "Selected record copied as JSON",
            Export::SelectedText => "Selected record copied as plain text",
            Export::LatestJson => "Latest record copied as JSON",
        })
    }

    pub fn from_session_error(error: &SessionError) -> Self {
        match error {
            SessionError::Editor(e) => Self::from_editor_error(e),
            SessionError::UnknownCategory(category) => {
                Self::warning(format!("'{}' is not a category of this schema", category))
            }
            other => Self::error(other.to_string()),
        }
    }

    pub fn from_editor_error(error: &EditorError) -> Self {
        match error {
            EditorError::MissingName => Self::warning("Name is required"),
            EditorError::SelectionRequired => Self::info("Select a record first"),
            other => Self::error(other.to_string()),
        }
    }

    /// The degraded-load warning of the records file.
    pub fn from_records_warning(warning: &str) -> Self {
        Self::warning(warning)
    }

    /// `None` when the typo pass changed nothing.
    pub fn from_schema_check(report: &SchemaCheckReport) -> Option<Self> {
        if let Some(error) = &report.save_error {
            return Some(Self::warning(format!(
                "Schema corrections apply to this session only: {}",
                error
            )));
        }
        match (report.applied, report.saved) {
            (0, _) => None,
            (n, true) => Some(Self::info(format!("{} schema key(s) corrected and saved", n))),
            (n, false) => Some(Self::info(format!(
                "{} schema key(s) corrected for this session only",
                n
            ))),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            StatusLevel::Info => "info",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.text)
    }
}
