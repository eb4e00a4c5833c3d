//! Confirmation port - the yes/no questions the engine asks the user.

use std::fmt;

/// A question that gates a destructive or persistent action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// A record with the same `(name, type)` already exists.
    OverwriteDuplicate { name: String, category: String },
    /// Delete the selected record.
    DeleteRecord { label: String },
    /// Rename a schema property key that looks like a typo.
    RenameSchemaKey {
        path: String,
        found: String,
        suggested: String,
    },
    /// Write accepted key corrections back to the schema file.
    SaveSchemaCorrections,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverwriteDuplicate { name, category } => write!(
                f,
                "'{}' ({}) already exists. Overwrite it?",
                name, category
            ),
            Self::DeleteRecord { label } => write!(f, "Really delete '{}'?", label),
            Self::RenameSchemaKey {
                path,
                found,
                suggested,
            } => write!(
                f,
                "Found key '{}' at {}. Did you mean '{}'? Rename it?",
                found, path, suggested
            ),
            Self::SaveSchemaCorrections => {
                write!(f, "Key corrections were made. Save them to the schema file?")
            }
        }
    }
}

/// Answers confirmations. Implemented by the presentation layer.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPort: Send + Sync {
    fn confirm(&self, request: &Confirmation) -> bool;
}

/// Answers every confirmation the same way. Useful for unattended runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmPort for FixedAnswer {
    fn confirm(&self, request: &Confirmation) -> bool {
        tracing::debug!(question = %request, answer = self.0, "Auto-answered confirmation");
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_text() {
        let request = Confirmation::OverwriteDuplicate {
            name: "Sword".into(),
            category: "weapon".into(),
        };
        assert_eq!(request.to_string(), "'Sword' (weapon) already exists. Overwrite it?");

        let request = Confirmation::RenameSchemaKey {
            path: "weapon.grade.optons".into(),
            found: "optons".into(),
            suggested: "options".into(),
        };
        assert!(request.to_string().contains("Did you mean 'options'?"));
    }

    #[test]
    fn test_fixed_answer() {
        assert!(FixedAnswer(true).confirm(&Confirmation::SaveSchemaCorrections));
        assert!(!FixedAnswer(false).confirm(&Confirmation::SaveSchemaCorrections));
    }
}
