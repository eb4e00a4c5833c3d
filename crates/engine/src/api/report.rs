//! Human-readable report for schema errors that stop the program.

use crate::infrastructure::ports::ConfigError;

/// A well-formed schema shown next to every configuration error.
pub const EXAMPLE_SCHEMA: &str = r#"{
  "common": {
    "name": {
      "tooltip": "Unique name of the item."
    },
    "grade": {
      "options": ["common", "uncommon", "rare", "epic", "legendary"],
      "tooltip": "Item grade."
    }
  },
  "weapon": {
    "weapon_kind": {
      "options": ["one-handed sword", "two-handed sword", "bow", "staff"],
      "tooltip": "Kind of weapon."
    },
    "attack_power": {
      "tooltip": "Base attack power."
    }
  },
  "armor": {
    "armor_kind": {
      "options": ["helmet", "chest", "gloves", "boots"],
      "tooltip": "Kind of armor."
    },
    "defense": {
      "tooltip": "Base defense."
    }
  }
}"#;

const JSON_HINT: &str = "JSON is strict about braces `{ }`, brackets `[ ]` and commas `,`.\n\
Look for a typo or a missing comma.";

/// `Line N: text` with a caret under the reported column.
fn location_block(line: usize, column: usize, line_text: &str) -> String {
    let prefix = format!("Line {}: ", line);
    let indent = prefix.chars().count() + column.saturating_sub(1);
    format!("{}{}\n{}^", prefix, line_text, " ".repeat(indent))
}

/// Render a schema error for a terminal or a message box.
pub fn render_config_error(error: &ConfigError) -> String {
    let body = match error {
        ConfigError::Missing { path } => {
            format!("'{}' was not found. The editor cannot start without a schema.", path)
        }
        ConfigError::Parse {
            path,
            message,
            line,
            column,
            line_text,
        } => {
            let mut text = format!(
                "'{}' is not valid JSON.\n{}\n\nError: {}",
                path, JSON_HINT, message
            );
            if let Some(line_text) = line_text {
                text.push_str("\n\nApproximate location:\n");
                text.push_str(&location_block(*line, *column, line_text));
            }
            text.push_str("\n\nFix the file and start the editor again.");
            text
        }
        ConfigError::Invalid { message } => format!(
            "The schema is valid JSON but not shaped like a schema: {}\n\
             Each category must map field names to objects with an optional \
             \"tooltip\" string and an optional \"options\" list of strings.",
            message
        ),
        ConfigError::Io { .. } => error.to_string(),
    };

    format!("{}\n\nExample schema:\n{}\n", body, EXAMPLE_SCHEMA)
}
