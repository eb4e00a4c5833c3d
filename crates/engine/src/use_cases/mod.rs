//! Use cases - User story orchestration.
//!
//! - `schema` - load the schema and run the key-typo pass
//! - `editor` - add, overwrite and delete records
//! - `session` - the form plus the editor, as a front end drives them

pub mod editor;
pub mod schema;
pub mod session;

pub use editor::{DeleteOutcome, EditorError, RecordEditor, UpsertOutcome};
pub use schema::{LoadSchema, LoadedSchema, SchemaCheckReport};
pub use session::{EditorSession, SessionError};
