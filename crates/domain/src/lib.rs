//! Item Forge domain.
//!
//! Pure types and rules for schema-driven item records. No file access:
//! loading and saving live behind the engine's ports.

pub mod error;
pub mod form;
pub mod key_correction;
pub mod record;
pub mod schema;

pub use error::DomainError;

pub use form::{FieldKind, FieldViewModel, FormField, FormModel};

pub use key_correction::{
    apply_correction, closest_valid_key, correction_applies, find_key_corrections, KeyCorrection,
    SIMILARITY_CUTOFF,
};

pub use record::{FieldValue, Record, NAME_KEY, TYPE_KEY};

pub use schema::{FieldMap, FieldSpec, Schema, COMMON_CATEGORY, FIELD_SPEC_KEYS};
