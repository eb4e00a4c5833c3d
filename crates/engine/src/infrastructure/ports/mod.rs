//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Schema storage (JSON file today)
//! - Record storage (JSON file today)
//! - Confirmation prompts (answered by whatever UI drives the session)

mod confirm;
mod error;
mod repos;

// =============================================================================
// Storage Ports
// =============================================================================
pub use repos::{RecordLoad, RecordRepo, SchemaRepo};

pub use error::{ConfigError, RepoError};

// =============================================================================
// Interaction Ports
// =============================================================================
pub use confirm::{ConfirmPort, Confirmation, FixedAnswer};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use confirm::MockConfirmPort;

#[cfg(test)]
pub use repos::{MockRecordRepo, MockSchemaRepo};
