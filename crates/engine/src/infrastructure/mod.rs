//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod json_file;
pub mod ports;
pub mod record_file;
pub mod schema_file;
pub mod terminal_prompt;
