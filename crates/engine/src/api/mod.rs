//! Presentation boundary.
//!
//! Turns engine results into what a front end shows: status line messages
//! and the startup error report.

pub mod report;
pub mod status;

pub use report::{render_config_error, EXAMPLE_SCHEMA};
pub use status::{Export, StatusLevel, StatusMessage};
