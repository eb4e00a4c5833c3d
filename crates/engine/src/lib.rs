//! Item Forge engine library.
//!
//! Everything between the pure domain and a front end.
//!
//! ## Structure
//!
//! - `use_cases/` - Schema loading, record editing and the editor session
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Status messages and error reports for front ends
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::{App, AppError};
