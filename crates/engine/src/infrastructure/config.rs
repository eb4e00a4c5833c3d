//! Engine configuration from the environment.
//!
//! | Variable                 | Default       |
//! |--------------------------|---------------|
//! | `ITEMFORGE_SCHEMA_PATH`  | `config.json` |
//! | `ITEMFORGE_RECORDS_PATH` | `items.json`  |
//!
//! `.env.local` and `.env` files are honoured (see [`load_dotenv_files`]).

use std::path::{Path, PathBuf};

pub const SCHEMA_PATH_VAR: &str = "ITEMFORGE_SCHEMA_PATH";
pub const RECORDS_PATH_VAR: &str = "ITEMFORGE_RECORDS_PATH";

const DEFAULT_SCHEMA_PATH: &str = "config.json";
const DEFAULT_RECORDS_PATH: &str = "items.json";

/// File locations for one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub schema_path: PathBuf,
    pub records_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup. Blank values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            schema_path: read(SCHEMA_PATH_VAR, DEFAULT_SCHEMA_PATH),
            records_path: read(RECORDS_PATH_VAR, DEFAULT_RECORDS_PATH),
        }
    }
}

/// Load `.env.local` then `.env` from `dir` when present. Values already set
/// in the environment win, so earlier files take precedence.
pub fn load_dotenv_files(dir: &Path) {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load env file");
            }
        }
    }
}
