//! Shared helpers for the JSON file adapters.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::infrastructure::ports::RepoError;

/// Pretty-print `value` (two-space indent, UTF-8, non-ASCII kept as-is) and
/// replace `path` with it.
///
/// The data is written to a sibling temporary file first and then renamed
/// over the target, so a reader never sees a half-written file.
pub fn write_pretty<T: Serialize + ?Sized>(
    operation: &'static str,
    path: &Path,
    value: &T,
) -> Result<(), RepoError> {
    let data = serde_json::to_string_pretty(value).map_err(RepoError::serialization)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RepoError::io(operation, parent.display(), e))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, data).map_err(|e| RepoError::io(operation, tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| {
        // Best effort: do not leave the temporary file behind.
        let _ = fs::remove_file(&tmp);
        RepoError::io(operation, path.display(), e)
    })
}

/// Read a file, mapping "does not exist" to `Ok(None)`.
pub fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_pretty_creates_parent_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("out.json");

        write_pretty("test", &path, &serde_json::json!({ "이름": "검" })).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"이름\": \"검\"\n}");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_read_if_exists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.json");
        assert!(read_if_exists(&path).unwrap().is_none());

        fs::write(&path, "[]").unwrap();
        assert_eq!(read_if_exists(&path).unwrap().as_deref(), Some("[]"));
    }
}
