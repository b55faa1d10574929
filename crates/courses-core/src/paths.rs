//! Database path resolution.
//!
//! Provides the canonical location of the `SQLite` database file.

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "COURSES_DATA_DIR";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `COURSES_DATA_DIR` environment variable
/// 2. `<system data dir>/courses`
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var(DATA_DIR_ENV).ok())
}

fn resolve_data_root(override_dir: Option<String>) -> Result<PathBuf, PathError> {
    let root = match override_dir {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("courses"),
    };

    fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
        path: root.clone(),
        reason: e.to_string(),
    })?;

    Ok(root)
}

/// File name of the database inside the data directory.
pub const DATABASE_FILE: &str = "courses.db";

/// Get the path to the courses database file.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DATABASE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let wanted = tmp.path().join("nested").join("data");

        let root = resolve_data_root(Some(wanted.to_string_lossy().into_owned())).unwrap();

        assert_eq!(root, wanted);
        assert!(root.is_dir());
    }

    #[test]
    fn test_override_dir_that_is_a_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().join("data").to_string_lossy().into_owned();

        assert!(matches!(
            resolve_data_root(Some(path)),
            Err(PathError::CreateFailed { .. })
        ));
    }
}
