//! Filesystem path resolution for scanbase data.
//!
//! Entry points resolve the database location here so that every adapter
//! (CLI, web server) agrees on where data lives.

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "SCANBASE_DB";

/// Errors raised while resolving data paths.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
}

/// Root directory for scanbase data (`<platform data dir>/scanbase`).
pub fn data_root() -> Result<PathBuf, PathError> {
    dirs::data_dir()
        .map(|dir| dir.join("scanbase"))
        .ok_or(PathError::NoDataDir)
}

/// Path to the SQLite database file.
///
/// Honors the `SCANBASE_DB` environment variable; otherwise resolves to
/// `scanbase.db` under [`data_root`].
pub fn database_path() -> Result<PathBuf, PathError> {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(data_root()?.join("scanbase.db"))
}
