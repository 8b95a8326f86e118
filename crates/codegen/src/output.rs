//! Filesystem helpers for generated outputs

use figsync_core::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Write `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Write`] on any filesystem failure
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::write(e, parent, "create directory"))?;
    }
    std::fs::write(path, content).map_err(|e| Error::write(e, path, "write"))
}

/// Append one line to `path`, creating the file and its parents if needed.
///
/// The file is opened in append mode and closed again on every call.
///
/// # Errors
///
/// Returns [`Error::Write`] on any filesystem failure
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::write(e, parent, "create directory"))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::write(e, path, "open for append"))?;
    writeln!(file, "{line}").map_err(|e| Error::write(e, path, "append"))
}

/// Remove a directory tree. A missing directory is not an error.
///
/// Returns whether something was removed.
///
/// # Errors
///
/// Returns [`Error::Write`] when the directory exists but cannot be removed
pub fn clean_dir(path: &Path) -> Result<bool> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::write(e, path, "remove")),
    }
}
