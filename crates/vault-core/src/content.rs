//! Whole-file text read and overwrite.

use crate::error::{Operation, Result, ToolError};
use std::fmt;
use std::fs;
use std::path::Path;

/// Outcome of a successful overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Base name of the overwritten file
    pub file_name: String,
    /// Number of bytes written
    pub bytes_written: usize,
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Updated the full content of {} ({} bytes).",
            self.file_name, self.bytes_written
        )
    }
}

/// Reads the whole file at `path` as UTF-8 text.
///
/// # Errors
///
/// - [`ToolError::NotFound`] if nothing exists at `path`
/// - [`ToolError::Io`] if the file cannot be read or is not valid UTF-8
pub fn read_content(path: &str) -> Result<String> {
    tracing::debug!(path, "reading file content");

    if !Path::new(path).exists() {
        tracing::warn!(path, "read target does not exist");
        return Err(ToolError::not_found("File", path));
    }

    fs::read_to_string(path).map_err(|e| {
        tracing::warn!(path, error = %e, "read failed");
        ToolError::io(Operation::Read, path, e)
    })
}

/// Replaces the entire content of an existing file.
///
/// The file is truncated and rewritten in place. A crash mid-write may
/// leave it truncated.
///
/// # Errors
///
/// - [`ToolError::NotFound`] if nothing exists at `path`; no file is created
/// - [`ToolError::Io`] if the write fails
pub fn write_content(path: &str, content: &str) -> Result<WriteReport> {
    tracing::debug!(path, bytes = content.len(), "overwriting file content");

    let target = Path::new(path);
    if !target.exists() {
        tracing::warn!(path, "write target does not exist");
        return Err(ToolError::not_found("File", path));
    }

    fs::write(target, content).map_err(|e| {
        tracing::warn!(path, error = %e, "write failed");
        ToolError::io(Operation::Write, path, e)
    })?;

    Ok(WriteReport {
        file_name: base_name(target),
        bytes_written: content.len(),
    })
}

/// Last path component, or the path itself when it has none.
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
