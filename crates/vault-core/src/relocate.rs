//! Single-file relocation with a no-overwrite guard.
//!
//! Missing parent directories of the destination are created before the
//! move. They are left in place when the move itself fails.

use crate::content::base_name;
use crate::error::{Operation, Result, ToolError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Base name of the moved file
    pub file_name: String,
    /// Destination path as supplied by the caller
    pub destination: String,
    /// Whether the file was copied and deleted instead of renamed
    pub copied: bool,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved {} -> {}", self.file_name, self.destination)
    }
}

/// Moves the file at `source` to `destination`.
///
/// A rename is attempted first. If source and destination live on
/// different filesystems the file is copied and the source removed.
///
/// # Errors
///
/// - [`ToolError::NotFound`] if nothing exists at `source`
/// - [`ToolError::NotAFile`] if `source` is a directory
/// - [`ToolError::Conflict`] if anything exists at `destination`
/// - [`ToolError::Io`] if creating directories or moving fails
pub fn move_file(source: &str, destination: &str) -> Result<MoveReport> {
    tracing::debug!(source, destination, "moving file");

    let src = Path::new(source);
    let dest = Path::new(destination);

    if !src.exists() {
        tracing::warn!(source, "move source does not exist");
        return Err(ToolError::not_found("Source file", source));
    }
    if src.is_dir() {
        return Err(ToolError::NotAFile {
            path: source.to_string(),
        });
    }

    // symlink_metadata also catches dangling links at the destination
    if fs::symlink_metadata(dest).is_ok() {
        tracing::warn!(destination, "move destination is occupied");
        return Err(ToolError::Conflict {
            path: destination.to_string(),
        });
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            tracing::warn!(destination, error = %e, "creating destination directories failed");
            ToolError::io(Operation::CreateDirs, parent.display().to_string(), e)
        })?;
    }

    let copied = relocate(src, dest).map_err(|e| {
        tracing::warn!(source, destination, error = %e, "move failed");
        ToolError::io(Operation::Move, source, e)
    })?;

    Ok(MoveReport {
        file_name: base_name(src),
        destination: destination.to_string(),
        copied,
    })
}

/// Renames `src` to `dest`, falling back to copy + delete across devices.
///
/// Returns `true` when the fallback was used.
fn relocate(src: &Path, dest: &Path) -> io::Result<bool> {
    match fs::rename(src, dest) {
        Ok(()) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(error = %e, "rename crossed devices, copying instead");
            fs::copy(src, dest)?;
            fs::remove_file(src)?;
            Ok(true)
        }
        Err(e) => Err(e),
    }
}
