//! Error types for vault file operations.
//!
//! Every toolset operation returns [`Result`], so failures can be
//! discriminated by variant. They are rendered to the `Error: ...` string
//! form only at the tool boundary (see [`crate::response`]).
//!
//! # Examples
//!
//! ```
//! use vault_ops_core::{ErrorKind, ToolError};
//!
//! let err = ToolError::NotFound {
//!     target: "File",
//!     path: "Vault/missing.md".to_string(),
//! };
//!
//! assert!(err.is_not_found());
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! assert_eq!(err.to_string(), "File not found: Vault/missing.md");
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Coarse classification of a [`ToolError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced path does not exist.
    NotFound,
    /// The move destination is already occupied.
    Conflict,
    /// The path exists but has the wrong type for the operation.
    InvalidTarget,
    /// The platform reported a failure while performing the operation.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::InvalidTarget => "invalid_target",
            Self::Io => "io",
        };
        f.write_str(name)
    }
}

/// The operation that hit an I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Reading file content.
    Read,
    /// Overwriting file content.
    Write,
    /// Walking a directory tree.
    List,
    /// Creating destination directories before a move.
    CreateDirs,
    /// Relocating a file.
    Move,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Read => "read file",
            Self::Write => "write file",
            Self::List => "list directory",
            Self::CreateDirs => "create destination directories",
            Self::Move => "move file",
        };
        f.write_str(verb)
    }
}

/// Errors returned by the file toolset.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Referenced path does not exist.
    ///
    /// `target` names the role of the path in the operation
    /// (`"File"`, `"Path"`, `"Source file"`).
    #[error("{target} not found: {path}")]
    NotFound {
        /// Role of the missing path
        target: &'static str,
        /// The path as supplied by the caller
        path: String,
    },

    /// Something already exists at the move destination.
    #[error("Destination already exists, skipping move: {path}")]
    Conflict {
        /// The occupied destination path
        path: String,
    },

    /// The path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// The offending path
        path: String,
    },

    /// The path exists but is not a file.
    #[error("Not a file: {path}")]
    NotAFile {
        /// The offending path
        path: String,
    },

    /// Underlying filesystem call failed.
    #[error("Failed to {operation}: {source}")]
    Io {
        /// What was being attempted
        operation: Operation,
        /// The path the failing call was made on
        path: String,
        /// Platform error
        #[source]
        source: io::Error,
    },
}

impl ToolError {
    pub(crate) fn not_found(target: &'static str, path: impl Into<String>) -> Self {
        Self::NotFound {
            target,
            path: path.into(),
        }
    }

    pub(crate) fn io(operation: Operation, path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::NotADirectory { .. } | Self::NotAFile { .. } => ErrorKind::InvalidTarget,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Returns the path the error refers to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path, .. }
            | Self::Conflict { path }
            | Self::NotADirectory { path }
            | Self::NotAFile { path }
            | Self::Io { path, .. } => path,
        }
    }

    /// Returns `true` if a referenced path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_ops_core::ToolError;
    ///
    /// let err = ToolError::NotFound {
    ///     target: "Path",
    ///     path: "Vault".to_string(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if the move destination was occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_ops_core::ToolError;
    ///
    /// let err = ToolError::Conflict {
    ///     path: "Vault/Archive/a.md".to_string(),
    /// };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Returns `true` if the path had the wrong type for the operation.
    #[must_use]
    pub const fn is_invalid_target(&self) -> bool {
        matches!(self, Self::NotADirectory { .. } | Self::NotAFile { .. })
    }

    /// Returns `true` if an underlying filesystem call failed.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type for toolset operations.
pub type Result<T> = std::result::Result<T, ToolError>;
