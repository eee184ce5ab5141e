//! Directory tree listing.
//!
//! A listing is produced fresh on every call by walking the subtree
//! top-down. Within each directory the files come first, then the
//! subdirectories, each group sorted by name. Entries whose name starts
//! with `.` are dropped, and hidden directories are never descended into.
//! Symbolic links are never followed: links to files are listed as files,
//! links to directories are left out.
//!
//! # Examples
//!
//! ```
//! use vault_ops_core::tree::list_tree;
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! # let vault = temp.path().join("Vault");
//! # std::fs::create_dir_all(vault.join("Notes")).unwrap();
//! # std::fs::write(vault.join("Notes/a.md"), "").unwrap();
//! let listing = list_tree(vault.to_str().unwrap(), "    ").unwrap();
//! assert_eq!(listing.to_string(), "Vault/\n    Notes/\n        a.md");
//! ```

use crate::content::base_name;
use crate::error::{Operation, Result, ToolError};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// One rendered line of a tree listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Nesting depth; the root is 0 and its direct children are 1
    pub depth: usize,
    /// Entry name without trailing separator
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// Text rendering of a directory subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeListing {
    indent: String,
    lines: Vec<TreeLine>,
}

impl TreeListing {
    /// All lines in traversal order, root first.
    #[must_use]
    pub fn lines(&self) -> &[TreeLine] {
        &self.lines
    }

    /// Number of listed files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.lines.iter().filter(|line| !line.is_dir).count()
    }

    /// Number of listed directories, including the root.
    #[must_use]
    pub fn dir_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_dir).count()
    }
}

impl fmt::Display for TreeListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for _ in 0..line.depth {
                f.write_str(&self.indent)?;
            }
            f.write_str(&line.name)?;
            if line.is_dir && !line.name.ends_with('/') {
                f.write_str("/")?;
            }
        }
        Ok(())
    }
}

/// Walks the directory at `root` and returns its listing.
///
/// Unreadable entries below the root are skipped with a warning. Symbolic
/// links to directories are omitted.
///
/// # Errors
///
/// - [`ToolError::NotFound`] if nothing exists at `root`
/// - [`ToolError::NotADirectory`] if `root` is not a directory
/// - [`ToolError::Io`] if the root itself cannot be read
pub fn list_tree(root: &str, indent: &str) -> Result<TreeListing> {
    tracing::debug!(root, "listing directory tree");

    let root_path = Path::new(root);
    if !root_path.exists() {
        tracing::warn!(root, "list root does not exist");
        return Err(ToolError::not_found("Path", root));
    }
    if !root_path.is_dir() {
        return Err(ToolError::NotADirectory {
            path: root.to_string(),
        });
    }

    let mut lines = Vec::new();
    let walker = WalkDir::new(root_path)
        .follow_links(false)
        .sort_by(files_then_dirs)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop at root"));
                return Err(ToolError::io(Operation::List, root, source));
            }
            Err(e) => {
                tracing::warn!(root, error = %e, "skipping unreadable entry");
                continue;
            }
        };

        // directory links are neither followed nor listed
        if entry.depth() > 0 && entry.path_is_symlink() && entry.path().is_dir() {
            tracing::debug!(root, link = %entry.path().display(), "skipping directory symlink");
            continue;
        }

        let name = if entry.depth() == 0 {
            base_name(root_path)
        } else {
            entry.file_name().to_string_lossy().into_owned()
        };

        lines.push(TreeLine {
            depth: entry.depth(),
            name,
            is_dir: entry.file_type().is_dir(),
        });
    }

    tracing::debug!(root, entries = lines.len(), "tree listing complete");

    Ok(TreeListing {
        indent: indent.to_string(),
        lines,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
