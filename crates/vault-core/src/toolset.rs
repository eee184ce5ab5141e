//! The file toolset handed to the request-dispatch layer.

use crate::config::ToolsetConfig;
use crate::content::{self, WriteReport};
use crate::error::Result;
use crate::relocate::{self, MoveReport};
use crate::tree::{self, TreeListing};

/// The four file operations, bound to one configuration.
///
/// The toolset holds no state besides its configuration; every call works
/// directly against the filesystem. Paths are used exactly as given and are
/// not confined to any root directory.
///
/// # Examples
///
/// ```
/// use vault_ops_core::{FileToolset, ToolsetConfig};
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// # let note = temp.path().join("a.md");
/// # std::fs::write(&note, "old").unwrap();
/// # let note = note.to_str().unwrap();
/// let tools = FileToolset::new(ToolsetConfig::default());
///
/// tools.write_content(note, "new").unwrap();
/// assert_eq!(tools.read_content(note).unwrap(), "new");
/// ```
#[derive(Debug, Clone)]
pub struct FileToolset {
    config: ToolsetConfig,
    indent: String,
}

impl FileToolset {
    /// Creates a toolset from a validated configuration.
    #[must_use]
    pub fn new(config: ToolsetConfig) -> Self {
        let indent = config.indent_unit();
        Self { config, indent }
    }

    /// The configuration this toolset was built with.
    #[must_use]
    pub const fn config(&self) -> &ToolsetConfig {
        &self.config
    }

    /// Returns the full UTF-8 text of the file at `path`.
    ///
    /// # Errors
    ///
    /// See [`crate::read_content`].
    #[allow(clippy::unused_self)]
    pub fn read_content(&self, path: &str) -> Result<String> {
        content::read_content(path)
    }

    /// Overwrites the existing file at `path` with `text`.
    ///
    /// # Errors
    ///
    /// See [`crate::write_content`].
    #[allow(clippy::unused_self)]
    pub fn write_content(&self, path: &str, text: &str) -> Result<WriteReport> {
        content::write_content(path, text)
    }

    /// Lists the directory subtree rooted at `root`.
    ///
    /// # Errors
    ///
    /// See [`crate::list_tree`].
    pub fn list_tree(&self, root: &str) -> Result<TreeListing> {
        tree::list_tree(root, &self.indent)
    }

    /// Moves one file, creating missing destination directories.
    ///
    /// # Errors
    ///
    /// See [`crate::move_file`].
    #[allow(clippy::unused_self)]
    pub fn move_file(&self, source: &str, destination: &str) -> Result<MoveReport> {
        relocate::move_file(source, destination)
    }
}

impl Default for FileToolset {
    fn default() -> Self {
        Self::new(ToolsetConfig::default())
    }
}
