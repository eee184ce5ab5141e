//! File operation primitives for agent-driven note vault maintenance.
//!
//! This crate provides the four mechanical operations an external agent
//! sequences to tidy a notes vault. The agent does every content
//! transformation itself; these functions only move bytes around.
//!
//! # Operations
//!
//! - [`FileToolset::read_content`] - whole-file UTF-8 read
//! - [`FileToolset::write_content`] - truncating overwrite of an existing file
//! - [`FileToolset::list_tree`] - indented listing of a directory subtree,
//!   skipping dot-prefixed entries
//! - [`FileToolset::move_file`] - relocate one file, creating parent
//!   directories, never overwriting
//!
//! # Trust boundary
//!
//! Paths are taken exactly as given. Nothing confines them to a vault root,
//! so a caller can read, overwrite or move any file the process can reach.
//!
//! # Examples
//!
//! ```
//! use vault_ops_core::{FileToolset, ToolResponse};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! # let vault = temp.path().join("Vault");
//! # std::fs::create_dir_all(&vault).unwrap();
//! # std::fs::write(vault.join("a.md"), "hello").unwrap();
//! # let src = vault.join("a.md");
//! # let dest = vault.join("Archive/2024/a.md");
//! let tools = FileToolset::default();
//!
//! let moved = tools.move_file(src.to_str().unwrap(), dest.to_str().unwrap());
//! let response = ToolResponse::from(moved);
//! assert!(response.text().starts_with("Success: Moved a.md -> "));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod content;
mod error;
mod relocate;
mod response;
mod toolset;

pub mod tree;

pub use config::{ConfigError, DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH, ToolsetConfig};
pub use content::{WriteReport, read_content, write_content};
pub use error::{ErrorKind, Operation, Result, ToolError};
pub use relocate::{MoveReport, move_file};
pub use response::{ERROR_PREFIX, Render, SUCCESS_PREFIX, ToolResponse};
pub use toolset::FileToolset;
pub use tree::{TreeLine, TreeListing, list_tree};
