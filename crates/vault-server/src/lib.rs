//! MCP server library for agent-driven Obsidian vault maintenance.
//!
//! This crate wraps the `vault-ops-core` toolset in an MCP server. The
//! conversation LLM does all the thinking (formatting notes, choosing tags,
//! designing a folder layout); the server only performs the file I/O it
//! asks for.
//!
//! # Tools
//!
//! 1. **`read_note_content`** - Read a note's full text
//! 2. **`update_note_content`** - Overwrite an existing note with new content
//! 3. **`list_directory_structure`** - List a vault's folders and files
//! 4. **`move_file`** - Move one file, creating folders as needed
//!
//! # Workflow
//!
//! 1. Claude calls `list_directory_structure` to audit the vault
//! 2. Claude reads a note, rewrites it in memory, and writes it back
//! 3. Claude plans a new folder layout and calls `move_file` once per file
//!
//! # Examples
//!
//! ```no_run
//! use rmcp::ServiceExt;
//! use rmcp::transport::stdio;
//! use vault_ops_server::VaultService;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = VaultService::default().serve(stdio()).await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod service;
pub mod types;

pub use cli::{Args, LogFormat};
pub use service::VaultService;
pub use types::{ListStructureParams, MoveFileParams, ReadNoteParams, UpdateNoteParams};
