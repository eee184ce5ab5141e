//! MCP server exposing the vault file toolset.
//!
//! The `VaultService` provides four tools:
//! 1. `read_note_content` - Read a note's full text
//! 2. `update_note_content` - Overwrite an existing note
//! 3. `list_directory_structure` - Render a folder tree, hiding dot entries
//! 4. `move_file` - Relocate one file, creating missing folders

use crate::types::{ListStructureParams, MoveFileParams, ReadNoteParams, UpdateNoteParams};
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{ErrorData as McpError, tool, tool_handler, tool_router};
use std::sync::Arc;
use vault_ops_core::{FileToolset, Render, ToolResponse};

/// MCP server for agent-driven vault maintenance.
///
/// Owns one [`FileToolset`]; every tool call runs the matching operation on
/// tokio's blocking pool and answers with a single text content. Failures
/// are returned as tool results flagged `is_error`, never as protocol
/// errors.
///
/// # Examples
///
/// ```no_run
/// use rmcp::ServiceExt;
/// use rmcp::transport::stdio;
/// use vault_ops_core::FileToolset;
/// use vault_ops_server::VaultService;
///
/// # async fn example() -> anyhow::Result<()> {
/// let service = VaultService::new(FileToolset::default()).serve(stdio()).await?;
/// service.waiting().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VaultService {
    /// File operations shared with blocking tasks
    tools: Arc<FileToolset>,

    /// Tool router for MCP protocol
    tool_router: ToolRouter<Self>,
}

impl VaultService {
    /// Creates a service around the given toolset.
    #[must_use]
    pub fn new(tools: FileToolset) -> Self {
        Self {
            tools: Arc::new(tools),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for VaultService {
    fn default() -> Self {
        Self::new(FileToolset::default())
    }
}

#[tool_router]
impl VaultService {
    /// Read the full text of a note.
    #[tool(description = "Read the full UTF-8 content of an Obsidian note.")]
    async fn read_note_content(
        &self,
        Parameters(params): Parameters<ReadNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(tool = "read_note_content", path = %params.file_path);
        run_blocking(&self.tools, move |tools| tools.read_content(&params.file_path)).await
    }

    /// Overwrite a note with optimized content.
    #[tool(
        description = "[Destructive] Overwrite an existing note with its complete optimized content (frontmatter and body). Read the note first and make sure the new content keeps all original text and links. Never creates new files."
    )]
    async fn update_note_content(
        &self,
        Parameters(params): Parameters<UpdateNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            tool = "update_note_content",
            path = %params.file_path,
            bytes = params.full_content.len()
        );
        run_blocking(&self.tools, move |tools| {
            tools.write_content(&params.file_path, &params.full_content)
        })
        .await
    }

    /// List every folder and file below a root.
    #[tool(
        description = "Recursively list the folder structure under root_path. Hidden folders such as .git and .obsidian, and hidden files, are skipped."
    )]
    async fn list_directory_structure(
        &self,
        Parameters(params): Parameters<ListStructureParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(tool = "list_directory_structure", root = %params.root_path);
        run_blocking(&self.tools, move |tools| tools.list_tree(&params.root_path)).await
    }

    /// Move a file to a new location.
    #[tool(
        description = "Move a file from source_path to destination_path (file name included). Missing destination folders are created. Refuses to overwrite anything already at the destination."
    )]
    async fn move_file(
        &self,
        Parameters(params): Parameters<MoveFileParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            tool = "move_file",
            source = %params.source_path,
            destination = %params.destination_path
        );
        run_blocking(&self.tools, move |tools| {
            tools.move_file(&params.source_path, &params.destination_path)
        })
        .await
    }
}

#[tool_handler]
impl ServerHandler for VaultService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "File tools for maintaining an Obsidian vault. Use list_directory_structure \
                 to audit folders, read_note_content and update_note_content to rewrite a \
                 note in full, and move_file to reorganize. Paths are used as given and are \
                 not restricted to the vault."
                    .to_string(),
            ),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Runs one toolset operation off the async runtime and renders its result.
async fn run_blocking<T, F>(tools: &Arc<FileToolset>, op: F) -> Result<CallToolResult, McpError>
where
    T: Render,
    F: FnOnce(&FileToolset) -> vault_ops_core::Result<T> + Send + 'static,
{
    let tools = Arc::clone(tools);
    let response = tokio::task::spawn_blocking(move || ToolResponse::from(op(&tools)))
        .await
        .map_err(|e| McpError::internal_error(format!("Task join error: {e}"), None))?;

    Ok(to_call_result(response))
}

/// Wraps a rendered response as an MCP tool result.
fn to_call_result(response: ToolResponse) -> CallToolResult {
    if response.is_error() {
        tracing::warn!(response = response.text(), "tool call failed");
        CallToolResult::error(vec![Content::text(response.into_text())])
    } else {
        CallToolResult::success(vec![Content::text(response.into_text())])
    }
}
