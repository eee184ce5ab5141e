//! MCP server entry point for Obsidian vault maintenance.
//!
//! # Usage
//!
//! Run the server via stdio transport:
//!
//! ```bash
//! vault-ops --indent-width 4
//! ```
//!
//! Or configure in `~/.config/claude/mcp.json`:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "obsidian-optimizer": {
//!       "command": "vault-ops",
//!       "env": { "RUST_LOG": "info" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use clap::Parser;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vault_ops_core::FileToolset;
use vault_ops_server::{Args, LogFormat, VaultService};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_format);

    let config = args.toolset_config()?;

    tracing::info!(
        indent_width = config.indent_width,
        "Starting vault-ops v{}",
        env!("CARGO_PKG_VERSION")
    );

    let service = VaultService::new(FileToolset::new(config))
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("serving error: {e:?}"))?;
    service.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Logs go to stderr; stdout carries the MCP protocol.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,vault_ops_server=debug,vault_ops_core=debug")
    });
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .init(),
    }
}
