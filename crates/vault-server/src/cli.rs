//! Command-line arguments for the `vault-ops` binary.
//!
//! Every option has an environment variable fallback so the server can be
//! configured from an MCP client's `env` block.

use clap::{Parser, ValueEnum};
use vault_ops_core::{ConfigError, DEFAULT_INDENT_WIDTH, ToolsetConfig};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// MCP server exposing Obsidian vault file operations over stdio.
#[derive(Parser, Debug)]
#[command(name = "vault-ops")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Spaces per nesting level in directory listings
    #[arg(long, env = "VAULT_OPS_INDENT_WIDTH", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent_width: usize,

    /// Log format written to stderr
    #[arg(long, env = "VAULT_OPS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Args {
    /// Builds and validates the toolset configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any value is out of range.
    pub fn toolset_config(&self) -> Result<ToolsetConfig, ConfigError> {
        let config = ToolsetConfig::new().with_indent_width(self.indent_width);
        config.validate()?;
        Ok(config)
    }
}
