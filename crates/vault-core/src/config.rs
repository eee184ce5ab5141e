//! Configuration for the file toolset.
//!
//! There is no configuration file; values come from the server's command
//! line and are validated once at startup.
//!
//! # Examples
//!
//! ```
//! use vault_ops_core::ToolsetConfig;
//!
//! let config = ToolsetConfig::default().with_indent_width(2);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.indent_unit(), "  ");
//! ```

use thiserror::Error;

/// Default number of spaces per tree nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Largest accepted indent width.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Invalid toolset configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error: {message}")]
pub struct ConfigError {
    /// Description of the problem
    pub message: String,
}

/// Runtime options for [`crate::FileToolset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsetConfig {
    /// Spaces per nesting level in tree listings.
    ///
    /// Default: 4
    pub indent_width: usize,
}

impl ToolsetConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Sets the indent width used by tree listings.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Returns one indent unit as a string of spaces.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }

    /// Checks that all values are within accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the indent width is zero or larger than
    /// [`MAX_INDENT_WIDTH`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError {
                message: format!(
                    "indent width must be between 1 and {MAX_INDENT_WIDTH}, got {}",
                    self.indent_width
                ),
            });
        }
        Ok(())
    }
}

impl Default for ToolsetConfig {
    fn default() -> Self {
        Self::new()
    }
}
