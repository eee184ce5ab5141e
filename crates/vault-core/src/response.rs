//! Rendering of operation results to the agent-facing string contract.
//!
//! Status-style operations render as `Success: <message>`. Content-style
//! operations (read, list) render their payload verbatim. Every failure
//! renders as `Error: <message>`.

use crate::content::WriteReport;
use crate::error::{Result, ToolError};
use crate::relocate::MoveReport;
use crate::tree::TreeListing;

/// Prefix of every successful status message.
pub const SUCCESS_PREFIX: &str = "Success: ";

/// Prefix of every failure message.
pub const ERROR_PREFIX: &str = "Error: ";

/// A result ready to hand back to the calling agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    text: String,
    is_error: bool,
}

impl ToolResponse {
    /// The rendered string.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the response describes a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.is_error
    }

    /// Consumes the response, returning the rendered string.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    fn failure(err: &ToolError) -> Self {
        Self {
            text: format!("{ERROR_PREFIX}{err}"),
            is_error: true,
        }
    }
}

/// Values that can be rendered as a successful response.
pub trait Render {
    /// Renders the success arm.
    fn render(&self) -> String;
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for TreeListing {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for WriteReport {
    fn render(&self) -> String {
        format!("{SUCCESS_PREFIX}{self}")
    }
}

impl Render for MoveReport {
    fn render(&self) -> String {
        format!("{SUCCESS_PREFIX}{self}")
    }
}

impl<T: Render> From<Result<T>> for ToolResponse {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self {
                text: value.render(),
                is_error: false,
            },
            Err(err) => Self::failure(&err),
        }
    }
}
