//! Errors raised while reading a workflow document.
//!
//! Structural problems in the *graph* are not errors: they are reported as
//! [`Finding`](crate::validate::Finding)s. Only documents that cannot be turned
//! into a [`Workflow`](crate::parse::Workflow) at all end up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not JSON.
    #[error("Invalid JSON format: {0}")]
    Syntax(String),

    /// Well-formed JSON that does not have the shape of a workflow.
    #[error("Invalid workflow format: {0}")]
    Shape(String),
}

impl ParseError {
    pub fn shape(message: impl Into<String>) -> Self {
        ParseError::Shape(message.into())
    }

    /// Stable code surfaced to the browser alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Syntax(_) => "P001",
            ParseError::Shape(_) => "P002",
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_syntax() || e.is_eof() {
            ParseError::Syntax(e.to_string())
        } else {
            ParseError::Shape(e.to_string())
        }
    }
}
