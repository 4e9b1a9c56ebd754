//! Error types for SVG document conversion
//!
//! Only a document that is not well-formed XML is fatal. Everything below
//! that level (missing or non-numeric attributes, unknown tags) degrades to
//! defaults inside the parser and never reaches the caller.

use thiserror::Error;

/// Fatal SVG parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The document is not well-formed XML
    #[error("Invalid XML: {0}")]
    InvalidXml(String),
}

impl ParseError {
    /// Human-readable reason for the failure
    pub fn reason(&self) -> &str {
        match self {
            ParseError::InvalidXml(reason) => reason,
        }
    }
}

impl From<roxmltree::Error> for ParseError {
    fn from(err: roxmltree::Error) -> Self {
        ParseError::InvalidXml(err.to_string())
    }
}
