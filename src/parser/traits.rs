//! Parser trait definition

use crate::parser::types::RequiredVersion;

/// Trait for extracting a version constraint from a configuration file
pub trait Parser: Send + Sync {
    /// Check if this parser can handle the given path
    fn can_parse(&self, path: &str) -> bool;

    /// Parse the content and extract the declared version constraint, if any
    fn parse(&self, content: &str) -> Result<Option<RequiredVersion>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Invalid syntax in the file
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}
