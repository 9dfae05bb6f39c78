//! Common types for parsers

use std::path::PathBuf;

/// A version constraint found in a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredVersion {
    /// Raw constraint text (e.g., ">= 1.2.0, < 2.0.0")
    pub constraint: String,
    /// File the constraint was read from. Empty until the scanner fills it in.
    pub path: PathBuf,
    /// Byte offset of the constraint text in the source (start)
    pub start_offset: usize,
    /// Byte offset of the constraint text in the source (end)
    pub end_offset: usize,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl RequiredVersion {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}
