use std::path::Path;
use thiserror::Error;

/// Custom error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to parse a TS catalog document
    #[error("Failed to parse TS document {file}:\n{reason}\n\nTip: Verify the file is a well-formed Qt Linguist TS catalog")]
    TsParse { file: String, reason: String },

    /// Failed to parse a source-scan inventory
    #[error("Failed to read scan inventory {file}:\n{reason}\n\nTip: The inventory must be a JSON array of {{context, source, comment?, filename, line}} objects")]
    Scan { file: String, reason: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a file path
    #[error("Failed to parse file path: {0}")]
    InvalidPath(String),

    /// Invalid context filter pattern
    #[error("Invalid context filter '{pattern}': {reason}\n\nTip: The filter is a regular expression matched against context names")]
    InvalidFilter { pattern: String, reason: String },

    /// Generic catalog error with context
    #[error("{0}")]
    Generic(String),
}

impl CatalogError {
    /// Create a TsParse error for in-memory input
    pub fn ts_parse(reason: impl Into<String>) -> Self {
        Self::TsParse {
            file: "<input>".to_string(),
            reason: reason.into(),
        }
    }

    /// Create a TsParse error pointing at a specific file
    pub fn ts_parse_in(path: &Path, reason: impl Into<String>) -> Self {
        Self::TsParse {
            file: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Create a Scan error for in-memory input
    pub fn scan(reason: impl Into<String>) -> Self {
        Self::Scan {
            file: "<input>".to_string(),
            reason: reason.into(),
        }
    }

    /// Create a Scan error pointing at a specific file
    pub fn scan_in(path: &Path, reason: impl Into<String>) -> Self {
        Self::Scan {
            file: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Re-label an in-memory parse error with the file it came from
    pub fn with_file(self, path: &Path) -> Self {
        match self {
            Self::TsParse { reason, .. } => Self::ts_parse_in(path, reason),
            Self::Scan { reason, .. } => Self::scan_in(path, reason),
            other => other,
        }
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
