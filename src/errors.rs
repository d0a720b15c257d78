//! # Extraction Error Types
//!
//! This module defines the error types used throughout the column extraction
//! pipeline. Errors are scoped to a single image: the batch orchestrator
//! catches and logs them so one bad scan never aborts a run.

use std::fmt;

/// Errors that can occur while extracting a column from a page image.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Configuration validation errors
    Config(String),
    /// Failed to load or decode a page image
    ImageLoad { path: String, message: String },
    /// Failed to encode or write a cropped image
    ImageWrite { path: String, message: String },
    /// File system errors (directory scan, output directory creation)
    Io(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Config(msg) => write!(f, "[CONFIG] {}", msg),
            ExtractError::ImageLoad { path, message } => {
                write!(f, "[IMAGE_LOAD] {}: {}", path, message)
            }
            ExtractError::ImageWrite { path, message } => {
                write!(f, "[IMAGE_WRITE] {}: {}", path, message)
            }
            ExtractError::Io(msg) => write!(f, "[IO] {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io(err.to_string())
    }
}

/// Result type alias for convenience
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_category_tag() {
        let err = ExtractError::ImageLoad {
            path: "page_000016.png".to_string(),
            message: "unsupported format".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("[IMAGE_LOAD]"));
        assert!(rendered.contains("page_000016.png"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err: ExtractError = io_err.into();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
