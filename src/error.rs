//! Error types for the specgen library.

use std::io;
use thiserror::Error;

/// Result type alias for specgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a specification.
///
/// Grammar consistency findings are not errors; see [`crate::check::Diagnostic`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a well-formed document tree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document tree violates an ingest precondition.
    #[error("Invalid document: {0}")]
    Ingest(String),

    /// Error during rendering (Markdown, styled package, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Ingest("empty emphasis span in section 1.2".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid document: empty emphasis span in section 1.2"
        );

        let err = Error::Render("bad".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
