//! Error types for loading blog collections.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading blog records.
///
/// The aggregation helpers themselves never fail; these errors only come
/// from the [`crate::source`] module.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be parsed as JSON at the top level.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single record did not match the blog record shape.
    #[error("invalid record at {location}: {reason}")]
    InvalidRecord {
        /// File and position of the record (e.g. `blogs.jsonl:12`).
        location: String,
        /// Why the record was rejected.
        reason: String,
    },

    /// The configured input path does not exist.
    #[error("input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_display() {
        let err = Error::InvalidRecord {
            location: "blogs.jsonl:3".to_string(),
            reason: "missing field `title`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("blogs.jsonl:3"));
        assert!(msg.contains("missing field `title`"));
    }

    #[test]
    fn test_input_not_found_display() {
        let err = Error::InputNotFound(PathBuf::from("/nope/blogs.json"));
        assert_eq!(err.to_string(), "input path does not exist: /nope/blogs.json");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
