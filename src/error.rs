//! Error types for dxf-codec

use std::io;
use thiserror::Error;

/// Main error type for codec operations
///
/// Most problems found while decoding are not errors: they are collected as
/// [`Notification`](crate::notification::Notification)s and decoding goes on.
/// The variants below are the conditions that stop a decode or encode.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading or writing the pair stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The pair stream itself is not well formed (e.g. a non-numeric code line)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A known group code carried a value that does not parse as its type
    #[error("Malformed value for group code {code} at pair {position}: '{value}'")]
    MalformedValue {
        code: i32,
        value: String,
        position: usize,
    },

    /// A declared sub-record count was not reached before the parent closed
    #[error("Unbalanced {record}: declared {declared} items, received {received}")]
    UnbalancedAccumulator {
        record: String,
        declared: usize,
        received: usize,
    },

    /// Unsupported format revision string
    #[error("Unsupported DXF version: {0:?}")]
    UnsupportedVersion(String),

    /// Decoding was cancelled through a cancellation token
    #[error("Decoding cancelled")]
    Cancelled,

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_value_display() {
        let err = DxfError::MalformedValue {
            code: 40,
            value: "abc".to_string(),
            position: 12,
        };
        assert_eq!(
            err.to_string(),
            "Malformed value for group code 40 at pair 12: 'abc'"
        );
    }

    #[test]
    fn test_unbalanced_display() {
        let err = DxfError::UnbalancedAccumulator {
            record: "LWPOLYLINE vertices".to_string(),
            declared: 4,
            received: 3,
        };
        assert!(err.to_string().contains("declared 4"));
        assert!(err.to_string().contains("received 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let err: DxfError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }
}
