//! Error types for the segmentation library

use thiserror::Error;

/// Errors surfaced to callers of the segmentation API
///
/// Pattern-matching stages never fail: a normalizer or cascade stage that
/// finds nothing to do is a no-op. Only input validation, configuration and
/// lexicon loading can produce an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The input was empty or contained only whitespace
    #[error("Empty input: nothing to segment")]
    EmptyInput,

    /// The input could not be interpreted as text
    #[error("Invalid input type: {0}")]
    InvalidType(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lexicon parsing or validation error
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::InvalidType(format!("input is not valid UTF-8 text ({err})"))
    }
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyInput.to_string(), "Empty input: nothing to segment");
        assert_eq!(
            Error::InvalidType("bytes".into()).to_string(),
            "Invalid input type: bytes"
        );
        assert_eq!(
            Error::Lexicon("missing [oracle]".into()).to_string(),
            "Lexicon error: missing [oracle]"
        );
    }

    #[test]
    fn test_utf8_error_becomes_invalid_type() {
        let err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        match Error::from(err) {
            Error::InvalidType(msg) => assert!(msg.contains("UTF-8")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::from(io), Error::Io("gone".into()));
    }
}
