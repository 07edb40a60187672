//! Error handling for the CLI application

use std::fmt;

/// Failure modes owned by the CLI rather than the segmentation library
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    NoFilesFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Segmentation of one file failed
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesFound(patterns) => {
                write!(f, "No files found matching the provided patterns: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::NoFilesFound("*.txt".into()).to_string(),
            "No files found matching the provided patterns: *.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".into()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("unknown format".into()).to_string(),
            "Configuration error: unknown format"
        );
        assert_eq!(
            CliError::ProcessingError("a.txt".into()).to_string(),
            "Processing error: a.txt"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("bad".into()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::InvalidPattern("ファイル/**[!".into());
        assert_eq!(error.to_string(), "Invalid file pattern: ファイル/**[!");
    }
}
