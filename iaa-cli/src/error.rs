//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Encoding name the reader does not support
    UnknownEncoding(String),
    /// Bytes that are not valid in the requested encoding
    Decoding(String),
    /// Configuration error
    ConfigError(String),
    /// No metric selected for a comparison
    MissingMetric,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::UnknownEncoding(name) => write!(f, "Unknown encoding: {name}"),
            CliError::Decoding(msg) => write!(f, "Decoding error: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingMetric => write!(
                f,
                "Missing metric: choose --naive, --ngram and/or --levenshtein"
            ),
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
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("text1.txt".to_string());
        assert_eq!(error.to_string(), "File not found: text1.txt");
    }

    #[test]
    fn test_unknown_encoding_display() {
        let error = CliError::UnknownEncoding("ebcdic".to_string());
        assert_eq!(error.to_string(), "Unknown encoding: ebcdic");
    }

    #[test]
    fn test_missing_metric_display() {
        let msg = CliError::MissingMetric.to_string();
        assert!(msg.contains("--naive"));
        assert!(msg.contains("--ngram"));
        assert!(msg.contains("--levenshtein"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad marker".into()).into());
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
        assert_eq!(err.to_string(), "Configuration error: bad marker");
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("Annotationen/Text ä 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: Annotationen/Text ä 文件.txt");
    }
}
